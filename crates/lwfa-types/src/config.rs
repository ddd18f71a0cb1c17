// ─────────────────────────────────────────────────────────────────────
// SCPN Wakefield Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::error::{LwfaError, LwfaResult};

/// Energy-gain sweep: a set of a0 values evaluated over a density range,
/// plus the matched point for each a0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    pub name: String,
    pub beam: BeamConfig,
    /// Laser pulse duration, intensity FWHM [fs]. Sets only the laser used
    /// for the energy-gain curves; the matched point takes its duration from
    /// `matching` (see [`MatchingConfig::pulse_duration_fs`]).
    #[serde(default = "default_pulse_duration_fs")]
    pub pulse_duration_fs: f64,
    pub a0_values: Vec<f64>,
    #[serde(default)]
    pub densities: DensityRange,
    #[serde(default)]
    pub matching: MatchingConfig,
}

/// Focused Gaussian beam geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamConfig {
    /// Beam waist [µm]. When absent the beam only fixes the wavelength.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w0_um: Option<f64>,
    /// Laser wavelength [µm] (default: 0.8, Ti:Sapphire)
    #[serde(default = "default_wavelength_um")]
    pub wavelength_um: f64,
}

/// Logarithmically spaced electron densities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DensityRange {
    /// Lowest density [cm⁻³] (default: 1e16)
    #[serde(default = "default_min_density_cm3")]
    pub min_cm3: f64,
    /// Highest density [cm⁻³] (default: 1e20)
    #[serde(default = "default_max_density_cm3")]
    pub max_cm3: f64,
    /// Number of samples (default: 20)
    #[serde(default = "default_density_points")]
    pub points: usize,
}

/// Options for the matched laser-plasma solver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Pulse duration [fs] used to size the waist when the beam has none
    /// (default: 30). Independent of [`SweepConfig::pulse_duration_fs`].
    #[serde(default = "default_pulse_duration_fs")]
    pub pulse_duration_fs: f64,
    /// Upper density bound as a fraction of the critical density
    /// (default: 1.0, i.e. underdense).
    #[serde(default = "default_max_density_fraction")]
    pub max_density_fraction: f64,
}

fn default_pulse_duration_fs() -> f64 {
    30.0
}
fn default_wavelength_um() -> f64 {
    0.8
}
fn default_min_density_cm3() -> f64 {
    1e16
}
fn default_max_density_cm3() -> f64 {
    1e20
}
fn default_density_points() -> usize {
    20
}
fn default_max_density_fraction() -> f64 {
    1.0
}

impl Default for BeamConfig {
    fn default() -> Self {
        BeamConfig {
            w0_um: Some(15.0),
            wavelength_um: default_wavelength_um(),
        }
    }
}

impl Default for DensityRange {
    fn default() -> Self {
        DensityRange {
            min_cm3: default_min_density_cm3(),
            max_cm3: default_max_density_cm3(),
            points: default_density_points(),
        }
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        MatchingConfig {
            pulse_duration_fs: default_pulse_duration_fs(),
            max_density_fraction: default_max_density_fraction(),
        }
    }
}

impl Default for SweepConfig {
    /// 15 µm waist at 0.8 µm, 30 fs, a0 = 2..8, 1e16..1e20 cm⁻³.
    fn default() -> Self {
        SweepConfig {
            name: "energy-scaling-vs-density".to_string(),
            beam: BeamConfig::default(),
            pulse_duration_fs: default_pulse_duration_fs(),
            a0_values: (0..7).map(|i| 2.0 + i as f64).collect(),
            densities: DensityRange::default(),
            matching: MatchingConfig::default(),
        }
    }
}

impl MatchingConfig {
    pub fn validate(&self) -> LwfaResult<()> {
        if !(self.pulse_duration_fs.is_finite() && self.pulse_duration_fs > 0.0) {
            return Err(LwfaError::ConfigError(format!(
                "matching pulse_duration_fs must be positive, got {}",
                self.pulse_duration_fs
            )));
        }
        if !(self.max_density_fraction.is_finite() && self.max_density_fraction > 0.0) {
            return Err(LwfaError::ConfigError(format!(
                "max_density_fraction must be positive, got {}",
                self.max_density_fraction
            )));
        }
        Ok(())
    }
}

impl SweepConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> LwfaResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> LwfaResult<()> {
        if self.a0_values.is_empty() {
            return Err(LwfaError::ConfigError(
                "sweep requires at least one a0 value".to_string(),
            ));
        }
        if let Some(bad) = self.a0_values.iter().find(|a| !(a.is_finite() && **a > 0.0)) {
            return Err(LwfaError::ConfigError(format!(
                "a0 values must be positive and finite, got {bad}"
            )));
        }
        if !(self.pulse_duration_fs.is_finite() && self.pulse_duration_fs > 0.0) {
            return Err(LwfaError::ConfigError(format!(
                "pulse_duration_fs must be positive, got {}",
                self.pulse_duration_fs
            )));
        }
        if let Some(w0) = self.beam.w0_um {
            if !(w0.is_finite() && w0 > 0.0) {
                return Err(LwfaError::ConfigError(format!(
                    "beam w0_um must be positive, got {w0}"
                )));
            }
        }
        if !(self.beam.wavelength_um.is_finite() && self.beam.wavelength_um > 0.0) {
            return Err(LwfaError::ConfigError(format!(
                "beam wavelength_um must be positive, got {}",
                self.beam.wavelength_um
            )));
        }
        let d = &self.densities;
        if d.points < 2 {
            return Err(LwfaError::ConfigError(format!(
                "density range needs at least 2 points, got {}",
                d.points
            )));
        }
        if !(d.min_cm3 > 0.0 && d.max_cm3.is_finite() && d.min_cm3 < d.max_cm3) {
            return Err(LwfaError::ConfigError(format!(
                "density range must satisfy 0 < min < max, got [{}, {}]",
                d.min_cm3, d.max_cm3
            )));
        }
        self.matching.validate()
    }
}

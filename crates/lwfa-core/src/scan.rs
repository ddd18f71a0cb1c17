// ─────────────────────────────────────────────────────────────────────
// SCPN Wakefield Core — Energy Scan
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Energy gain versus electron density, one curve per a0, with the matched
//! point of each curve. Produces plot-ready arrays; rendering is left to
//! the caller.

use std::sync::Arc;

use ndarray::Array1;
use rayon::prelude::*;

use lwfa_types::config::SweepConfig;
use lwfa_types::error::{LwfaError, LwfaResult};
use lwfa_units::{Dimension, Quantity, QuantityArray};

use crate::beam::GaussianBeam;
use crate::laser::Laser;
use crate::matching::matched_laser_plasma_with;
use crate::plasma::Plasma;

/// Matched configuration for one a0.
#[derive(Debug, Clone)]
pub struct MatchedPoint {
    pub npe: Quantity,
    pub energy_gain: Quantity,
}

#[derive(Debug, Clone)]
pub struct ScanCurve {
    pub a0: f64,
    pub densities: QuantityArray,
    pub energy_gains: QuantityArray,
    /// `None` when no underdense matched density exists.
    pub matched: Option<MatchedPoint>,
}

/// ΔE [MeV] for every density in `densities`, in order.
pub fn energy_gain_curve(laser: &Arc<Laser>, densities: &QuantityArray) -> LwfaResult<QuantityArray> {
    if densities.dimension() != Dimension::NUMBER_DENSITY {
        return Err(LwfaError::DimensionMismatch {
            operation: "energy_gain_curve",
            left: densities.unit().symbol().to_string(),
            right: "cm**-3".to_string(),
        });
    }
    let unit = densities.unit();
    let gains = densities
        .values()
        .to_vec()
        .into_par_iter()
        .map(|n| {
            let plasma = Plasma::new(Quantity::with_unit(n, unit.clone()), Arc::clone(laser))?;
            plasma.energy_gain().map(|de| de.value())
        })
        .collect::<LwfaResult<Vec<f64>>>()?;
    QuantityArray::new(Array1::from(gains), "MeV")
}

pub struct EnergyScan;

impl EnergyScan {
    /// Evaluate every a0 of `config` over its density range.
    pub fn run(config: &SweepConfig) -> LwfaResult<Vec<ScanCurve>> {
        config.validate()?;
        let beam = Arc::new(GaussianBeam::from_config(&config.beam)?);
        let matching_beam = GaussianBeam::from_wavelength(beam.wavelength().clone())?;
        let duration = Quantity::new(config.pulse_duration_fs, "fs")?;
        let range = &config.densities;
        let densities = QuantityArray::logspace(
            range.min_cm3.log10(),
            range.max_cm3.log10(),
            range.points,
            "cm**-3",
        )?;

        tracing::info!(
            name = %config.name,
            beam = %beam,
            curves = config.a0_values.len(),
            points = range.points,
            "running energy scan"
        );

        let mut curves = Vec::with_capacity(config.a0_values.len());
        for &a0 in &config.a0_values {
            let laser = Arc::new(Laser::from_a0(a0, duration.clone(), Arc::clone(&beam))?);
            let energy_gains = energy_gain_curve(&laser, &densities)?;

            let matched = match matched_laser_plasma_with(a0, &matching_beam, &config.matching) {
                Ok(plasma) => Some(MatchedPoint {
                    energy_gain: plasma.energy_gain()?,
                    npe: plasma.npe().clone(),
                }),
                Err(LwfaError::NoMatchedDensity(reason)) => {
                    tracing::warn!(a0, %reason, "no matched point");
                    None
                }
                Err(e) => return Err(e),
            };

            curves.push(ScanCurve {
                a0,
                densities: densities.clone(),
                energy_gains,
                matched,
            });
        }
        Ok(curves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laser(a0: f64) -> Arc<Laser> {
        let beam = GaussianBeam::new(
            Quantity::new(15.0, "µm").unwrap(),
            Quantity::new(0.8, "µm").unwrap(),
        )
        .unwrap();
        Arc::new(Laser::from_a0(a0, Quantity::new(30.0, "fs").unwrap(), Arc::new(beam)).unwrap())
    }

    #[test]
    fn test_curve_matches_serial_evaluation() {
        let l = laser(4.0);
        let densities = QuantityArray::logspace(16.0, 20.0, 20, "cm**-3").unwrap();
        let curve = energy_gain_curve(&l, &densities).unwrap();
        assert_eq!(curve.len(), 20);
        assert_eq!(curve.unit().symbol(), "MeV");
        for (i, n) in densities.iter().enumerate() {
            let serial = Plasma::new(n, Arc::clone(&l)).unwrap().energy_gain().unwrap();
            assert_eq!(curve.values()[i], serial.value());
        }
    }

    #[test]
    fn test_curve_strictly_decreasing() {
        let densities = QuantityArray::logspace(16.0, 20.0, 20, "cm**-3").unwrap();
        let curve = energy_gain_curve(&laser(4.0), &densities).unwrap();
        for w in curve.values().windows(2) {
            assert!(w[1] < w[0], "ΔE not decreasing: {} -> {}", w[0], w[1]);
        }
    }

    #[test]
    fn test_curve_rejects_non_density() {
        let lengths = QuantityArray::linspace(1.0, 2.0, 3, "µm").unwrap();
        assert!(matches!(
            energy_gain_curve(&laser(4.0), &lengths),
            Err(LwfaError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_default_scan() {
        let config = SweepConfig::default();
        let curves = EnergyScan::run(&config).unwrap();
        assert_eq!(curves.len(), 7);
        for curve in &curves {
            assert_eq!(curve.densities.len(), 20);
            let matched = curve.matched.as_ref().expect("matched point");
            let n = matched.npe.to_value("cm**-3").unwrap();
            assert!(n > 1e16 && n < 1e20, "a0 = {}: n = {n:e}", curve.a0);
            assert!(matched.energy_gain.value() > 0.0);
        }
        // Larger a0 gives larger ΔE at every density.
        for pair in curves.windows(2) {
            for (lo, hi) in pair[0]
                .energy_gains
                .values()
                .iter()
                .zip(pair[1].energy_gains.values().iter())
            {
                assert!(hi > lo);
            }
        }
    }

    #[test]
    fn test_scan_records_missing_match() {
        let mut config = SweepConfig::default();
        config.matching.max_density_fraction = 1e-6;
        let curves = EnergyScan::run(&config).unwrap();
        assert!(curves.iter().all(|c| c.matched.is_none()));
        assert!(curves.iter().all(|c| c.energy_gains.len() == 20));
    }
}

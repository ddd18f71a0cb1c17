// ─────────────────────────────────────────────────────────────────────
// SCPN Wakefield Core — Gaussian Beam
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Focused Gaussian beam geometry.

use std::f64::consts::{LN_2, PI};
use std::fmt;

use lwfa_types::config::BeamConfig;
use lwfa_types::constants::{C_LIGHT, EPS0, M_ELECTRON, Q_ELECTRON};
use lwfa_types::error::{LwfaError, LwfaResult};
use lwfa_units::{Dimension, Quantity};

/// Gaussian beam with waist `w0` (1/e² field radius) and wavelength `λL`.
///
/// The waist may be left unspecified; the matching solver then sizes it.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianBeam {
    w0: Option<Quantity>,
    wavelength: Quantity,
}

impl GaussianBeam {
    pub fn new(w0: Quantity, wavelength: Quantity) -> LwfaResult<Self> {
        w0.positive_si("w0", Dimension::LENGTH)?;
        wavelength.positive_si("λL", Dimension::LENGTH)?;
        Ok(GaussianBeam {
            w0: Some(w0),
            wavelength,
        })
    }

    /// Beam fixed only by its wavelength.
    pub fn from_wavelength(wavelength: Quantity) -> LwfaResult<Self> {
        wavelength.positive_si("λL", Dimension::LENGTH)?;
        Ok(GaussianBeam {
            w0: None,
            wavelength,
        })
    }

    /// Waist from the intensity FWHM: w0 = fwhm / √(2 ln 2).
    pub fn from_fwhm(fwhm: Quantity, wavelength: Quantity) -> LwfaResult<Self> {
        fwhm.positive_si("fwhm", Dimension::LENGTH)?;
        GaussianBeam::new(fwhm.scale(1.0 / (2.0 * LN_2).sqrt()), wavelength)
    }

    pub fn from_config(config: &BeamConfig) -> LwfaResult<Self> {
        let wavelength = Quantity::new(config.wavelength_um, "µm")?;
        match config.w0_um {
            Some(w0) => GaussianBeam::new(Quantity::new(w0, "µm")?, wavelength),
            None => GaussianBeam::from_wavelength(wavelength),
        }
    }

    /// Same wavelength, new waist.
    pub fn with_waist(&self, w0: Quantity) -> LwfaResult<Self> {
        GaussianBeam::new(w0, self.wavelength.clone())
    }

    pub fn has_waist(&self) -> bool {
        self.w0.is_some()
    }

    pub fn w0(&self) -> LwfaResult<&Quantity> {
        self.w0.as_ref().ok_or(LwfaError::MissingWaist)
    }

    pub fn wavelength(&self) -> &Quantity {
        &self.wavelength
    }

    /// zR = π·w0²/λL, in the waist's unit.
    pub fn rayleigh_length(&self) -> LwfaResult<Quantity> {
        let w0 = self.w0_si()?;
        let z_r = PI * w0 * w0 / self.wavelength_si();
        Quantity::from_si(z_r, Dimension::LENGTH).to_unit(self.w0()?.unit())
    }

    /// Intensity FWHM of the focal spot, w0·√(2 ln 2).
    pub fn fwhm(&self) -> LwfaResult<Quantity> {
        Ok(self.w0()?.scale((2.0 * LN_2).sqrt()))
    }

    /// Effective area π·w0²/2 linking peak power to peak intensity.
    pub fn spot_area(&self) -> LwfaResult<Quantity> {
        let w0 = self.w0()?;
        Ok(w0.powi(2)?.scale(PI / 2.0))
    }

    /// kL = 2π/λL
    pub fn wavenumber(&self) -> LwfaResult<Quantity> {
        Quantity::from_si(2.0 * PI / self.wavelength_si(), Dimension::WAVENUMBER).to("µm**-1")
    }

    /// ωL = 2πc/λL
    pub fn angular_frequency(&self) -> LwfaResult<Quantity> {
        Quantity::from_si(self.angular_frequency_si(), Dimension::FREQUENCY).to("fs**-1")
    }

    /// nc = ε0·me·ωL²/e²
    pub fn critical_density(&self) -> LwfaResult<Quantity> {
        Quantity::from_si(self.critical_density_si(), Dimension::NUMBER_DENSITY).to("cm**-3")
    }

    pub(crate) fn w0_si(&self) -> LwfaResult<f64> {
        Ok(self.w0()?.si_value())
    }

    pub(crate) fn wavelength_si(&self) -> f64 {
        self.wavelength.si_value()
    }

    pub(crate) fn angular_frequency_si(&self) -> f64 {
        2.0 * PI * C_LIGHT / self.wavelength_si()
    }

    pub(crate) fn critical_density_si(&self) -> f64 {
        let omega = self.angular_frequency_si();
        EPS0 * M_ELECTRON * omega * omega / (Q_ELECTRON * Q_ELECTRON)
    }
}

impl fmt::Display for GaussianBeam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.w0 {
            Some(w0) => write!(f, "GaussianBeam(w0={w0}, λL={})", self.wavelength),
            None => write!(f, "GaussianBeam(λL={})", self.wavelength),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────
// SCPN Wakefield Core — Laser
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Gaussian laser pulse.
//!
//! Gaussian in space and time, linear polarisation, `τL` is the intensity
//! FWHM. The chain linking pulse energy to a0:
//!
//!   P0 = 2·√(ln2/π)·εL/τL
//!   I0 = 2·P0/(π·w0²)
//!   E0 = √(2·I0/(ε0·c))
//!   a0 = e·E0/(me·c·ωL)

use std::f64::consts::PI;
use std::sync::Arc;

use lwfa_types::constants::{C_LIGHT, EPS0, GAUSSIAN_POWER_FACTOR, M_ELECTRON, Q_ELECTRON};
use lwfa_types::error::{ensure_positive_finite, LwfaResult};
use lwfa_units::{Dimension, Quantity};

use crate::beam::GaussianBeam;

/// Which parameter the pulse strength was specified by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LaserStrength {
    /// Pulse energy [J].
    PulseEnergy(f64),
    /// Normalized vector potential.
    A0(f64),
}

#[derive(Debug, Clone)]
pub struct Laser {
    beam: Arc<GaussianBeam>,
    duration: Quantity,
    strength: LaserStrength,
    waist_si: f64,
}

impl Laser {
    /// Laser of given pulse energy; a0 follows from the beam geometry.
    pub fn new(
        pulse_energy: Quantity,
        duration: Quantity,
        beam: Arc<GaussianBeam>,
    ) -> LwfaResult<Self> {
        let energy = pulse_energy.positive_si("εL", Dimension::ENERGY)?;
        duration.positive_si("τL", Dimension::TIME)?;
        let waist_si = beam.w0_si()?;
        Laser {
            beam,
            duration,
            strength: LaserStrength::PulseEnergy(energy),
            waist_si,
        }
        .checked()
    }

    /// Laser of given a0; pulse energy is back-derived.
    pub fn from_a0(a0: f64, duration: Quantity, beam: Arc<GaussianBeam>) -> LwfaResult<Self> {
        ensure_positive_finite("a0", a0)?;
        duration.positive_si("τL", Dimension::TIME)?;
        let waist_si = beam.w0_si()?;
        Laser {
            beam,
            duration,
            strength: LaserStrength::A0(a0),
            waist_si,
        }
        .checked()
    }

    /// The derived side of the energy/a0 pair must also be positive and finite.
    fn checked(self) -> LwfaResult<Self> {
        ensure_positive_finite("a0", self.a0())?;
        ensure_positive_finite("εL", self.pulse_energy_si())?;
        Ok(self)
    }

    pub fn beam(&self) -> &Arc<GaussianBeam> {
        &self.beam
    }

    pub fn duration(&self) -> &Quantity {
        &self.duration
    }

    pub fn strength(&self) -> LaserStrength {
        self.strength
    }

    pub fn wavelength(&self) -> &Quantity {
        self.beam.wavelength()
    }

    pub fn a0(&self) -> f64 {
        match self.strength {
            LaserStrength::A0(a0) => a0,
            LaserStrength::PulseEnergy(_) => {
                a0_from_intensity(self.intensity_si(), self.beam.angular_frequency_si())
            }
        }
    }

    pub fn pulse_energy(&self) -> LwfaResult<Quantity> {
        Quantity::from_si(self.pulse_energy_si(), Dimension::ENERGY).to("J")
    }

    pub fn peak_power(&self) -> LwfaResult<Quantity> {
        Quantity::from_si(self.peak_power_si(), Dimension::POWER).to("TW")
    }

    /// Peak intensity I0.
    pub fn intensity(&self) -> LwfaResult<Quantity> {
        Quantity::from_si(self.intensity_si(), Dimension::INTENSITY).to("W/cm**2")
    }

    /// Peak electric field E0.
    pub fn peak_field(&self) -> LwfaResult<Quantity> {
        let e0 = a0_field_scale(self.beam.angular_frequency_si()) * self.a0();
        Quantity::from_si(e0, Dimension::ELECTRIC_FIELD).to("V/m")
    }

    pub fn critical_density(&self) -> LwfaResult<Quantity> {
        self.beam.critical_density()
    }

    pub(crate) fn pulse_energy_si(&self) -> f64 {
        match self.strength {
            LaserStrength::PulseEnergy(energy) => energy,
            LaserStrength::A0(_) => {
                self.peak_power_si() * self.duration_si() / GAUSSIAN_POWER_FACTOR
            }
        }
    }

    pub(crate) fn peak_power_si(&self) -> f64 {
        match self.strength {
            LaserStrength::PulseEnergy(energy) => {
                GAUSSIAN_POWER_FACTOR * energy / self.duration_si()
            }
            LaserStrength::A0(_) => self.intensity_si() * self.spot_area_si(),
        }
    }

    pub(crate) fn intensity_si(&self) -> f64 {
        match self.strength {
            LaserStrength::PulseEnergy(_) => self.peak_power_si() / self.spot_area_si(),
            LaserStrength::A0(a0) => intensity_from_a0(a0, self.beam.angular_frequency_si()),
        }
    }

    pub(crate) fn duration_si(&self) -> f64 {
        self.duration.si_value()
    }

    pub(crate) fn waist_si(&self) -> f64 {
        self.waist_si
    }

    fn spot_area_si(&self) -> f64 {
        let w0 = self.waist_si();
        PI * w0 * w0 / 2.0
    }
}

/// Field amplitude corresponding to a0 = 1: me·c·ωL/e.
fn a0_field_scale(omega: f64) -> f64 {
    M_ELECTRON * C_LIGHT * omega / Q_ELECTRON
}

/// a0 for a peak intensity [W/m²] at angular frequency `omega` [rad/s].
pub fn a0_from_intensity(intensity: f64, omega: f64) -> f64 {
    let e0 = (2.0 * intensity / (EPS0 * C_LIGHT)).sqrt();
    e0 / a0_field_scale(omega)
}

/// Peak intensity [W/m²] for a given a0 at angular frequency `omega`.
pub fn intensity_from_a0(a0: f64, omega: f64) -> f64 {
    let e0 = a0 * a0_field_scale(omega);
    EPS0 * C_LIGHT * e0 * e0 / 2.0
}

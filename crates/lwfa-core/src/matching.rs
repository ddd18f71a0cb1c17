// ─────────────────────────────────────────────────────────────────────
// SCPN Wakefield Core — Matched Laser-Plasma
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Matched (self-guided) bubble regime.
//!
//! Matching conditions:
//!   kp·w0 = 2·√a0      (spot size equals blowout radius)
//!   c·τL  = (2/3)·w0   (pulse fits in the first bucket)
//!
//! Both are inverted in closed form, so the result is deterministic.

use std::sync::Arc;

use lwfa_types::config::MatchingConfig;
use lwfa_types::constants::{C_LIGHT, EPS0, M_ELECTRON, Q_ELECTRON};
use lwfa_types::error::{ensure_positive_finite, LwfaError, LwfaResult};
use lwfa_units::Quantity;

use crate::beam::GaussianBeam;
use crate::laser::Laser;
use crate::plasma::Plasma;

/// Below this a0 the blowout is incomplete and P < Pc at the matched density.
const MIN_BLOWOUT_A0: f64 = 2.0;

/// Electron density [m⁻³] with kp·w0 = 2√a0.
pub fn matched_density(a0: f64, w0: f64) -> f64 {
    let k_p = 2.0 * a0.sqrt() / w0;
    EPS0 * M_ELECTRON * C_LIGHT * C_LIGHT * k_p * k_p / (Q_ELECTRON * Q_ELECTRON)
}

/// Pulse duration [s] with c·τL = (2/3)·w0.
pub fn matched_duration(w0: f64) -> f64 {
    2.0 * w0 / (3.0 * C_LIGHT)
}

/// Waist [m] with c·τL = (2/3)·w0.
pub fn matched_waist(duration: f64) -> f64 {
    1.5 * C_LIGHT * duration
}

/// Matched plasma for `a0` and `beam`, with default options.
pub fn matched_laser_plasma(a0: f64, beam: &GaussianBeam) -> LwfaResult<Plasma> {
    matched_laser_plasma_with(a0, beam, &MatchingConfig::default())
}

/// Matched plasma for `a0` and `beam`.
///
/// A beam with a waist keeps it and gets the matched pulse duration.
/// A waistless beam gets its waist from `config.pulse_duration_fs`.
pub fn matched_laser_plasma_with(
    a0: f64,
    beam: &GaussianBeam,
    config: &MatchingConfig,
) -> LwfaResult<Plasma> {
    ensure_positive_finite("a0", a0)?;
    config.validate()?;

    let (beam, duration) = if beam.has_waist() {
        let w0 = beam.w0_si()?;
        (beam.clone(), matched_duration(w0))
    } else {
        let duration = config.pulse_duration_fs * 1e-15;
        let w0 = Quantity::new(matched_waist(duration) * 1e6, "µm")?;
        (beam.with_waist(w0)?, duration)
    };
    let w0 = beam.w0_si()?;

    let n_pe = matched_density(a0, w0);
    if !(n_pe.is_finite() && n_pe > 0.0) {
        return Err(LwfaError::NoMatchedDensity(format!(
            "density {n_pe:e} m^-3 for a0={a0}, w0={w0:e} m is not a positive finite value"
        )));
    }
    let n_max = config.max_density_fraction * beam.critical_density_si();
    if n_pe >= n_max {
        return Err(LwfaError::NoMatchedDensity(format!(
            "density {:.3e} cm^-3 for a0={a0} exceeds {}·n_c = {:.3e} cm^-3 (w0 too small)",
            n_pe * 1e-6,
            config.max_density_fraction,
            n_max * 1e-6
        )));
    }

    let laser = Laser::from_a0(a0, Quantity::new(duration * 1e15, "fs")?, Arc::new(beam))?;
    let plasma = Plasma::new(Quantity::new(n_pe * 1e-6, "cm**-3")?, Arc::new(laser))?;

    if a0 < MIN_BLOWOUT_A0 {
        tracing::warn!(
            a0,
            power_ratio = plasma.power_ratio(),
            "a0 below blowout threshold; matched laser is not self-guided"
        );
    }
    tracing::debug!(
        a0,
        n_pe_cm3 = n_pe * 1e-6,
        w0_um = w0 * 1e6,
        tau_fs = duration * 1e15,
        "matched laser-plasma configuration"
    );

    Ok(plasma)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn um(v: f64) -> Quantity {
        Quantity::new(v, "µm").unwrap()
    }

    fn rel(a: f64, b: f64) -> f64 {
        ((a - b) / b).abs()
    }

    #[test]
    fn test_waistless_beam_reference() {
        let beam = GaussianBeam::from_wavelength(um(0.8)).unwrap();
        let plasma = matched_laser_plasma(4.0, &beam).unwrap();
        let n = plasma.npe().to_value("cm**-3").unwrap();
        assert!(n > 1e16 && n < 1e20, "n_pe = {n:e}");
        assert_eq!(plasma.laser().a0(), 4.0);
        // w0 = 1.5·c·30 fs ≈ 13.5 µm → n ≈ 2.48e18 cm⁻³
        assert!(rel(n, 2.4826e18) < 1e-3, "n_pe = {n:e}");
        assert!(rel(plasma.laser().duration().to_value("fs").unwrap(), 30.0) < 1e-12);
    }

    #[test]
    fn test_keeps_given_waist() {
        let beam = GaussianBeam::new(um(15.0), um(0.8)).unwrap();
        let plasma = matched_laser_plasma(4.0, &beam).unwrap();
        assert!(rel(plasma.laser().beam().w0().unwrap().value(), 15.0) < 1e-12);
        let n = plasma.npe().to_value("cm**-3").unwrap();
        assert!(rel(n, 2.008e18) < 1e-3, "n_pe = {n:e}");
        // τL = 2·w0/(3c) ≈ 33.4 fs
        let tau = plasma.laser().duration().to_value("fs").unwrap();
        assert!(rel(tau, 33.356) < 1e-3, "τL = {tau}");
    }

    #[test]
    fn test_matched_plasma_satisfies_condition() {
        let beam = GaussianBeam::new(um(20.0), um(0.8)).unwrap();
        for a0 in [2.0, 3.5, 5.0, 8.0] {
            let plasma = matched_laser_plasma(a0, &beam).unwrap();
            assert!(plasma.is_matched(1e-9), "a0 = {a0}");
            // P/Pc = (kp·w0·a0)²/32 = a0³/8 on the matched curve
            assert!(rel(plasma.power_ratio(), a0.powi(3) / 8.0) < 1e-6);
        }
    }

    #[test]
    fn test_deterministic() {
        let beam = GaussianBeam::from_wavelength(um(0.8)).unwrap();
        let a = matched_laser_plasma(4.0, &beam).unwrap();
        let b = matched_laser_plasma(4.0, &beam).unwrap();
        assert_eq!(a.npe().value(), b.npe().value());
    }

    #[test]
    fn test_density_grows_with_a0() {
        let beam = GaussianBeam::from_wavelength(um(0.8)).unwrap();
        let mut prev = 0.0;
        for a0 in [2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0] {
            let n = matched_laser_plasma(a0, &beam).unwrap().npe().value();
            assert!(n > prev, "a0 = {a0}: {n:e} <= {prev:e}");
            prev = n;
        }
    }

    #[test]
    fn test_rejects_bad_a0() {
        let beam = GaussianBeam::from_wavelength(um(0.8)).unwrap();
        for bad in [0.0, -4.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                matched_laser_plasma(bad, &beam),
                Err(LwfaError::InvalidParameter { name: "a0", .. })
            ));
        }
    }

    #[test]
    fn test_overdense_request_fails() {
        // 0.5 µm waist at a0 = 8 needs ~4e21 cm⁻³, above nc ≈ 1.74e21 cm⁻³
        let beam = GaussianBeam::new(um(0.5), um(0.8)).unwrap();
        match matched_laser_plasma(8.0, &beam) {
            Err(LwfaError::NoMatchedDensity(msg)) => assert!(msg.contains("n_c"), "{msg}"),
            other => panic!("Expected NoMatchedDensity, got {other:?}"),
        }
    }

    #[test]
    fn test_density_fraction_limit() {
        let beam = GaussianBeam::new(um(15.0), um(0.8)).unwrap();
        let config = MatchingConfig {
            max_density_fraction: 1e-4,
            ..MatchingConfig::default()
        };
        assert!(matches!(
            matched_laser_plasma_with(4.0, &beam, &config),
            Err(LwfaError::NoMatchedDensity(_))
        ));
    }

    #[test]
    fn test_invalid_config() {
        let beam = GaussianBeam::from_wavelength(um(0.8)).unwrap();
        let config = MatchingConfig {
            pulse_duration_fs: -1.0,
            ..MatchingConfig::default()
        };
        assert!(matches!(
            matched_laser_plasma_with(4.0, &beam, &config),
            Err(LwfaError::ConfigError(_))
        ));
    }

    #[test]
    fn test_closed_form_inverse() {
        let w0 = 12e-6;
        let n = matched_density(4.0, w0);
        let k_p = (n * Q_ELECTRON * Q_ELECTRON / (EPS0 * M_ELECTRON)).sqrt() / C_LIGHT;
        assert!(rel(k_p * w0, 4.0) < 1e-12);
        assert!(rel(matched_waist(matched_duration(w0)), w0) < 1e-12);
    }
}

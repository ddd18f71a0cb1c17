// ─────────────────────────────────────────────────────────────────────
// SCPN Wakefield Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Physical constants in SI units (CODATA 2018).

use std::f64::consts::PI;

/// Speed of light in vacuum (m/s)
pub const C_LIGHT: f64 = 299_792_458.0;

/// Elementary charge (C)
pub const Q_ELECTRON: f64 = 1.602176634e-19;

/// Electron rest mass (kg)
pub const M_ELECTRON: f64 = 9.1093837015e-31;

/// Vacuum permittivity (F/m)
pub const EPS0: f64 = 8.8541878128e-12;

/// Classical electron radius (m): e² / (4π ε0 me c²)
pub const R_ELECTRON: f64 = 2.8179403262e-15;

/// Electron rest energy (J)
pub const ME_C2: f64 = M_ELECTRON * C_LIGHT * C_LIGHT;

/// One electronvolt (J)
pub const ELECTRONVOLT: f64 = Q_ELECTRON;

/// Relativistic power unit me²c⁵/e² in SI, 4π ε0 me² c⁵ / e² (≈ 8.7 GW).
pub const P_RELATIVISTIC: f64 =
    4.0 * PI * EPS0 * M_ELECTRON * M_ELECTRON * C_LIGHT * C_LIGHT * C_LIGHT * C_LIGHT * C_LIGHT
        / (Q_ELECTRON * Q_ELECTRON);

/// Relativistic self-focusing power scale 8π ε0 me² c⁵ / e² (≈ 17.4 GW).
/// Multiplied by nc/ne it gives the critical power.
pub const P_SELF_FOCUSING: f64 = 2.0 * P_RELATIVISTIC;

/// Gaussian pulse shape factor 2·√(ln2/π): peak power = factor × energy / FWHM.
pub const GAUSSIAN_POWER_FACTOR: f64 = 0.939_437_278_699_651_3;

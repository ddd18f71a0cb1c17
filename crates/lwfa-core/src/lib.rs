// ─────────────────────────────────────────────────────────────────────
// SCPN Wakefield Core — Wakefield Models
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Laser-wakefield parameter models.
//!
//! Beam → Laser → Plasma, each stage holding the previous one behind an
//! `Arc`, plus the matched-regime solver and density scans.
//! Scalings follow Lu et al., Phys. Rev. ST Accel. Beams 10, 061301 (2007).

pub mod beam;
pub mod laser;
pub mod matching;
pub mod plasma;
pub mod scan;

pub use beam::GaussianBeam;
pub use laser::{Laser, LaserStrength};
pub use matching::{matched_laser_plasma, matched_laser_plasma_with};
pub use plasma::Plasma;

// ─────────────────────────────────────────────────────────────────────
// SCPN Wakefield Core — Plasma
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Underdense plasma driven by a laser in the bubble (blowout) regime.
//!
//! Phenomenological scalings (Lu et al. 2007), with nc/ne = (ωL/ωp)²:
//!   R   = 2·√a0 / kp
//!   Ld  = (4/3)·(nc/ne)·√a0 / kp
//!   Lpd = (nc/ne)·c·τL
//!   ΔE  = (2/3)·me·c²·(nc/ne)·a0
//!   N   = (8/15)·√(P/Prel) / (kL·re)

use std::f64::consts::PI;
use std::sync::Arc;

use lwfa_types::constants::{
    C_LIGHT, EPS0, ME_C2, M_ELECTRON, P_RELATIVISTIC, P_SELF_FOCUSING, Q_ELECTRON, R_ELECTRON,
};
use lwfa_types::error::LwfaResult;
use lwfa_units::{Dimension, Quantity};

use crate::laser::Laser;

#[derive(Debug, Clone)]
pub struct Plasma {
    npe: Quantity,
    laser: Arc<Laser>,
}

impl Plasma {
    pub fn new(npe: Quantity, laser: Arc<Laser>) -> LwfaResult<Self> {
        npe.positive_si("n_pe", Dimension::NUMBER_DENSITY)?;
        Ok(Plasma { npe, laser })
    }

    /// Electron density, as given.
    pub fn npe(&self) -> &Quantity {
        &self.npe
    }

    pub fn laser(&self) -> &Arc<Laser> {
        &self.laser
    }

    /// ωp = √(ne·e²/(ε0·me))
    pub fn plasma_frequency(&self) -> LwfaResult<Quantity> {
        Quantity::from_si(self.plasma_frequency_si(), Dimension::FREQUENCY).to("fs**-1")
    }

    /// kp = ωp/c
    pub fn wavenumber(&self) -> LwfaResult<Quantity> {
        Quantity::from_si(self.wavenumber_si(), Dimension::WAVENUMBER).to("µm**-1")
    }

    /// λp = 2π/kp
    pub fn wavelength(&self) -> LwfaResult<Quantity> {
        Quantity::from_si(2.0 * PI / self.wavenumber_si(), Dimension::LENGTH).to("µm")
    }

    /// nc/ne, equal to (ωL/ωp)².
    pub fn density_ratio(&self) -> f64 {
        self.laser.beam().critical_density_si() / self.npe_si()
    }

    /// Relativistic self-focusing threshold Pc ≈ 17.4 GW·nc/ne.
    pub fn critical_power(&self) -> LwfaResult<Quantity> {
        Quantity::from_si(self.critical_power_si(), Dimension::POWER).to("TW")
    }

    /// P0/Pc
    pub fn power_ratio(&self) -> f64 {
        self.laser.peak_power_si() / self.critical_power_si()
    }

    /// Blowout radius, equal to the matched spot size 2√a0/kp.
    pub fn bubble_radius(&self) -> LwfaResult<Quantity> {
        Quantity::from_si(self.bubble_radius_si(), Dimension::LENGTH).to("µm")
    }

    pub fn dephasing_length(&self) -> LwfaResult<Quantity> {
        let l_d = 4.0 / 3.0 * self.density_ratio() * self.laser.a0().sqrt() / self.wavenumber_si();
        Quantity::from_si(l_d, Dimension::LENGTH).to("mm")
    }

    pub fn depletion_length(&self) -> LwfaResult<Quantity> {
        let l_pd = self.density_ratio() * C_LIGHT * self.laser.duration_si();
        Quantity::from_si(l_pd, Dimension::LENGTH).to("mm")
    }

    /// Energy gain ΔE = (2/3)·me·c²·(nc/ne)·a0.
    pub fn energy_gain(&self) -> LwfaResult<Quantity> {
        Quantity::from_si(self.energy_gain_si(), Dimension::ENERGY).to("MeV")
    }

    /// Self-injected charge estimate.
    pub fn accelerated_charge(&self) -> LwfaResult<Quantity> {
        Quantity::from_si(Q_ELECTRON * self.electron_number(), Dimension::CHARGE).to("pC")
    }

    /// Laser-to-electron energy transfer N·ΔE/εL. Only meaningful close to
    /// the matched density.
    pub fn efficiency(&self) -> f64 {
        self.electron_number() * self.energy_gain_si() / self.laser.pulse_energy_si()
    }

    /// True when the beam waist equals the bubble radius within `rel_tol`.
    pub fn is_matched(&self, rel_tol: f64) -> bool {
        let radius = self.bubble_radius_si();
        ((self.laser.waist_si() - radius) / radius).abs() <= rel_tol
    }

    pub(crate) fn npe_si(&self) -> f64 {
        self.npe.si_value()
    }

    pub(crate) fn plasma_frequency_si(&self) -> f64 {
        (self.npe_si() * Q_ELECTRON * Q_ELECTRON / (EPS0 * M_ELECTRON)).sqrt()
    }

    pub(crate) fn wavenumber_si(&self) -> f64 {
        self.plasma_frequency_si() / C_LIGHT
    }

    pub(crate) fn critical_power_si(&self) -> f64 {
        P_SELF_FOCUSING * self.density_ratio()
    }

    pub(crate) fn bubble_radius_si(&self) -> f64 {
        2.0 * self.laser.a0().sqrt() / self.wavenumber_si()
    }

    pub(crate) fn energy_gain_si(&self) -> f64 {
        2.0 / 3.0 * ME_C2 * self.density_ratio() * self.laser.a0()
    }

    fn electron_number(&self) -> f64 {
        let k_l = 2.0 * PI / self.laser.beam().wavelength_si();
        8.0 / 15.0 * (self.laser.peak_power_si() / P_RELATIVISTIC).sqrt() / (k_l * R_ELECTRON)
    }
}

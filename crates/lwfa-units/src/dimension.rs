// ─────────────────────────────────────────────────────────────────────
// SCPN Wakefield Core — Dimension
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::fmt;

/// Exponents of the SI base dimensions used by the wakefield models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimension {
    pub length: i8,
    pub mass: i8,
    pub time: i8,
    pub current: i8,
}

impl Dimension {
    pub const DIMENSIONLESS: Dimension = Dimension::new(0, 0, 0, 0);
    pub const LENGTH: Dimension = Dimension::new(1, 0, 0, 0);
    pub const MASS: Dimension = Dimension::new(0, 1, 0, 0);
    pub const TIME: Dimension = Dimension::new(0, 0, 1, 0);
    pub const CURRENT: Dimension = Dimension::new(0, 0, 0, 1);
    pub const FREQUENCY: Dimension = Dimension::new(0, 0, -1, 0);
    pub const WAVENUMBER: Dimension = Dimension::new(-1, 0, 0, 0);
    pub const NUMBER_DENSITY: Dimension = Dimension::new(-3, 0, 0, 0);
    pub const ENERGY: Dimension = Dimension::new(2, 1, -2, 0);
    pub const POWER: Dimension = Dimension::new(2, 1, -3, 0);
    pub const INTENSITY: Dimension = Dimension::new(0, 1, -3, 0);
    pub const CHARGE: Dimension = Dimension::new(0, 0, 1, 1);
    pub const VOLTAGE: Dimension = Dimension::new(2, 1, -3, -1);
    pub const ELECTRIC_FIELD: Dimension = Dimension::new(1, 1, -3, -1);

    pub const fn new(length: i8, mass: i8, time: i8, current: i8) -> Self {
        Dimension {
            length,
            mass,
            time,
            current,
        }
    }

    pub fn is_dimensionless(&self) -> bool {
        *self == Self::DIMENSIONLESS
    }

    /// Product of two dimensions; `None` if an exponent leaves the `i8` range.
    pub fn checked_mul(self, rhs: Dimension) -> Option<Self> {
        Some(Dimension::new(
            self.length.checked_add(rhs.length)?,
            self.mass.checked_add(rhs.mass)?,
            self.time.checked_add(rhs.time)?,
            self.current.checked_add(rhs.current)?,
        ))
    }

    pub fn checked_div(self, rhs: Dimension) -> Option<Self> {
        Some(Dimension::new(
            self.length.checked_sub(rhs.length)?,
            self.mass.checked_sub(rhs.mass)?,
            self.time.checked_sub(rhs.time)?,
            self.current.checked_sub(rhs.current)?,
        ))
    }

    /// Every exponent times `n`; `None` on overflow.
    pub fn checked_powi(self, n: i32) -> Option<Self> {
        let n = i8::try_from(n).ok();
        let scale = |e: i8| match n {
            Some(n) => e.checked_mul(n),
            None if e == 0 => Some(0),
            None => None,
        };
        Some(Dimension::new(
            scale(self.length)?,
            scale(self.mass)?,
            scale(self.time)?,
            scale(self.current)?,
        ))
    }

    /// Half every exponent; `None` when any exponent is odd.
    pub fn sqrt(self) -> Option<Self> {
        let exps = [self.length, self.mass, self.time, self.current];
        if exps.iter().any(|e| e % 2 != 0) {
            return None;
        }
        Some(Dimension::new(
            self.length / 2,
            self.mass / 2,
            self.time / 2,
            self.current / 2,
        ))
    }

    /// Exponents paired with their coherent SI base symbol.
    pub(crate) fn si_components(&self) -> [(&'static str, i8); 4] {
        [
            ("kg", self.mass),
            ("m", self.length),
            ("s", self.time),
            ("A", self.current),
        ]
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "1");
        }
        let parts: Vec<String> = [
            ("L", self.length),
            ("M", self.mass),
            ("T", self.time),
            ("I", self.current),
        ]
        .iter()
        .filter(|(_, e)| *e != 0)
        .map(|(s, e)| if *e == 1 { s.to_string() } else { format!("{s}^{e}") })
        .collect();
        write!(f, "{}", parts.join("·"))
    }
}

// ─────────────────────────────────────────────────────────────────────
// SCPN Wakefield Core — Quantity
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Scalar physical quantity.
//!
//! Addition and subtraction (`try_add`, `try_sub`) reject operands of
//! different dimension. Multiplication, division and powers (`try_mul`,
//! `try_div`, `powi`) compose the units and fail only when a dimension
//! exponent leaves its range. Scaling by a pure number never fails.

use std::fmt;
use std::ops::{Div, Mul};

use lwfa_types::error::{ensure_positive_finite, LwfaError, LwfaResult};

use crate::dimension::Dimension;
use crate::unit::Unit;

#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    value: f64,
    unit: Unit,
}

impl Quantity {
    /// `Quantity::new(15.0, "µm")`
    pub fn new(value: f64, unit: &str) -> LwfaResult<Self> {
        Ok(Quantity {
            value,
            unit: Unit::parse(unit)?,
        })
    }

    pub fn with_unit(value: f64, unit: Unit) -> Self {
        Quantity { value, unit }
    }

    pub fn dimensionless(value: f64) -> Self {
        Quantity {
            value,
            unit: Unit::dimensionless(),
        }
    }

    /// Value expressed in the coherent SI unit of `dimension`.
    pub fn from_si(si_value: f64, dimension: Dimension) -> Self {
        Quantity {
            value: si_value,
            unit: Unit::si(dimension),
        }
    }

    /// Numeric value in this quantity's own unit.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    pub fn si_value(&self) -> f64 {
        self.value * self.unit.scale()
    }

    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }

    /// Same physical magnitude expressed in `unit`.
    pub fn to(&self, unit: &str) -> LwfaResult<Quantity> {
        self.to_unit(&Unit::parse(unit)?)
    }

    pub fn to_unit(&self, unit: &Unit) -> LwfaResult<Quantity> {
        let factor = self.unit.conversion_factor(unit)?;
        Ok(Quantity {
            value: self.value * factor,
            unit: unit.clone(),
        })
    }

    pub fn to_value(&self, unit: &str) -> LwfaResult<f64> {
        Ok(self.to(unit)?.value)
    }

    /// SI value, provided the dimension matches `expected`.
    pub fn si_in(&self, expected: Dimension) -> LwfaResult<f64> {
        if self.dimension() != expected {
            return Err(LwfaError::DimensionMismatch {
                operation: "expect",
                left: self.unit.symbol().to_string(),
                right: Unit::si(expected).symbol().to_string(),
            });
        }
        Ok(self.si_value())
    }

    /// SI value of a strictly positive, finite parameter of dimension `expected`.
    pub fn positive_si(&self, name: &'static str, expected: Dimension) -> LwfaResult<f64> {
        ensure_positive_finite(name, self.si_in(expected)?)
    }

    /// Sum in the left operand's unit.
    pub fn try_add(&self, rhs: &Quantity) -> LwfaResult<Quantity> {
        let factor = self.checked_factor("add", rhs)?;
        Ok(Quantity {
            value: self.value + rhs.value * factor,
            unit: self.unit.clone(),
        })
    }

    /// Difference in the left operand's unit.
    pub fn try_sub(&self, rhs: &Quantity) -> LwfaResult<Quantity> {
        let factor = self.checked_factor("subtract", rhs)?;
        Ok(Quantity {
            value: self.value - rhs.value * factor,
            unit: self.unit.clone(),
        })
    }

    fn checked_factor(&self, operation: &'static str, rhs: &Quantity) -> LwfaResult<f64> {
        if !self.unit.is_compatible(&rhs.unit) {
            return Err(LwfaError::DimensionMismatch {
                operation,
                left: self.unit.symbol().to_string(),
                right: rhs.unit.symbol().to_string(),
            });
        }
        Ok(rhs.unit.scale() / self.unit.scale())
    }

    pub fn powi(&self, n: i32) -> LwfaResult<Quantity> {
        Ok(Quantity {
            value: self.value.powi(n),
            unit: self.unit.powi(n)?,
        })
    }

    pub fn try_mul(&self, rhs: &Quantity) -> LwfaResult<Quantity> {
        Ok(Quantity {
            value: self.value * rhs.value,
            unit: self.unit.multiply(&rhs.unit)?,
        })
    }

    pub fn try_div(&self, rhs: &Quantity) -> LwfaResult<Quantity> {
        Ok(Quantity {
            value: self.value / rhs.value,
            unit: self.unit.divide(&rhs.unit)?,
        })
    }

    /// Square root in coherent SI; fails when a dimension exponent is odd.
    pub fn sqrt(&self) -> LwfaResult<Quantity> {
        let dim = self
            .dimension()
            .sqrt()
            .ok_or_else(|| LwfaError::DimensionMismatch {
                operation: "sqrt",
                left: self.unit.symbol().to_string(),
                right: self.dimension().to_string(),
            })?;
        Ok(Quantity::from_si(self.si_value().sqrt(), dim))
    }

    /// Multiply by a pure number, keeping the unit.
    pub fn scale(&self, factor: f64) -> Quantity {
        Quantity {
            value: self.value * factor,
            unit: self.unit.clone(),
        }
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: f64) -> Quantity {
        self.scale(rhs)
    }
}

impl Mul<Quantity> for f64 {
    type Output = Quantity;

    fn mul(self, rhs: Quantity) -> Quantity {
        rhs.scale(self)
    }
}

impl Div<f64> for Quantity {
    type Output = Quantity;

    fn div(self, rhs: f64) -> Quantity {
        self.scale(1.0 / rhs)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dimension().is_dimensionless() && self.unit.scale() == 1.0 {
            return write!(f, "{}", self.value);
        }
        write!(f, "{} {}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(a: f64, b: f64) -> f64 {
        ((a - b) / b).abs()
    }

    #[test]
    fn test_conversion_preserves_magnitude() {
        let w0 = Quantity::new(15.0, "µm").unwrap();
        let m = w0.to("m").unwrap();
        assert!(rel(m.value(), 15e-6) < 1e-12);
        assert!(rel(w0.si_value(), m.si_value()) < 1e-12);
        assert!(rel(w0.to_value("mm").unwrap(), 0.015) < 1e-12);
    }

    #[test]
    fn test_density_conversion() {
        let n = Quantity::new(1e18, "cm**-3").unwrap();
        assert!(rel(n.to_value("m**-3").unwrap(), 1e24) < 1e-12);
        assert!(rel(n.to_value("1/cm**3").unwrap(), 1e18) < 1e-12);
    }

    #[test]
    fn test_length_plus_density_fails() {
        let length = Quantity::new(1.0, "µm").unwrap();
        let density = Quantity::new(1e18, "cm**-3").unwrap();
        match length.try_add(&density) {
            Err(LwfaError::DimensionMismatch { operation, .. }) => assert_eq!(operation, "add"),
            other => panic!("Expected DimensionMismatch, got {other:?}"),
        }
        assert!(matches!(
            density.try_sub(&length),
            Err(LwfaError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_add_in_left_unit() {
        let a = Quantity::new(1.0, "µm").unwrap();
        let b = Quantity::new(1.0, "mm").unwrap();
        let sum = a.try_add(&b).unwrap();
        assert_eq!(sum.unit().symbol(), "µm");
        assert!(rel(sum.value(), 1001.0) < 1e-12);
        let diff = b.try_sub(&a).unwrap();
        assert!(rel(diff.value(), 0.999) < 1e-12);
    }

    #[test]
    fn test_mul_div_compose_dimensions() {
        let e = Quantity::new(2.0, "J").unwrap();
        let t = Quantity::new(4.0, "fs").unwrap();
        let p = e.try_div(&t).unwrap();
        assert_eq!(p.dimension(), Dimension::POWER);
        assert!(rel(p.to_value("TW").unwrap(), 0.5e3) < 1e-12);

        let w = Quantity::new(10.0, "µm").unwrap();
        let area = w.powi(2).unwrap();
        assert_eq!(area.dimension(), Dimension::LENGTH.checked_powi(2).unwrap());
        assert!(rel(area.to_value("cm**2").unwrap(), 1e-6) < 1e-12);
        let i = p.try_div(&area).unwrap();
        assert_eq!(i.dimension(), Dimension::INTENSITY);
        let back = i.try_mul(&area).unwrap();
        assert!(rel(back.to_value("TW").unwrap(), 0.5e3) < 1e-12);
    }

    #[test]
    fn test_power_overflow_is_an_error() {
        let w = Quantity::new(2.0, "m").unwrap();
        assert!(matches!(w.powi(200), Err(LwfaError::UnitSyntax(_))));
        let big = w.powi(100).unwrap();
        assert!(matches!(big.powi(2), Err(LwfaError::UnitSyntax(_))));
        assert!(matches!(big.try_mul(&big), Err(LwfaError::UnitSyntax(_))));
        let small = w.powi(-100).unwrap();
        assert!(matches!(small.try_div(&big), Err(LwfaError::UnitSyntax(_))));
        assert_eq!(w.powi(0).unwrap().dimension(), Dimension::DIMENSIONLESS);
    }

    #[test]
    fn test_sqrt() {
        let area = Quantity::new(4.0, "m**2").unwrap();
        let side = area.sqrt().unwrap();
        assert_eq!(side.dimension(), Dimension::LENGTH);
        assert!(rel(side.value(), 2.0) < 1e-12);
        let n = Quantity::new(1.0, "cm**-3").unwrap();
        assert!(n.sqrt().is_err());
    }

    #[test]
    fn test_si_in() {
        let tau = Quantity::new(30.0, "fs").unwrap();
        assert!(rel(tau.si_in(Dimension::TIME).unwrap(), 30e-15) < 1e-12);
        assert!(tau.si_in(Dimension::LENGTH).is_err());
    }

    #[test]
    fn test_positive_si() {
        let w0 = Quantity::new(15.0, "µm").unwrap();
        assert!(rel(w0.positive_si("w0", Dimension::LENGTH).unwrap(), 15e-6) < 1e-12);
        let neg = Quantity::new(-1.0, "µm").unwrap();
        assert!(matches!(
            neg.positive_si("w0", Dimension::LENGTH),
            Err(LwfaError::InvalidParameter { name: "w0", .. })
        ));
        assert!(matches!(
            w0.positive_si("tau", Dimension::TIME),
            Err(LwfaError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Quantity::new(0.8, "µm").unwrap().to_string(), "0.8 µm");
        assert_eq!(Quantity::dimensionless(4.0).to_string(), "4");
    }

    #[test]
    fn test_scalar_ops() {
        let w = Quantity::new(2.0, "µm").unwrap();
        assert!(rel((w.clone() * 3.0).value(), 6.0) < 1e-12);
        assert!(rel((3.0 * w.clone()).value(), 6.0) < 1e-12);
        assert!(rel((w / 4.0).value(), 0.5) < 1e-12);
    }
}

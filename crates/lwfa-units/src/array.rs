// ─────────────────────────────────────────────────────────────────────
// SCPN Wakefield Core — Quantity Array
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! One-dimensional array of values sharing a single unit.

use ndarray::Array1;

use lwfa_types::error::{LwfaError, LwfaResult};

use crate::dimension::Dimension;
use crate::quantity::Quantity;
use crate::unit::Unit;

#[derive(Debug, Clone, PartialEq)]
pub struct QuantityArray {
    values: Array1<f64>,
    unit: Unit,
}

impl QuantityArray {
    pub fn new(values: Array1<f64>, unit: &str) -> LwfaResult<Self> {
        Ok(QuantityArray {
            values,
            unit: Unit::parse(unit)?,
        })
    }

    pub fn with_unit(values: Array1<f64>, unit: Unit) -> Self {
        QuantityArray { values, unit }
    }

    /// Collect scalars into one array in the first element's unit.
    pub fn from_quantities(quantities: &[Quantity]) -> LwfaResult<Self> {
        let Some(first) = quantities.first() else {
            return Err(LwfaError::invalid(
                "quantities",
                "cannot build an array from an empty list",
            ));
        };
        let unit = first.unit().clone();
        let values = quantities
            .iter()
            .map(|q| q.to_unit(&unit).map(|c| c.value()))
            .collect::<LwfaResult<Vec<f64>>>()?;
        Ok(QuantityArray {
            values: Array1::from(values),
            unit,
        })
    }

    /// `n` values from `10^start_exp` to `10^stop_exp` (numpy `logspace`).
    pub fn logspace(start_exp: f64, stop_exp: f64, n: usize, unit: &str) -> LwfaResult<Self> {
        QuantityArray::new(Array1::logspace(10.0, start_exp, stop_exp, n), unit)
    }

    /// `n` geometrically spaced values from `start` to `stop` inclusive.
    pub fn geomspace(start: f64, stop: f64, n: usize, unit: &str) -> LwfaResult<Self> {
        let values = Array1::geomspace(start, stop, n).ok_or_else(|| {
            LwfaError::invalid(
                "geomspace",
                format!("endpoints must be non-zero with equal sign, got [{start}, {stop}]"),
            )
        })?;
        QuantityArray::new(values, unit)
    }

    pub fn linspace(start: f64, stop: f64, n: usize, unit: &str) -> LwfaResult<Self> {
        QuantityArray::new(Array1::linspace(start, stop, n), unit)
    }

    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Quantity> {
        self.values
            .get(index)
            .map(|&v| Quantity::with_unit(v, self.unit.clone()))
    }

    pub fn iter(&self) -> impl Iterator<Item = Quantity> + '_ {
        self.values
            .iter()
            .map(move |&v| Quantity::with_unit(v, self.unit.clone()))
    }

    pub fn to(&self, unit: &str) -> LwfaResult<QuantityArray> {
        self.to_unit(&Unit::parse(unit)?)
    }

    pub fn to_unit(&self, unit: &Unit) -> LwfaResult<QuantityArray> {
        let factor = self.unit.conversion_factor(unit)?;
        Ok(QuantityArray {
            values: &self.values * factor,
            unit: unit.clone(),
        })
    }

    /// Elementwise sum in this array's unit.
    pub fn try_add(&self, rhs: &QuantityArray) -> LwfaResult<QuantityArray> {
        if !self.unit.is_compatible(&rhs.unit) {
            return Err(LwfaError::DimensionMismatch {
                operation: "add",
                left: self.unit.symbol().to_string(),
                right: rhs.unit.symbol().to_string(),
            });
        }
        if self.len() != rhs.len() {
            return Err(LwfaError::invalid(
                "rhs",
                format!("length mismatch: {} vs {}", self.len(), rhs.len()),
            ));
        }
        let factor = rhs.unit.scale() / self.unit.scale();
        Ok(QuantityArray {
            values: &self.values + &(&rhs.values * factor),
            unit: self.unit.clone(),
        })
    }

    /// Multiply every element by a scalar quantity, composing units.
    pub fn mul_scalar(&self, rhs: &Quantity) -> LwfaResult<QuantityArray> {
        Ok(QuantityArray {
            values: &self.values * rhs.value(),
            unit: self.unit.multiply(rhs.unit())?,
        })
    }

    /// Apply `f` elementwise to the raw values, keeping the unit.
    pub fn map_values(&self, f: impl Fn(f64) -> f64) -> QuantityArray {
        QuantityArray {
            values: self.values.mapv(f),
            unit: self.unit.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(a: f64, b: f64) -> f64 {
        ((a - b) / b).abs()
    }

    #[test]
    fn test_logspace_density_sweep() {
        let n = QuantityArray::logspace(16.0, 20.0, 20, "cm**-3").unwrap();
        assert_eq!(n.len(), 20);
        assert!(rel(n.values()[0], 1e16) < 1e-12);
        assert!(rel(n.values()[19], 1e20) < 1e-12);
        assert_eq!(n.dimension(), Dimension::NUMBER_DENSITY);
        assert_eq!(n.unit().latex(), "\\mathrm{cm}^{-3}");
    }

    #[test]
    fn test_from_quantities_uses_first_unit() {
        let qs = vec![
            Quantity::new(1.0, "MeV").unwrap(),
            Quantity::new(1.0, "GeV").unwrap(),
        ];
        let arr = QuantityArray::from_quantities(&qs).unwrap();
        assert_eq!(arr.unit().symbol(), "MeV");
        assert!(rel(arr.values()[1], 1000.0) < 1e-12);
    }

    #[test]
    fn test_from_quantities_mixed_dimensions() {
        let qs = vec![
            Quantity::new(1.0, "MeV").unwrap(),
            Quantity::new(1.0, "µm").unwrap(),
        ];
        assert!(matches!(
            QuantityArray::from_quantities(&qs),
            Err(LwfaError::DimensionMismatch { .. })
        ));
        assert!(QuantityArray::from_quantities(&[]).is_err());
    }

    #[test]
    fn test_conversion_and_iteration() {
        let arr = QuantityArray::linspace(1.0, 3.0, 3, "µm").unwrap();
        let m = arr.to("m").unwrap();
        let got: Vec<f64> = m.iter().map(|q| q.value()).collect();
        assert!(rel(got[0], 1e-6) < 1e-12);
        assert!(rel(got[2], 3e-6) < 1e-12);
        assert!(m.iter().all(|q| q.unit().symbol() == "m"));
        assert!(arr.get(3).is_none());
    }

    #[test]
    fn test_try_add() {
        let a = QuantityArray::linspace(1.0, 2.0, 2, "mm").unwrap();
        let b = QuantityArray::linspace(1.0, 2.0, 2, "µm").unwrap();
        let sum = a.try_add(&b).unwrap();
        assert!(rel(sum.values()[1], 2.002) < 1e-12);
        let t = QuantityArray::linspace(1.0, 2.0, 2, "fs").unwrap();
        assert!(matches!(
            a.try_add(&t),
            Err(LwfaError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_geomspace_rejects_zero() {
        assert!(QuantityArray::geomspace(0.0, 1.0, 4, "m").is_err());
        let g = QuantityArray::geomspace(1.0, 1000.0, 4, "m").unwrap();
        assert!(rel(g.values()[1], 10.0) < 1e-12);
    }

    #[test]
    fn test_mul_scalar_composes_units() {
        let tau = QuantityArray::linspace(10.0, 30.0, 3, "fs").unwrap();
        let p = Quantity::new(2.0, "TW").unwrap();
        let energy = tau.mul_scalar(&p).unwrap();
        assert_eq!(energy.dimension(), Dimension::ENERGY);
        let joules = energy.to("J").unwrap();
        assert!(rel(joules.values()[2], 0.06) < 1e-12);

        let wide = QuantityArray::linspace(1.0, 2.0, 2, "m**127").unwrap();
        let m = Quantity::new(1.0, "m").unwrap();
        assert!(matches!(wide.mul_scalar(&m), Err(LwfaError::UnitSyntax(_))));
    }
}

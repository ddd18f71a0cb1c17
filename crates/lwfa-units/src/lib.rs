// ─────────────────────────────────────────────────────────────────────
// SCPN Wakefield Core — Units
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Unit-tagged physical quantities with runtime dimension checking.
//!
//! Values carry a [`Unit`] (scale to SI, symbol, LaTeX label) whose
//! [`Dimension`] is checked on addition, subtraction and conversion.

pub mod array;
pub mod dimension;
pub mod quantity;
pub mod unit;

pub use array::QuantityArray;
pub use dimension::Dimension;
pub use quantity::Quantity;
pub use unit::Unit;

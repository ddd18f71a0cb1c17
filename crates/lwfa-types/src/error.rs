// ─────────────────────────────────────────────────────────────────────
// SCPN Wakefield Core — Error
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LwfaError {
    #[error("Dimension mismatch in {operation}: [{left}] vs [{right}]")]
    DimensionMismatch {
        operation: &'static str,
        left: String,
        right: String,
    },

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Malformed unit expression: {0}")]
    UnitSyntax(String),

    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Beam waist is not specified")]
    MissingWaist,

    #[error("No matched density: {0}")]
    NoMatchedDensity(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LwfaError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        LwfaError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

pub type LwfaResult<T> = Result<T, LwfaError>;

/// Reject non-finite or non-positive magnitudes.
pub fn ensure_positive_finite(name: &'static str, value: f64) -> LwfaResult<f64> {
    if !value.is_finite() {
        return Err(LwfaError::invalid(name, format!("must be finite, got {value}")));
    }
    if value <= 0.0 {
        return Err(LwfaError::invalid(name, format!("must be positive, got {value}")));
    }
    Ok(value)
}

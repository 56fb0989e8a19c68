//! Planner Errors
//!
//! Caller contract violations (bad texture strings, non-finite numbers) fail
//! fast with a descriptive error. A crop missing from a catalog is NOT an
//! error: lookups return `Option` and evaluators return explicit "no data"
//! results instead.

use thiserror::Error;

/// Errors raised by the planning core
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Texture outside the closed {Sandy, Loamy, Clay, Silty} set
    #[error("unknown soil texture '{0}' (expected Sandy, Loamy, Clay or Silty)")]
    UnknownTexture(String),

    /// Soil type outside the closed {Loamy, Sandy, Clayey, Silty} set
    #[error("unknown soil type '{0}' (expected Loamy, Sandy, Clayey or Silty)")]
    UnknownSoilType(String),

    /// NaN or infinite numeric input
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    /// Negative value where only non-negative values make sense
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    /// Projection horizon of zero years
    #[error("projection horizon must be at least one year")]
    EmptyHorizon,

    /// Activity label outside the logbook's activity list
    #[error("unknown activity type '{0}'")]
    UnknownActivity(String),

    /// Table export failure
    #[error("failed to export table: {0}")]
    Export(#[from] polars::prelude::PolarsError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;

/// Reject NaN and infinities
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PlannerError::NonFinite { field, value })
    }
}

/// Reject NaN, infinities and negative values
pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> Result<f64> {
    let value = ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(PlannerError::Negative { field, value });
    }
    Ok(value)
}

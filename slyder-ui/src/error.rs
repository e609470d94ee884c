//! Errors raised when a control is configured with values it cannot honor.
//!
//! Touch handling itself never fails: events that cannot be applied are
//! ignored. Only configuration (ranges, bounds) is validated.

use thiserror::Error;

/// Configuration errors of the slyder control.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SlyderError {
    /// The lower bound of a value range exceeds its upper bound.
    #[error("invalid value range: minimum {minimum} is greater than maximum {maximum}")]
    InvalidRange {
        /// The rejected lower bound.
        minimum: f64,
        /// The rejected upper bound.
        maximum: f64,
    },
    /// A bound or value was NaN or infinite.
    #[error("{name} must be a finite number, got {value}")]
    NonFiniteValue {
        /// Which quantity was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Convenience alias used across the slyder crates.
pub type Result<T, E = SlyderError> = std::result::Result<T, E>;

/// Returns `value` unchanged if it is finite.
pub fn ensure_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SlyderError::NonFiniteValue { name, value })
    }
}

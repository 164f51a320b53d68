//! Common guards for correlation inputs.

use crate::error::{CorrelationError, CorrelationResult};
use ent_core::numeric::{ensure_finite, ensure_positive};

/// Ensure a value is finite, returning CorrelationError if not.
pub fn check_finite(value: f64, what: &'static str) -> CorrelationResult<f64> {
    Ok(ensure_finite(value, what)?)
}

/// Ensure a value is finite and strictly positive.
pub fn check_positive(value: f64, what: &'static str) -> CorrelationResult<f64> {
    Ok(ensure_positive(value, what)?)
}

/// Ensure a divisor is not exactly zero.
pub fn check_divisor(value: f64, what: &'static str) -> CorrelationResult<f64> {
    if value == 0.0 {
        Err(CorrelationError::DivisionByZero { what })
    } else {
        Ok(value)
    }
}

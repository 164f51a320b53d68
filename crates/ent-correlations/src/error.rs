//! Error types for correlation evaluation.

use ent_core::error::EntError;
use thiserror::Error;

/// Errors raised by a correlation stage when its inputs fall outside the
/// domain where the closed-form expression is defined.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CorrelationError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Division by zero: {what}")]
    DivisionByZero { what: &'static str },

    /// An intermediate value came out NaN or infinite.
    #[error("Non-finite value: {what}")]
    NonFinite { what: &'static str },
}

pub type CorrelationResult<T> = Result<T, CorrelationError>;

impl From<EntError> for CorrelationError {
    fn from(e: EntError) -> Self {
        match e {
            EntError::NonFinite { what, value: _ } => CorrelationError::NonFinite { what },
            EntError::InvalidArg { what } => CorrelationError::InvalidArg { what },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CorrelationError::NonPhysical { what: "omega" };
        assert!(err.to_string().contains("omega"));
    }

    #[test]
    fn error_conversion() {
        let non_finite: CorrelationError = EntError::NonFinite {
            what: "term2",
            value: f64::NAN,
        }
        .into();
        assert_eq!(non_finite, CorrelationError::NonFinite { what: "term2" });

        let invalid: CorrelationError = EntError::InvalidArg { what: "gas density" }.into();
        assert_eq!(invalid, CorrelationError::InvalidArg { what: "gas density" });
    }
}

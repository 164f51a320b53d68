//! Error types for entrainment solving.

use ent_correlations::CorrelationError;
use thiserror::Error;

/// Errors that end a solve without a result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid flow parameters: {what}")]
    Validation { what: String },

    #[error("Drag coefficient diverged at iteration {iteration} (Cd guess = {cd_guess})")]
    Diverged { iteration: usize, cd_guess: f64 },

    #[error("Numeric error: {what}")]
    Numeric { what: String },

    #[error("Correlation error: {0}")]
    Correlation(#[from] CorrelationError),
}

pub type SolverResult<T> = Result<T, SolverError>;

/// Coarse classification of a [`SolverError`] for callers that branch on
/// the kind of failure rather than the details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Input parameters outside the domain of the model.
    Validation,
    /// The drag coefficient guess left the physical branch mid-iteration.
    Divergence,
    /// An intermediate value became undefined outside the enumerated checks.
    Computation,
}

impl SolverError {
    pub fn kind(&self) -> FailureKind {
        match self {
            SolverError::Validation { .. } => FailureKind::Validation,
            SolverError::Correlation(CorrelationError::NonFinite { .. }) => {
                FailureKind::Computation
            }
            SolverError::Correlation(_) => FailureKind::Validation,
            SolverError::Diverged { .. } => FailureKind::Divergence,
            SolverError::Numeric { .. } => FailureKind::Computation,
        }
    }
}

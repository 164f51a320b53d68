//! Entrainment fraction solver for annular gas-liquid pipe flow.
//!
//! Given a [`FlowParameters`] set, [`solve_entrainment`] estimates the
//! entrained droplet diameter, iterates terminal velocity / Reynolds number /
//! drag coefficient to a fixed point, classifies the settling regime, applies
//! the critical-film onset correction and evaluates the entrainment fraction.
//!
//! Each call is independent: there is no state carried between solves.

pub mod error;
pub mod fixed_point;
pub mod params;
pub mod solve;

pub use error::{FailureKind, SolverError, SolverResult};
pub use fixed_point::{
    ConvergedSolution, FixedPointConfig, IterationState, IterationStatus, SettlingProblem,
    solve_settling,
};
pub use params::FlowParameters;
pub use solve::{EntrainmentResult, EntrainmentSolution, SolveWarning, solve_entrainment};

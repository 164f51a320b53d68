//! Fixed-point solve for a self-consistent (Re_p, Cd) pair.
//!
//! A droplet of diameter `d` settles at the terminal velocity implied by its
//! drag coefficient; that velocity fixes the particle Reynolds number, which
//! in turn fixes the drag coefficient through the Schiller-Naumann
//! correlation. Substitution is repeated until the drag coefficient stops
//! moving.
//!
//! The loop is an explicit state machine:
//!
//! ```text
//! Iterating --(|ΔCd| < tol)------------> Converged
//!           --(Cd guess <= 0)----------> Diverged
//!           --(budget spent)-----------> BudgetExhausted
//! ```
//!
//! `BudgetExhausted` is not an error: the last iterate is reported with
//! [`IterationStatus::BudgetExhausted`] and downstream stages keep going.

use crate::error::{SolverError, SolverResult};
use ent_correlations::{FlowRegime, drag_coefficient, particle_reynolds, terminal_velocity};
use tracing::{debug, info, warn};

/// Fixed-point iteration configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedPointConfig {
    /// Maximum number of substitutions
    pub max_iterations: usize,
    /// Absolute tolerance on the drag coefficient change
    pub tolerance: f64,
    /// Seed drag coefficient
    pub initial_cd: f64,
}

impl Default for FixedPointConfig {
    fn default() -> Self {
        Self {
            max_iterations: 500,
            tolerance: 1e-6,
            initial_cd: 0.4,
        }
    }
}

impl FixedPointConfig {
    pub fn validate(&self) -> SolverResult<()> {
        if self.max_iterations == 0 {
            return Err(SolverError::Validation {
                what: "max_iterations must be at least 1".to_string(),
            });
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(SolverError::Validation {
                what: format!("tolerance must be positive (got {})", self.tolerance),
            });
        }
        Ok(())
    }
}

/// Scalars the settling balance depends on (SI units).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SettlingProblem {
    pub droplet_diameter: f64,
    pub gravity: f64,
    pub liquid_density: f64,
    pub gas_density: f64,
    pub gas_viscosity: f64,
}

/// One evaluated substitution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Iterate {
    pub reynolds_number: f64,
    pub drag_coefficient: f64,
    pub terminal_velocity: f64,
    /// `|Cd_new - Cd_guess|`
    pub residual: f64,
    /// 1-based count of substitutions performed
    pub iterations: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IterationState {
    Iterating { completed: usize, cd_guess: f64 },
    Converged(Iterate),
    Diverged { iteration: usize, cd_guess: f64 },
    BudgetExhausted(Iterate),
}

impl IterationState {
    pub fn start(config: &FixedPointConfig) -> Self {
        IterationState::Iterating {
            completed: 0,
            cd_guess: config.initial_cd,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, IterationState::Iterating { .. })
    }

    /// Advance by one substitution. Terminal states are returned unchanged.
    pub fn step(self, problem: &SettlingProblem, config: &FixedPointConfig) -> SolverResult<Self> {
        let (completed, cd_guess) = match self {
            IterationState::Iterating {
                completed,
                cd_guess,
            } => (completed, cd_guess),
            terminal => return Ok(terminal),
        };
        let iteration = completed + 1;

        if cd_guess.is_nan() || cd_guess <= 0.0 {
            return Ok(IterationState::Diverged {
                iteration,
                cd_guess,
            });
        }

        let u_t = terminal_velocity(
            problem.droplet_diameter,
            problem.gravity,
            problem.liquid_density,
            problem.gas_density,
            cd_guess,
        )?;
        let re_new = particle_reynolds(
            problem.droplet_diameter,
            u_t,
            problem.gas_density,
            problem.gas_viscosity,
        )?;
        let cd_new = drag_coefficient(re_new);
        if !cd_new.is_finite() {
            return Err(SolverError::Numeric {
                what: format!("no drag coefficient for Re_p = {re_new} at iteration {iteration}"),
            });
        }

        let residual = (cd_new - cd_guess).abs();
        debug!(iteration, re_p = re_new, cd = cd_new, residual, "fixed-point step");

        let iterate = Iterate {
            reynolds_number: re_new,
            drag_coefficient: cd_new,
            terminal_velocity: u_t,
            residual,
            iterations: iteration,
        };

        if residual < config.tolerance {
            Ok(IterationState::Converged(iterate))
        } else if iteration >= config.max_iterations {
            Ok(IterationState::BudgetExhausted(iterate))
        } else {
            Ok(IterationState::Iterating {
                completed: iteration,
                cd_guess: cd_new,
            })
        }
    }
}

/// Whether the reported pair met the tolerance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IterationStatus {
    Converged,
    BudgetExhausted,
}

/// Fixed point of the settling balance plus the regime it falls in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConvergedSolution {
    pub reynolds_number: f64,
    pub drag_coefficient: f64,
    pub regime: FlowRegime,
    /// Exponent `m` of `regime`
    pub regime_exponent: f64,
    pub terminal_velocity: f64,
    pub residual: f64,
    pub iterations: usize,
    pub status: IterationStatus,
}

impl ConvergedSolution {
    fn from_iterate(iterate: Iterate, status: IterationStatus) -> Self {
        let regime = FlowRegime::classify(iterate.reynolds_number);
        Self {
            reynolds_number: iterate.reynolds_number,
            drag_coefficient: iterate.drag_coefficient,
            regime,
            regime_exponent: regime.exponent(),
            terminal_velocity: iterate.terminal_velocity,
            residual: iterate.residual,
            iterations: iterate.iterations,
            status,
        }
    }

    pub fn is_converged(&self) -> bool {
        self.status == IterationStatus::Converged
    }
}

/// Run the substitution loop to a terminal state.
pub fn solve_settling(
    problem: &SettlingProblem,
    config: Option<FixedPointConfig>,
) -> SolverResult<ConvergedSolution> {
    let cfg = config.unwrap_or_default();
    cfg.validate()?;

    let mut state = IterationState::start(&cfg);
    while !state.is_terminal() {
        state = state.step(problem, &cfg)?;
    }

    match state {
        IterationState::Converged(iterate) => {
            info!(
                iterations = iterate.iterations,
                re_p = iterate.reynolds_number,
                cd = iterate.drag_coefficient,
                "drag coefficient converged"
            );
            Ok(ConvergedSolution::from_iterate(
                iterate,
                IterationStatus::Converged,
            ))
        }
        IterationState::BudgetExhausted(iterate) => {
            warn!(
                iterations = iterate.iterations,
                residual = iterate.residual,
                "drag coefficient did not converge; using last iterate"
            );
            Ok(ConvergedSolution::from_iterate(
                iterate,
                IterationStatus::BudgetExhausted,
            ))
        }
        IterationState::Diverged {
            iteration,
            cd_guess,
        } => {
            warn!(iteration, cd_guess, "drag coefficient guess became non-positive");
            Err(SolverError::Diverged {
                iteration,
                cd_guess,
            })
        }
        IterationState::Iterating { .. } => Err(SolverError::Numeric {
            what: "iteration stopped in a non-terminal state".to_string(),
        }),
    }
}

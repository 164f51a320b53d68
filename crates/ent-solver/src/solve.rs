//! Full entrainment pipeline.

use crate::error::SolverResult;
use crate::fixed_point::{ConvergedSolution, FixedPointConfig, SettlingProblem, solve_settling};
use crate::params::FlowParameters;
use core::fmt;
use ent_correlations::{
    droplet_diameter, entrainment_fraction, gas_core_group, onset_correction, settling_group,
};
use tracing::{debug, warn};

/// Final output bundle of a calculation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntrainmentResult {
    pub omega: f64,
    /// Critical film Reynolds number `Re_LFC`
    pub critical_reynolds: f64,
    pub gamma_c: f64,
    /// Maximum entrainable fraction `E_M`
    pub onset_fraction: f64,
    /// Entrainment fraction `E`
    pub entrainment_fraction: f64,
}

/// Non-fatal conditions observed during a solve.
#[derive(Clone, Debug, PartialEq)]
pub enum SolveWarning {
    /// The fixed-point budget ran out; values derive from the last iterate.
    NonConvergence { iterations: usize, residual: f64 },
    /// A fraction fell outside [0, 1].
    OutOfRange { what: &'static str, value: f64 },
}

impl fmt::Display for SolveWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveWarning::NonConvergence {
                iterations,
                residual,
            } => write!(
                f,
                "drag coefficient did not converge within {iterations} iterations (residual {residual:e})"
            ),
            SolveWarning::OutOfRange { what, value } => {
                write!(f, "{what} = {value} is outside [0, 1]")
            }
        }
    }
}

/// Everything computed for one parameter set.
#[derive(Clone, Debug, PartialEq)]
pub struct EntrainmentSolution {
    /// Entrained droplet diameter `d` (m)
    pub droplet_diameter: f64,
    pub settling: ConvergedSolution,
    pub term1: f64,
    pub term2: f64,
    pub rhs: f64,
    pub result: EntrainmentResult,
    pub warnings: Vec<SolveWarning>,
}

impl EntrainmentSolution {
    /// True when E lies in [0, 1].
    pub fn is_physical(&self) -> bool {
        (0.0..=1.0).contains(&self.result.entrainment_fraction)
    }

    pub fn is_converged(&self) -> bool {
        self.settling.is_converged()
    }
}

/// Compute the entrainment fraction for one parameter set.
///
/// Stages run in order: droplet diameter, fixed-point settling solve, regime
/// exponent, onset correction, final correlation. Any validation failure or a
/// diverging drag coefficient aborts with an error. Running out of iteration
/// budget does not: the solution carries [`SolveWarning::NonConvergence`].
pub fn solve_entrainment(
    params: &FlowParameters,
    config: Option<FixedPointConfig>,
) -> SolverResult<EntrainmentSolution> {
    params.validate()?;

    let g = params.gravity.value;
    let rho_l = params.liquid_density.value;
    let rho_g = params.gas_density.value;
    let mu_g = params.gas_viscosity.value;
    let mu_l = params.liquid_viscosity.value;
    let pipe_d = params.pipe_diameter.value;
    let u_g = params.gas_velocity.value;
    let sigma = params.surface_tension;

    let d = droplet_diameter(pipe_d, sigma, rho_g, u_g)?;
    debug!(droplet_diameter = d, "droplet diameter");

    let problem = SettlingProblem {
        droplet_diameter: d,
        gravity: g,
        liquid_density: rho_l,
        gas_density: rho_g,
        gas_viscosity: mu_g,
    };
    let settling = solve_settling(&problem, config)?;

    let mut warnings = Vec::new();
    if !settling.is_converged() {
        warnings.push(SolveWarning::NonConvergence {
            iterations: settling.iterations,
            residual: settling.residual,
        });
    }

    let onset = onset_correction(
        mu_l,
        mu_g,
        rho_g,
        rho_l,
        pipe_d,
        params.liquid_flow_rate.value,
    )?;
    debug!(
        omega = onset.omega,
        re_lfc = onset.critical_reynolds,
        e_m = onset.onset_fraction,
        "onset correction"
    );

    let term1 = gas_core_group(pipe_d, u_g, rho_l, rho_g, sigma)?;
    let term2 = settling_group(rho_g, mu_g, d, g, rho_l, settling.regime_exponent)?;
    let groups = entrainment_fraction(
        params.entrainment_coefficient,
        term1,
        term2,
        onset.onset_fraction,
    )?;
    debug!(term1, term2, rhs = groups.rhs, e = groups.fraction, "entrainment groups");

    let result = EntrainmentResult {
        omega: onset.omega,
        critical_reynolds: onset.critical_reynolds,
        gamma_c: onset.gamma_c,
        onset_fraction: onset.onset_fraction,
        entrainment_fraction: groups.fraction,
    };

    for (what, value) in [
        ("onset fraction E_M", result.onset_fraction),
        ("entrainment fraction E", result.entrainment_fraction),
    ] {
        if !(0.0..=1.0).contains(&value) {
            warn!(what, value, "fraction outside physical range");
            warnings.push(SolveWarning::OutOfRange { what, value });
        }
    }

    Ok(EntrainmentSolution {
        droplet_diameter: d,
        settling,
        term1,
        term2,
        rhs: groups.rhs,
        result,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FailureKind, SolverError};
    use ent_core::units::{kgpm3, kgps};

    #[test]
    fn reference_case() {
        let sol = solve_entrainment(&FlowParameters::reference(), None).unwrap();
        assert!(sol.is_converged());
        assert!(sol.is_physical());
        assert!(sol.warnings.is_empty());
        assert!((sol.result.entrainment_fraction - 0.069_207_894).abs() < 1e-6);
    }

    #[test]
    fn zero_liquid_flow_fails_validation() {
        let params = FlowParameters {
            liquid_flow_rate: kgps(0.0),
            ..FlowParameters::reference()
        };
        let err = solve_entrainment(&params, None).unwrap_err();
        assert_eq!(err.kind(), FailureKind::Validation);
    }

    #[test]
    fn tiny_liquid_flow_is_flagged_out_of_range() {
        let params = FlowParameters {
            liquid_flow_rate: kgps(0.001),
            ..FlowParameters::reference()
        };
        let sol = solve_entrainment(&params, None).unwrap();
        assert!(!sol.is_physical());
        assert!(sol.warnings.iter().any(|w| matches!(
            w,
            SolveWarning::OutOfRange {
                what: "entrainment fraction E",
                ..
            }
        )));
    }

    #[test]
    fn gas_denser_than_liquid_fails_in_term2() {
        let params = FlowParameters {
            gas_density: kgpm3(900.0),
            ..FlowParameters::reference()
        };
        let err = solve_entrainment(&params, None).unwrap_err();
        assert!(matches!(err, SolverError::Correlation(_)));
    }

    #[test]
    fn warning_display() {
        let w = SolveWarning::NonConvergence {
            iterations: 500,
            residual: 1e-3,
        };
        assert!(w.to_string().contains("500"));
    }
}

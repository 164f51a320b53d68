//! Case validation logic.

use crate::schema::{CaseDef, LATEST_VERSION};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid flow parameters: {0}")]
    Parameters(String),

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_case(case: &CaseDef) -> Result<(), ValidationError> {
    if case.version == 0 || case.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: case.version,
        });
    }

    if let Some(solver) = &case.solver {
        if let Some(max_iterations) = solver.max_iterations {
            if max_iterations == 0 {
                return Err(ValidationError::InvalidValue {
                    field: "solver.max_iterations".to_string(),
                    value: max_iterations.to_string(),
                    reason: "must be at least 1".to_string(),
                });
            }
        }
        if let Some(tolerance) = solver.tolerance {
            if !(tolerance.is_finite() && tolerance > 0.0) {
                return Err(ValidationError::InvalidValue {
                    field: "solver.tolerance".to_string(),
                    value: tolerance.to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        }
        if let Some(initial_cd) = solver.initial_cd {
            if !(initial_cd.is_finite() && initial_cd > 0.0) {
                return Err(ValidationError::InvalidValue {
                    field: "solver.initial_cd".to_string(),
                    value: initial_cd.to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        }
    }

    case.flow_parameters()
        .validate()
        .map_err(|e| ValidationError::Parameters(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SolverDef;

    #[test]
    fn reference_is_valid() {
        assert!(validate_case(&CaseDef::reference()).is_ok());
    }

    #[test]
    fn future_version_is_rejected() {
        let mut case = CaseDef::reference();
        case.version = LATEST_VERSION + 1;
        assert!(matches!(
            validate_case(&case),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn zero_surface_tension_is_rejected() {
        let mut case = CaseDef::reference();
        case.fluids.surface_tension = 0.0;
        let err = validate_case(&case).unwrap_err();
        assert!(err.to_string().contains("surface tension"));
    }

    #[test]
    fn bad_solver_block_is_rejected() {
        let mut case = CaseDef::reference();
        case.solver = Some(SolverDef {
            tolerance: Some(-1.0),
            ..SolverDef::default()
        });
        let err = validate_case(&case).unwrap_err();
        assert!(err.to_string().contains("solver.tolerance"));
    }
}

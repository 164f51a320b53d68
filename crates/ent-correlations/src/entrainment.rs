//! Dimensionless groups of the entrainment fraction correlation.

use crate::common::check_finite;
use crate::error::{CorrelationError, CorrelationResult};

/// Default entrainment coefficient `A2`.
pub const A2_PAN_HANRATTY: f64 = 9e-8;
/// Alternative `A2` for large gas velocities.
pub const A2_HIGH_GAS_VELOCITY: f64 = 8.8e-5;

/// Intermediate and final values of the entrainment correlation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntrainmentGroups {
    /// `sqrt(D U_G³ ρ_L ρ_G) / σ`
    pub term1: f64,
    /// Settling group raised to `1/(2-m)`
    pub term2: f64,
    /// `A2 · term1 · term2`
    pub rhs: f64,
    /// Entrainment fraction `E`
    pub fraction: f64,
}

/// `term1 = sqrt(D U_G³ ρ_L ρ_G) / σ`
pub fn gas_core_group(
    pipe_diameter: f64,
    gas_velocity: f64,
    liquid_density: f64,
    gas_density: f64,
    surface_tension: f64,
) -> CorrelationResult<f64> {
    let term1 =
        (pipe_diameter * gas_velocity.powi(3) * liquid_density * gas_density).sqrt() / surface_tension;
    check_finite(term1, "term1")
}

/// `term2 = (ρ_G^(1-m) μ_G^m / (d^(1+m) g (ρ_L - ρ_G)))^(1/(2-m))`
///
/// Fails when `m == 2` and when the denominator is not strictly positive.
pub fn settling_group(
    gas_density: f64,
    gas_viscosity: f64,
    droplet_diameter: f64,
    gravity: f64,
    liquid_density: f64,
    m: f64,
) -> CorrelationResult<f64> {
    let numerator = gas_density.powf(1.0 - m) * gas_viscosity.powf(m);
    let denominator = droplet_diameter.powf(1.0 + m) * gravity * (liquid_density - gas_density);

    if 2.0 - m == 0.0 {
        return Err(CorrelationError::DivisionByZero {
            what: "regime exponent m = 2",
        });
    }
    let exponent = 1.0 / (2.0 - m);

    if denominator.is_nan() || denominator <= 0.0 {
        return Err(CorrelationError::NonPhysical {
            what: "term2 denominator",
        });
    }

    check_finite((numerator / denominator).powf(exponent), "term2")
}

/// `E = E_M · rhs / (1 + rhs)` with `rhs = A2 · term1 · term2`.
pub fn entrainment_fraction(
    entrainment_coefficient: f64,
    term1: f64,
    term2: f64,
    onset_fraction: f64,
) -> CorrelationResult<EntrainmentGroups> {
    let rhs = entrainment_coefficient * term1 * term2;
    if 1.0 + rhs == 0.0 {
        return Err(CorrelationError::DivisionByZero { what: "1 + rhs" });
    }
    let fraction = check_finite(onset_fraction * (rhs / (1.0 + rhs)), "entrainment fraction")?;

    Ok(EntrainmentGroups {
        term1,
        term2,
        rhs,
        fraction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const D_REF: f64 = 9.471_008_394_041_26e-5;

    fn assert_close(actual: f64, expected: f64, rel: f64) {
        assert!(
            (actual - expected).abs() <= rel * expected.abs(),
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn reference_groups() {
        let term1 = gas_core_group(0.6, 10.0, 800.0, 70.0, 0.0115).unwrap();
        assert_close(term1, 504_047.886_823_980_5, 1e-12);

        let term2 = settling_group(70.0, 1e-5, D_REF, 9.81, 800.0, 0.6).unwrap();
        assert_close(term2, 1.694_932_566_557_112_4, 1e-9);

        let groups = entrainment_fraction(A2_PAN_HANRATTY, term1, term2, 0.969_304_039_508_009_9)
            .unwrap();
        assert_close(groups.rhs, 0.076_889_446_063_403_24, 1e-9);
        assert_close(groups.fraction, 0.069_207_894_029_636_54, 1e-9);
    }

    #[test]
    fn exponent_two_is_rejected() {
        assert_eq!(
            settling_group(70.0, 1e-5, D_REF, 9.81, 800.0, 2.0),
            Err(CorrelationError::DivisionByZero {
                what: "regime exponent m = 2"
            })
        );
    }

    #[test]
    fn gas_heavier_than_liquid_is_rejected() {
        assert_eq!(
            settling_group(900.0, 1e-5, D_REF, 9.81, 800.0, 0.6),
            Err(CorrelationError::NonPhysical {
                what: "term2 denominator"
            })
        );
    }

    #[test]
    fn newton_regime_drops_viscosity() {
        let a = settling_group(70.0, 1e-5, D_REF, 9.81, 800.0, 0.0).unwrap();
        let b = settling_group(70.0, 5e-5, D_REF, 9.81, 800.0, 0.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn singular_rhs_is_rejected() {
        assert_eq!(
            entrainment_fraction(-1.0, 1.0, 1.0, 0.9),
            Err(CorrelationError::DivisionByZero { what: "1 + rhs" })
        );
    }

    #[test]
    fn fraction_bounded_by_onset_fraction() {
        let groups = entrainment_fraction(A2_HIGH_GAS_VELOCITY, 5e5, 1.7, 0.97).unwrap();
        assert!(groups.fraction < 0.97);
        assert!(groups.fraction > 0.9);
    }
}

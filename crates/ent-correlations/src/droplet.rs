//! Droplet size and settling relations.

use crate::common::{check_finite, check_positive};
use crate::error::{CorrelationError, CorrelationResult};

/// Empirical coefficient of the droplet-diameter correlation.
pub const DROPLET_DIAMETER_COEFF: f64 = 0.0091;

/// Characteristic entrained droplet diameter (m).
///
/// `d = sqrt(D σ 0.0091 / (ρ_G U_G²))`
///
/// Surface tension, gas density and gas velocity must be strictly positive.
pub fn droplet_diameter(
    pipe_diameter: f64,
    surface_tension: f64,
    gas_density: f64,
    gas_velocity: f64,
) -> CorrelationResult<f64> {
    check_positive(surface_tension, "surface tension")?;
    check_positive(gas_density, "gas density")?;
    check_positive(gas_velocity, "gas velocity")?;

    let d = ((pipe_diameter * surface_tension * DROPLET_DIAMETER_COEFF)
        / (gas_density * gas_velocity.powi(2)))
    .sqrt();
    check_finite(d, "droplet diameter")
}

/// Terminal settling velocity of a droplet (m/s) for a given drag coefficient.
///
/// `u_t = sqrt(4 d g ρ_L / (3 Cd ρ_G))`
///
/// The liquid density enters alone, not as `ρ_L - ρ_G`; this follows the
/// published form of the correlation.
pub fn terminal_velocity(
    droplet_diameter: f64,
    gravity: f64,
    liquid_density: f64,
    gas_density: f64,
    drag_coefficient: f64,
) -> CorrelationResult<f64> {
    if drag_coefficient.is_nan() || drag_coefficient <= 0.0 {
        return Err(CorrelationError::InvalidArg {
            what: "drag coefficient",
        });
    }
    check_positive(gas_density, "gas density")?;

    let u_t = ((4.0 * droplet_diameter * gravity * liquid_density)
        / (3.0 * drag_coefficient * gas_density))
        .sqrt();
    check_finite(u_t, "terminal velocity")
}

/// Particle Reynolds number `d u_t ρ_G / μ_G`.
pub fn particle_reynolds(
    droplet_diameter: f64,
    velocity: f64,
    gas_density: f64,
    gas_viscosity: f64,
) -> CorrelationResult<f64> {
    if gas_viscosity == 0.0 {
        return Err(CorrelationError::DivisionByZero {
            what: "gas viscosity",
        });
    }
    let re = droplet_diameter * velocity * gas_density / gas_viscosity;
    check_finite(re, "particle Reynolds number")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_droplet_diameter() {
        let d = droplet_diameter(0.6, 0.0115, 70.0, 10.0).unwrap();
        let expected = ((0.6 * 0.0115 * 0.0091) / (70.0 * 100.0_f64)).sqrt();
        assert!((d - expected).abs() < 1e-15);
        assert!((d - 9.471_008_394_041_26e-5).abs() < 1e-12);
    }

    #[test]
    fn droplet_diameter_rejects_non_positive_inputs() {
        assert_eq!(
            droplet_diameter(0.6, 0.0, 70.0, 10.0),
            Err(CorrelationError::InvalidArg {
                what: "surface tension"
            })
        );
        assert_eq!(
            droplet_diameter(0.6, 0.0115, 0.0, 10.0),
            Err(CorrelationError::InvalidArg {
                what: "gas density"
            })
        );
        assert_eq!(
            droplet_diameter(0.6, 0.0115, 70.0, -10.0),
            Err(CorrelationError::InvalidArg {
                what: "gas velocity"
            })
        );
    }

    #[test]
    fn droplet_shrinks_with_gas_velocity() {
        let slow = droplet_diameter(0.6, 0.0115, 70.0, 5.0).unwrap();
        let fast = droplet_diameter(0.6, 0.0115, 70.0, 20.0).unwrap();
        assert!((slow / fast - 4.0).abs() < 1e-12);
    }

    #[test]
    fn terminal_velocity_requires_positive_drag() {
        assert!(terminal_velocity(1e-4, 9.81, 800.0, 70.0, 0.0).is_err());
        assert!(terminal_velocity(1e-4, 9.81, 800.0, 70.0, -0.3).is_err());
        assert!(terminal_velocity(1e-4, 9.81, 800.0, 70.0, f64::NAN).is_err());
    }

    #[test]
    fn terminal_velocity_uses_liquid_density_alone() {
        let u_t = terminal_velocity(1e-4, 9.81, 800.0, 70.0, 0.4).unwrap();
        let expected = ((4.0 * 1e-4 * 9.81 * 800.0) / (3.0 * 0.4 * 70.0_f64)).sqrt();
        assert!((u_t - expected).abs() < 1e-15);
    }

    #[test]
    fn particle_reynolds_basic() {
        let re = particle_reynolds(1e-4, 0.5, 70.0, 1e-5).unwrap();
        assert!((re - 350.0).abs() < 1e-9);
        assert!(particle_reynolds(1e-4, 0.5, 70.0, 0.0).is_err());
    }
}

//! Flow parameters of a single entrainment calculation.

use crate::error::{SolverError, SolverResult};
use ent_core::units::{
    Accel, Density, DynVisc, Length, MassRate, Velocity, constants, kgpm3, kgps, m, mps, pas,
};
use ent_correlations::A2_PAN_HANRATTY;

/// Physical inputs of the annular-flow entrainment model (SI units).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowParameters {
    pub gravity: Accel,
    pub liquid_density: Density,
    pub gas_density: Density,
    pub gas_viscosity: DynVisc,
    pub liquid_viscosity: DynVisc,
    /// Pipe inner diameter
    pub pipe_diameter: Length,
    /// Superficial gas velocity
    pub gas_velocity: Velocity,
    /// Surface tension (N/m). uom's SI system has no surface tension
    /// quantity, so this stays a plain value in base units.
    pub surface_tension: f64,
    /// Liquid mass flow rate
    pub liquid_flow_rate: MassRate,
    /// Correlation coefficient `A2`
    pub entrainment_coefficient: f64,
}

impl FlowParameters {
    /// Reference case: a light hydrocarbon liquid in dense gas, 0.6 m pipe.
    pub fn reference() -> Self {
        Self {
            gravity: constants::g(),
            liquid_density: kgpm3(800.0),
            gas_density: kgpm3(70.0),
            gas_viscosity: pas(1e-5),
            liquid_viscosity: pas(1e-4),
            pipe_diameter: m(0.6),
            gas_velocity: mps(10.0),
            surface_tension: 0.0115,
            liquid_flow_rate: kgps(0.5),
            entrainment_coefficient: A2_PAN_HANRATTY,
        }
    }

    /// Check the input-only preconditions of the model.
    ///
    /// Conditions that depend on derived values (omega, the settling group
    /// denominator, `1 + rhs`) are checked by the stage that computes them.
    pub fn validate(&self) -> SolverResult<()> {
        let fields = [
            ("gravity", self.gravity.value),
            ("liquid density", self.liquid_density.value),
            ("gas density", self.gas_density.value),
            ("gas viscosity", self.gas_viscosity.value),
            ("liquid viscosity", self.liquid_viscosity.value),
            ("pipe diameter", self.pipe_diameter.value),
            ("gas velocity", self.gas_velocity.value),
            ("surface tension", self.surface_tension),
            ("liquid flow rate", self.liquid_flow_rate.value),
            ("entrainment coefficient", self.entrainment_coefficient),
        ];
        for (what, value) in fields {
            if !value.is_finite() {
                return Err(SolverError::Validation {
                    what: format!("{what} is not finite ({value})"),
                });
            }
        }

        for (what, value) in [
            ("surface tension", self.surface_tension),
            ("gas density", self.gas_density.value),
            ("gas velocity", self.gas_velocity.value),
        ] {
            if value <= 0.0 {
                return Err(SolverError::Validation {
                    what: format!("{what} must be positive (got {value})"),
                });
            }
        }

        for (what, value) in [
            ("gas viscosity", self.gas_viscosity.value),
            ("liquid density", self.liquid_density.value),
            ("liquid flow rate", self.liquid_flow_rate.value),
        ] {
            if value == 0.0 {
                return Err(SolverError::Validation {
                    what: format!("{what} cannot be zero"),
                });
            }
        }

        Ok(())
    }
}

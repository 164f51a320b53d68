//! Case file schema definitions.

use ent_solver::{EntrainmentSolution, FixedPointConfig, FlowParameters, IterationStatus};
use serde::{Deserialize, Serialize};

pub const LATEST_VERSION: u32 = 1;

fn default_version() -> u32 {
    LATEST_VERSION
}

fn default_gravity() -> f64 {
    ent_core::units::constants::G_MPS2
}

fn default_entrainment_coefficient() -> f64 {
    FlowParameters::reference().entrainment_coefficient
}

/// One entrainment calculation as stored on disk. All values are SI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseDef {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub fluids: FluidsDef,
    pub flow: FlowDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solver: Option<SolverDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FluidsDef {
    /// kg/m³
    pub liquid_density: f64,
    /// kg/m³
    pub gas_density: f64,
    /// Pa·s
    pub liquid_viscosity: f64,
    /// Pa·s
    pub gas_viscosity: f64,
    /// N/m
    pub surface_tension: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlowDef {
    /// m
    pub pipe_diameter: f64,
    /// m/s
    pub gas_velocity: f64,
    /// kg/s
    pub liquid_flow_rate: f64,
    /// m/s²
    #[serde(default = "default_gravity")]
    pub gravity: f64,
    #[serde(default = "default_entrainment_coefficient")]
    pub entrainment_coefficient: f64,
}

/// Optional overrides of the fixed-point iteration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SolverDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_iterations: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_cd: Option<f64>,
}

impl CaseDef {
    /// The reference case, ready to be written out and edited.
    pub fn reference() -> Self {
        let p = FlowParameters::reference();
        Self {
            version: LATEST_VERSION,
            name: Some("reference".to_string()),
            fluids: FluidsDef {
                liquid_density: p.liquid_density.value,
                gas_density: p.gas_density.value,
                liquid_viscosity: p.liquid_viscosity.value,
                gas_viscosity: p.gas_viscosity.value,
                surface_tension: p.surface_tension,
            },
            flow: FlowDef {
                pipe_diameter: p.pipe_diameter.value,
                gas_velocity: p.gas_velocity.value,
                liquid_flow_rate: p.liquid_flow_rate.value,
                gravity: p.gravity.value,
                entrainment_coefficient: p.entrainment_coefficient,
            },
            solver: None,
        }
    }

    pub fn flow_parameters(&self) -> FlowParameters {
        use ent_core::units::{kgpm3, kgps, m, mps, mps2, pas};

        FlowParameters {
            gravity: mps2(self.flow.gravity),
            liquid_density: kgpm3(self.fluids.liquid_density),
            gas_density: kgpm3(self.fluids.gas_density),
            gas_viscosity: pas(self.fluids.gas_viscosity),
            liquid_viscosity: pas(self.fluids.liquid_viscosity),
            pipe_diameter: m(self.flow.pipe_diameter),
            gas_velocity: mps(self.flow.gas_velocity),
            surface_tension: self.fluids.surface_tension,
            liquid_flow_rate: kgps(self.flow.liquid_flow_rate),
            entrainment_coefficient: self.flow.entrainment_coefficient,
        }
    }

    /// Fixed-point configuration with any overrides applied.
    pub fn fixed_point_config(&self) -> FixedPointConfig {
        let mut cfg = FixedPointConfig::default();
        if let Some(solver) = &self.solver {
            if let Some(max_iterations) = solver.max_iterations {
                cfg.max_iterations = max_iterations;
            }
            if let Some(tolerance) = solver.tolerance {
                cfg.tolerance = tolerance;
            }
            if let Some(initial_cd) = solver.initial_cd {
                cfg.initial_cd = initial_cd;
            }
        }
        cfg
    }
}

/// Serializable record of every value a solve produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub droplet_diameter: f64,
    pub reynolds_number: f64,
    pub drag_coefficient: f64,
    pub terminal_velocity: f64,
    pub regime: String,
    pub regime_exponent: f64,
    pub iterations: usize,
    pub converged: bool,
    pub omega: f64,
    pub critical_reynolds: f64,
    pub gamma_c: f64,
    pub onset_fraction: f64,
    pub term1: f64,
    pub term2: f64,
    pub rhs: f64,
    pub entrainment_fraction: f64,
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl ReportDef {
    pub fn from_solution(name: Option<String>, sol: &EntrainmentSolution) -> Self {
        Self {
            name,
            droplet_diameter: sol.droplet_diameter,
            reynolds_number: sol.settling.reynolds_number,
            drag_coefficient: sol.settling.drag_coefficient,
            terminal_velocity: sol.settling.terminal_velocity,
            regime: sol.settling.regime.name().to_string(),
            regime_exponent: sol.settling.regime_exponent,
            iterations: sol.settling.iterations,
            converged: sol.settling.status == IterationStatus::Converged,
            omega: sol.result.omega,
            critical_reynolds: sol.result.critical_reynolds,
            gamma_c: sol.result.gamma_c,
            onset_fraction: sol.result.onset_fraction,
            term1: sol.term1,
            term2: sol.term2,
            rhs: sol.rhs,
            entrainment_fraction: sol.result.entrainment_fraction,
            warnings: sol.warnings.iter().map(|w| w.to_string()).collect(),
        }
    }
}

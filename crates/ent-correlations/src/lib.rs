//! ent-correlations: closed-form stages of the annular-flow entrainment model.
//!
//! Provides, as pure functions of SI scalars:
//! - the Schiller-Naumann sphere drag coefficient
//! - entrained droplet diameter, terminal velocity, particle Reynolds number
//! - settling regime classification (exponent `m`)
//! - the critical-film onset correction `E_M`
//! - the dimensionless groups combining into the entrainment fraction `E`
//!
//! Every stage validates its own domain and reports violations as
//! [`CorrelationError`] instead of returning NaN.

pub mod common;
pub mod drag;
pub mod droplet;
pub mod entrainment;
pub mod error;
pub mod onset;
pub mod regime;

// Re-exports
pub use drag::drag_coefficient;
pub use droplet::{droplet_diameter, particle_reynolds, terminal_velocity};
pub use entrainment::{
    A2_HIGH_GAS_VELOCITY, A2_PAN_HANRATTY, EntrainmentGroups, entrainment_fraction,
    gas_core_group, settling_group,
};
pub use error::{CorrelationError, CorrelationResult};
pub use onset::{OnsetCorrection, onset_correction};
pub use regime::{FlowRegime, regime_exponent};

//! ent-core: stable foundation for the entrainment workspace.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (finite/positive float guards)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::EntError;
pub use numeric::*;
pub use units::*;

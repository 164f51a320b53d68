//! Critical film flow correction for the onset of entrainment.
//!
//! Below a critical liquid film Reynolds number no droplets are torn from the
//! film. The correction `E_M` is the largest fraction of the liquid flow that
//! can be entrained once that film flow is subtracted.

use crate::common::{check_divisor, check_finite};
use crate::error::{CorrelationError, CorrelationResult};
use std::f64::consts::PI;

/// Intermediate and final values of the onset correction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OnsetCorrection {
    /// Viscosity/density group `ω`
    pub omega: f64,
    /// Critical film Reynolds number `Re_LFC`
    pub critical_reynolds: f64,
    /// Critical film flow per unit perimeter `Γ_c` (kg/(m·s))
    pub gamma_c: f64,
    /// Maximum entrainable fraction `E_M`
    pub onset_fraction: f64,
}

/// `ω = (μ_L/μ_G) sqrt(ρ_G/ρ_L)`, required to be strictly positive.
pub fn omega(
    liquid_viscosity: f64,
    gas_viscosity: f64,
    gas_density: f64,
    liquid_density: f64,
) -> CorrelationResult<f64> {
    check_divisor(gas_viscosity, "gas viscosity")?;
    check_divisor(liquid_density, "liquid density")?;

    let omega = (liquid_viscosity / gas_viscosity) * (gas_density / liquid_density).sqrt();
    if omega.is_nan() || omega <= 0.0 {
        return Err(CorrelationError::NonPhysical { what: "omega" });
    }
    check_finite(omega, "omega")
}

/// `Re_LFC = 7.3 log10(ω)³ + 44.2 log10(ω)² - 263 log10(ω) + 439`
pub fn critical_film_reynolds(omega: f64) -> CorrelationResult<f64> {
    if omega.is_nan() || omega <= 0.0 {
        return Err(CorrelationError::NonPhysical { what: "omega" });
    }
    let l = omega.log10();
    let re = 7.3 * l.powi(3) + 44.2 * l.powi(2) - 263.0 * l + 439.0;
    check_finite(re, "critical film Reynolds number")
}

/// `Γ_c = Re_LFC μ_L / 4`
pub fn critical_film_flow(critical_reynolds: f64, liquid_viscosity: f64) -> f64 {
    critical_reynolds * liquid_viscosity / 4.0
}

/// `E_M = 1 - π D Γ_c / W_L`; the liquid flow rate must be non-zero.
pub fn onset_fraction(
    pipe_diameter: f64,
    gamma_c: f64,
    liquid_flow_rate: f64,
) -> CorrelationResult<f64> {
    check_divisor(liquid_flow_rate, "liquid flow rate")?;
    let e_m = 1.0 - (PI * pipe_diameter * gamma_c / liquid_flow_rate);
    check_finite(e_m, "onset fraction")
}

/// Evaluate the full onset correction chain.
pub fn onset_correction(
    liquid_viscosity: f64,
    gas_viscosity: f64,
    gas_density: f64,
    liquid_density: f64,
    pipe_diameter: f64,
    liquid_flow_rate: f64,
) -> CorrelationResult<OnsetCorrection> {
    let omega = omega(liquid_viscosity, gas_viscosity, gas_density, liquid_density)?;
    let critical_reynolds = critical_film_reynolds(omega)?;
    let gamma_c = critical_film_flow(critical_reynolds, liquid_viscosity);
    let onset_fraction = onset_fraction(pipe_diameter, gamma_c, liquid_flow_rate)?;

    Ok(OnsetCorrection {
        omega,
        critical_reynolds,
        gamma_c,
        onset_fraction,
    })
}

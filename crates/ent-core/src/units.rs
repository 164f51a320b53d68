// ent-core/src/units.rs

use uom::si::f64::{
    Acceleration as UomAcceleration, DynamicViscosity as UomDynamicViscosity,
    Length as UomLength, MassDensity as UomMassDensity, MassRate as UomMassRate,
    Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Accel = UomAcceleration;
pub type DynVisc = UomDynamicViscosity;
pub type Length = UomLength;
pub type Density = UomMassDensity;
pub type MassRate = UomMassRate;
pub type Velocity = UomVelocity;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn mps2(v: f64) -> Accel {
    use uom::si::acceleration::meter_per_second_squared;
    Accel::new::<meter_per_second_squared>(v)
}

#[inline]
pub fn kgpm3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn pas(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::pascal_second;
    DynVisc::new::<pascal_second>(v)
}

#[inline]
pub fn kgps(v: f64) -> MassRate {
    use uom::si::mass_rate::kilogram_per_second;
    MassRate::new::<kilogram_per_second>(v)
}

pub mod constants {
    use super::*;

    /// Gravity as used by the entrainment correlations (rounded, not g0).
    pub const G_MPS2: f64 = 9.81;

    #[inline]
    pub fn g() -> Accel {
        mps2(G_MPS2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _l = m(0.6);
        let _u = mps(10.0);
        let _rho = kgpm3(800.0);
        let _mu = pas(1e-4);
        let _w = kgps(0.5);
        let _g = constants::g();
    }

    #[test]
    fn values_are_stored_in_si_base_units() {
        assert_eq!(m(0.6).value, 0.6);
        assert_eq!(kgpm3(70.0).value, 70.0);
        assert_eq!(pas(1e-5).value, 1e-5);
        assert_eq!(constants::g().value, 9.81);
    }
}

//! Settling regime classification from the particle Reynolds number.

/// Lower edge of the intermediate regime.
pub const STOKES_RE_LIMIT: f64 = 1.92;
/// Lower edge of the Newton regime.
pub const NEWTON_RE_LIMIT: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    /// Re_p < 1.92
    Stokes,
    /// 1.92 <= Re_p < 500
    Intermediate,
    /// Re_p >= 500
    Newton,
}

impl FlowRegime {
    pub fn classify(re_p: f64) -> Self {
        if re_p < STOKES_RE_LIMIT {
            FlowRegime::Stokes
        } else if re_p < NEWTON_RE_LIMIT {
            FlowRegime::Intermediate
        } else {
            FlowRegime::Newton
        }
    }

    /// Exponent `m` used by the settling group of the entrainment correlation.
    pub fn exponent(self) -> f64 {
        match self {
            FlowRegime::Stokes => 1.0,
            FlowRegime::Intermediate => 0.6,
            FlowRegime::Newton => 0.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FlowRegime::Stokes => "stokes",
            FlowRegime::Intermediate => "intermediate",
            FlowRegime::Newton => "newton",
        }
    }
}

/// Shorthand for `FlowRegime::classify(re_p).exponent()`.
pub fn regime_exponent(re_p: f64) -> f64 {
    FlowRegime::classify(re_p).exponent()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(regime_exponent(1.919999), 1.0);
        assert_eq!(regime_exponent(1.92), 0.6);
        assert_eq!(regime_exponent(499.999), 0.6);
        assert_eq!(regime_exponent(500.0), 0.0);
    }

    #[test]
    fn extremes() {
        assert_eq!(FlowRegime::classify(0.0), FlowRegime::Stokes);
        assert_eq!(FlowRegime::classify(1e-9), FlowRegime::Stokes);
        assert_eq!(FlowRegime::classify(1e6), FlowRegime::Newton);
    }

    #[test]
    fn exponent_never_reaches_two() {
        for regime in [
            FlowRegime::Stokes,
            FlowRegime::Intermediate,
            FlowRegime::Newton,
        ] {
            assert!(regime.exponent() < 2.0);
        }
    }
}

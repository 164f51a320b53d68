//! Sphere drag coefficient from the Schiller-Naumann correlation.

/// Upper bound of the particle Reynolds number range the correlation was fitted on.
pub const SCHILLER_NAUMANN_RE_MAX: f64 = 1000.0;

/// Drag coefficient of a settling sphere at particle Reynolds number `re_p`.
///
/// `Cd = (24/Re)(1 + 0.15 Re^0.687) + 0.42 / (1 + 42500 / Re^1.16)`
///
/// Returns `f64::INFINITY` for `re_p <= 0`: there is no meaningful drag
/// coefficient there and callers must treat the sentinel as such. The fitted
/// range (`re_p < 1000`) is not enforced.
pub fn drag_coefficient(re_p: f64) -> f64 {
    if re_p <= 0.0 {
        return f64::INFINITY;
    }

    (24.0 / re_p) * (1.0 + 0.15 * re_p.powf(0.687)) + 0.42 / (1.0 + 42_500.0 / re_p.powf(1.16))
}

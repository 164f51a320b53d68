use crate::EntError;

pub fn ensure_finite(v: f64, what: &'static str) -> Result<f64, EntError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(EntError::NonFinite { what, value: v })
    }
}

/// Strictly positive and finite.
pub fn ensure_positive(v: f64, what: &'static str) -> Result<f64, EntError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(EntError::InvalidArg { what })
    }
}

use crate::HpError;

/// Floating point type used throughout system
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, HpError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(HpError::NonFinite { what, value: v })
    }
}

/// Round to a fixed number of decimals for presentation values.
pub fn round_to(v: Real, decimals: i32) -> Real {
    let scale = 10f64.powi(decimals);
    (v * scale).round() / scale
}

/// Evenly spaced points over `[start, end]` with exact endpoints.
pub fn linspace(start: Real, end: Real, num_points: usize) -> Vec<Real> {
    if num_points <= 1 {
        return vec![start];
    }

    let delta = (end - start) / (num_points - 1) as Real;
    let mut points: Vec<Real> = (0..num_points).map(|i| start + i as Real * delta).collect();

    // Ensure exact endpoint
    points[num_points - 1] = end;
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn linspace_has_exact_endpoints() {
        let pts = linspace(0.0, 75.0, 16);
        assert_eq!(pts.len(), 16);
        assert_eq!(pts[0], 0.0);
        assert_eq!(pts[15], 75.0);
        assert!((pts[1] - 5.0).abs() < 1e-12);
    }

    #[test]
    fn round_to_two_decimals() {
        assert_eq!(round_to(5.10899, 2), 5.11);
    }
}

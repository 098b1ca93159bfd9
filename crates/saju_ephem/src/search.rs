//! Coarse scan + bisection root finding on angular functions.
//!
//! The functions searched here are angle differences wrapped to
//! [-180, +180], so a sign change is only a real root when both samples
//! are small; a jump from ~+180 to ~-180 is the wrap, not a crossing.

use crate::error::EphemError;

/// Normalize an angle to [0, 360).
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Normalize an angle to (-180, +180].
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

/// True when the sign change between two samples is a genuine zero crossing.
fn is_genuine_crossing(f_a: f64, f_b: f64) -> bool {
    f_a * f_b <= 0.0 && (f_a - f_b).abs() < 270.0
}

/// Scan from `t_start` in steps of `step` (negative searches backward) and
/// bisect the first bracketed root to within `tolerance`.
///
/// Returns `Ok(None)` when no crossing is found within `max_steps`.
pub fn find_zero_crossing(
    f: &dyn Fn(f64) -> f64,
    t_start: f64,
    step: f64,
    max_steps: usize,
    max_iterations: usize,
    tolerance: f64,
) -> Result<Option<f64>, EphemError> {
    if step == 0.0 || !step.is_finite() || !t_start.is_finite() {
        return Err(EphemError::NoConvergence("invalid scan parameters"));
    }
    let mut t_prev = t_start;
    let mut f_prev = f(t_prev);

    for _ in 0..max_steps {
        let t_curr = t_prev + step;
        let f_curr = f(t_curr);
        if is_genuine_crossing(f_prev, f_curr) {
            let (t_a, f_a, t_b) = if t_prev < t_curr {
                (t_prev, f_prev, t_curr)
            } else {
                (t_curr, f_curr, t_prev)
            };
            return Ok(Some(bisect(f, t_a, f_a, t_b, max_iterations, tolerance)));
        }
        t_prev = t_curr;
        f_prev = f_curr;
    }
    Ok(None)
}

/// Bisect a bracketed root of `f` on `[t_a, t_b]`.
fn bisect(
    f: &dyn Fn(f64) -> f64,
    mut t_a: f64,
    mut f_a: f64,
    mut t_b: f64,
    max_iterations: usize,
    tolerance: f64,
) -> f64 {
    for _ in 0..max_iterations {
        let t_mid = 0.5 * (t_a + t_b);
        let f_mid = f(t_mid);
        if f_a * f_mid <= 0.0 {
            t_b = t_mid;
        } else {
            t_a = t_mid;
            f_a = f_mid;
        }
        if (t_b - t_a).abs() < tolerance {
            break;
        }
    }
    0.5 * (t_a + t_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_360_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_pm180_range() {
        assert!((normalize_to_pm180(190.0) + 170.0).abs() < 1e-12);
        assert!((normalize_to_pm180(-190.0) - 170.0).abs() < 1e-12);
        assert!((normalize_to_pm180(180.0) - 180.0).abs() < 1e-12);
    }

    #[test]
    fn finds_linear_root_forward() {
        let f = |t: f64| t - 3.3;
        let root = find_zero_crossing(&f, 0.0, 1.0, 10, 60, 1e-9)
            .unwrap()
            .unwrap();
        assert!((root - 3.3).abs() < 1e-8);
    }

    #[test]
    fn finds_root_backward() {
        let f = |t: f64| t + 2.5;
        let root = find_zero_crossing(&f, 0.0, -1.0, 10, 60, 1e-9)
            .unwrap()
            .unwrap();
        assert!((root + 2.5).abs() < 1e-8);
    }

    #[test]
    fn ignores_wraparound_jump() {
        // Wraps from +150 to -160 between t = 0 and t = 0.5; real root at 2.1.
        let f = |t: f64| normalize_to_pm180(100.0 * t + 150.0);
        let root = find_zero_crossing(&f, 0.0, 0.5, 10, 60, 1e-9)
            .unwrap()
            .unwrap();
        assert!((root - 2.1).abs() < 1e-6, "got {root}");
    }

    #[test]
    fn none_when_no_crossing() {
        let f = |_t: f64| 5.0;
        assert_eq!(find_zero_crossing(&f, 0.0, 1.0, 5, 60, 1e-9).unwrap(), None);
    }

    #[test]
    fn rejects_zero_step() {
        let f = |t: f64| t;
        assert!(find_zero_crossing(&f, 0.0, 0.0, 5, 60, 1e-9).is_err());
    }
}

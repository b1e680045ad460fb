//! Sampling grids over the week axis.

/// `n` evenly spaced points between `start` and `end` (inclusive).
///
/// `n` is clamped to at least 2 so both endpoints are always present.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    let n = n.max(2);
    let step = (end - start) / (n as f64 - 1.0);
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        out.push(start + step * i as f64);
    }
    // Pin the last point to avoid accumulated drift.
    out[n - 1] = end;
    out
}

/// Whole training weeks `0, 1, ..., weeks - 1`.
pub fn whole_weeks(weeks: usize) -> Vec<f64> {
    (0..weeks).map(|w| w as f64).collect()
}

/// Round to `decimals` places (presentation only; the models never round).
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_endpoints() {
        let v = linspace(0.0, 19.0, 100);
        assert_eq!(v.len(), 100);
        assert_eq!(v[0], 0.0);
        assert_eq!(v[99], 19.0);
        assert!(v.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn linspace_clamps_point_count() {
        assert_eq!(linspace(1.0, 3.0, 0), vec![1.0, 3.0]);
    }

    #[test]
    fn whole_weeks_starts_at_zero() {
        assert_eq!(whole_weeks(4), vec![0.0, 1.0, 2.0, 3.0]);
        assert!(whole_weeks(0).is_empty());
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to(20.4812, 2), 20.48);
        assert_eq!(round_to(1.596685, 4), 1.5967);
        assert_eq!(round_to(36.04, 1), 36.0);
    }
}

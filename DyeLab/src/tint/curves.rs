//! Scalar helpers for the opacity formula

/// Linearly map `value` from `[start1, stop1]` onto `[start2, stop2]`.
#[must_use]
pub fn map_between(value: f64, start1: f64, stop1: f64, start2: f64, stop2: f64) -> f64 {
    start2 + (stop2 - start2) * ((value - start1) / (stop1 - start1))
}

/// Logistic curve with ceiling `l`, steepness `k` and midpoint `x0`.
#[must_use]
pub fn logistic(x: f64, l: f64, k: f64, x0: f64) -> f64 {
    l / (1.0 + (-k * (x - x0)).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_between() {
        assert!((map_between(25.0, 25.0, 100.0, 1.25, 2.0) - 1.25).abs() < f64::EPSILON);
        assert!((map_between(100.0, 25.0, 100.0, 1.25, 2.0) - 2.0).abs() < f64::EPSILON);
        assert!((map_between(50.0, 0.0, 200.0, 0.0, 255.0) - 63.75).abs() < 1e-12);
    }

    #[test]
    fn test_logistic_midpoint() {
        assert!((logistic(132.0, 0.85, -0.07, 132.0) - 0.425).abs() < 1e-12);
        // negative steepness: brighter input, lower output
        assert!(logistic(200.0, 0.85, -0.07, 132.0) < logistic(60.0, 0.85, -0.07, 132.0));
    }
}

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// Dynamically sized column vector.
pub type DVector = nalgebra::DVector<f64>;

/// Dynamically sized dense matrix.
pub type DMatrix = nalgebra::DMatrix<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Rounds `value` to `places` decimal places.
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn round_to_two_places() {
        assert_relative_eq!(round_to(1.23456, 2), 1.23);
        assert_relative_eq!(round_to(-0.005_1, 2), -0.01);
        assert_relative_eq!(round_to(7.0, 2), 7.0);
    }
}

//! Tuple-level surface for callers that hold plain `(x, y)` coordinates.
//!
//! Important
//! - Thin wrappers only. The Python bindings and the CLI go through here so
//!   both agree on how circles are flattened: `(center_x, center_y, radius)`.

pub use crate::circle::{
    compactness_index, contains, minimum_enclosing_circle, minimum_enclosing_circle_seeded,
    validate_points, Circle, CompactnessError, PointsError,
};

use nalgebra::Vector2;
use rand::Rng;

use crate::circle::Point;

/// Circle flattened as `(center_x, center_y, radius)`.
pub type CircleTuple = (f64, f64, f64);

#[inline]
pub fn to_points(xy: &[(f64, f64)]) -> Vec<Point> {
    xy.iter().map(|&(x, y)| Vector2::new(x, y)).collect()
}

#[inline]
pub fn to_tuple(c: &Circle) -> CircleTuple {
    (c.center.x, c.center.y, c.radius)
}

#[inline]
pub fn from_tuple((x, y, r): CircleTuple) -> Circle {
    Circle::new(Vector2::new(x, y), r)
}

/// Minimum enclosing circle of `(x, y)` pairs; `Ok(None)` for empty input.
///
/// Non-finite coordinates are rejected up front instead of running the solver
/// on them.
pub fn enclosing_circle_xy<R: Rng + ?Sized>(
    xy: &[(f64, f64)],
    rng: &mut R,
) -> Result<Option<CircleTuple>, PointsError> {
    let points = to_points(xy);
    validate_points(&points)?;
    Ok(minimum_enclosing_circle(&points, rng).map(|c| to_tuple(&c)))
}

/// Tolerant containment on tuples (same slack as the solver).
///
/// A negative or NaN radius describes no circle, so nothing is inside it.
#[inline]
pub fn contains_xy(circle: CircleTuple, p: (f64, f64)) -> bool {
    if !(circle.2 >= 0.0) {
        return false;
    }
    contains(&from_tuple(circle), Vector2::new(p.0, p.1))
}

/// Compactness index of a polygon ring given as `(x, y)` pairs.
pub fn compactness_xy<R: Rng + ?Sized>(
    ring: &[(f64, f64)],
    rng: &mut R,
) -> Result<f64, CompactnessError> {
    compactness_index(&to_points(ring), rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn tuple_roundtrip_through_solver() {
        let mut rng = StdRng::seed_from_u64(42);
        let c = enclosing_circle_xy(&[(0.0, 0.0), (4.0, 0.0)], &mut rng)
            .unwrap()
            .unwrap();
        assert!((c.0 - 2.0).abs() < 1e-12 && c.1.abs() < 1e-12 && (c.2 - 2.0).abs() < 1e-12);
        assert!(contains_xy(c, (4.0, 0.0)));
        assert!(!contains_xy(c, (4.0 + 1e-9, 0.0)));
    }

    #[test]
    fn contains_rejects_negative_and_nan_radius() {
        assert!(!contains_xy((0.0, 0.0, -1.0), (0.0, 0.0)));
        assert!(!contains_xy((0.0, 0.0, -0.5), (10.0, 10.0)));
        assert!(!contains_xy((0.0, 0.0, f64::NAN), (0.0, 0.0)));
        assert!(contains_xy((0.0, 0.0, 0.0), (0.0, 0.0)));
        assert!(contains_xy((1.0, 1.0, f64::INFINITY), (-1e300, 1e300)));
    }

    #[test]
    fn empty_and_invalid_inputs() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(enclosing_circle_xy(&[], &mut rng), Ok(None));
        assert_eq!(
            enclosing_circle_xy(&[(0.0, 0.0), (f64::NAN, 1.0)], &mut rng),
            Err(PointsError::NonFinite { index: 1 })
        );
    }

    #[test]
    fn compactness_of_right_triangle() {
        let mut rng = StdRng::seed_from_u64(3);
        // Legs 2 and 2: area 2, enclosing circle on the hypotenuse, r = √2.
        let v = compactness_xy(&[(0.0, 0.0), (2.0, 0.0), (0.0, 2.0)], &mut rng).unwrap();
        assert!((v - 2.0 / (std::f64::consts::PI * 2.0)).abs() < 1e-12);
    }
}

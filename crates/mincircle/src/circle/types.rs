//! Point and circle types shared by the enclosing-circle solvers.
//!
//! - `Circle`: closed disk with a non-negative radius.
//! - `Circumcircle`: circle through three points, or the collinear outcome.
//! - `PointsError` / `validate_points`: optional finiteness guard for callers
//!   that read coordinates from untrusted tables.

use std::fmt;

use nalgebra::{Rotation2, Vector2};

use super::cfg::CONTAIN_EPS;

/// A point in the plane.
pub type Point = Vector2<f64>;

/// Closed disk `{ x : |x - center| <= radius }`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Vector2<f64>,
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub fn new(center: Vector2<f64>, radius: f64) -> Self {
        debug_assert!(radius >= 0.0, "negative radius {radius}");
        Self { center, radius }
    }

    /// Zero-radius circle sitting on `p`.
    #[inline]
    pub fn at_point(p: Point) -> Self {
        Self {
            center: p,
            radius: 0.0,
        }
    }

    /// Tolerant membership test (see `CONTAIN_EPS`).
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        distance(p, self.center) <= self.radius * (1.0 + CONTAIN_EPS)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }

    /// Image under the rigid motion `x ↦ R x + t`.
    pub fn transformed(&self, rot: &Rotation2<f64>, t: Vector2<f64>) -> Circle {
        Circle {
            center: *rot * self.center + t,
            radius: self.radius,
        }
    }

    /// Centers and radii agree within `rel_tol` of the larger radius.
    ///
    /// Two zero-radius circles only compare equal when their centers are
    /// within `rel_tol` of the center magnitude.
    pub fn approx_eq(&self, other: &Circle, rel_tol: f64) -> bool {
        let scale = self
            .radius
            .max(other.radius)
            .max(self.center.abs().max() * f64::EPSILON);
        let tol = rel_tol * scale.max(f64::MIN_POSITIVE);
        distance(self.center, other.center) <= tol && (self.radius - other.radius).abs() <= tol
    }
}

/// Result of fitting a circle through three points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Circumcircle {
    Circle(Circle),
    /// The three points lie on a line (formula determinant is exactly zero).
    Collinear,
}

impl Circumcircle {
    #[inline]
    pub fn circle(self) -> Option<Circle> {
        match self {
            Circumcircle::Circle(c) => Some(c),
            Circumcircle::Collinear => None,
        }
    }
}

/// Euclidean distance via `hypot` (no overflow for large coordinates).
#[inline]
pub(crate) fn distance(a: Point, b: Point) -> f64 {
    let d = a - b;
    d.x.hypot(d.y)
}

/// Errors surfaced when checking caller-supplied coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointsError {
    /// Coordinate at `index` is NaN or infinite.
    NonFinite { index: usize },
}

impl fmt::Display for PointsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointsError::NonFinite { index } => {
                write!(f, "point {index} has a non-finite coordinate")
            }
        }
    }
}

impl std::error::Error for PointsError {}

/// Reject NaN/∞ coordinates before handing points to the solvers.
pub fn validate_points(points: &[Point]) -> Result<(), PointsError> {
    match points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        Some(index) => Err(PointsError::NonFinite { index }),
        None => Ok(()),
    }
}

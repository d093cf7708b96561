//! Shape compactness from the minimum enclosing circle.
//!
//! - `compactness_index`: polygon area over the area of the enclosing circle of
//!   its convex hull. 1 for a disk, towards 0 for elongated shapes.
//! - `compactness_index_sqrt`: √area / perimeter, the arithmetic sibling index.
//!
//! Rings may be passed open or closed (first vertex repeated at the end).

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::primitives::cross;
use super::solvers::minimum_enclosing_circle;
use super::types::{validate_points, Circle, Point, PointsError};

/// Errors surfaced by the compactness helpers.
#[derive(Debug, Clone, PartialEq)]
pub enum CompactnessError {
    /// Fewer than three distinct vertices.
    TooFewVertices { found: usize },
    /// Shoelace area is zero (all vertices collinear).
    ZeroArea,
    /// Vertex at `index` has a non-finite coordinate.
    NonFinite { index: usize },
}

impl fmt::Display for CompactnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompactnessError::TooFewVertices { found } => {
                write!(f, "polygon needs at least 3 distinct vertices, got {found}")
            }
            CompactnessError::ZeroArea => write!(f, "polygon has zero area"),
            CompactnessError::NonFinite { index } => {
                write!(f, "vertex {index} has a non-finite coordinate")
            }
        }
    }
}

impl std::error::Error for CompactnessError {}

impl From<PointsError> for CompactnessError {
    fn from(err: PointsError) -> Self {
        match err {
            PointsError::NonFinite { index } => CompactnessError::NonFinite { index },
        }
    }
}

/// Andrew’s monotone chain convex hull (CCW, no repeated vertices).
///
/// Collinear boundary points are dropped. Degenerate input yields fewer than
/// three vertices.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut pts: Vec<Point> = points.to_vec();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    pts.dedup();
    if pts.len() < 3 {
        return pts;
    }
    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0
        {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0
        {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    hull
}

/// Unsigned shoelace area of a ring.
pub fn polygon_area(vertices: &[Point]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let twice: f64 = vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(p, q)| p.x * q.y - q.x * p.y)
        .sum();
    0.5 * twice.abs()
}

/// Euclidean length of a closed ring.
pub fn polygon_perimeter(vertices: &[Point]) -> f64 {
    if vertices.len() < 2 {
        return 0.0;
    }
    vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(p, q)| (q - p).norm())
        .sum()
}

#[inline]
pub fn circle_area(circle: &Circle) -> f64 {
    circle.area()
}

/// Area of `polygon` divided by the area of its minimum enclosing circle.
pub fn compactness_index<R: Rng + ?Sized>(
    polygon: &[Point],
    rng: &mut R,
) -> Result<f64, CompactnessError> {
    validate_points(polygon)?;
    let hull = convex_hull(polygon);
    if hull.len() < 3 {
        return Err(CompactnessError::TooFewVertices { found: hull.len() });
    }
    let area = polygon_area(open_ring(polygon));
    if area == 0.0 {
        return Err(CompactnessError::ZeroArea);
    }
    // Hull has ≥3 vertices, so the circle exists and has positive radius.
    let circle = minimum_enclosing_circle(&hull, rng).ok_or(CompactnessError::ZeroArea)?;
    Ok(area / circle.area())
}

/// `compactness_index` with a `StdRng` seeded from `seed`.
pub fn compactness_index_seeded(polygon: &[Point], seed: u64) -> Result<f64, CompactnessError> {
    let mut rng = StdRng::seed_from_u64(seed);
    compactness_index(polygon, &mut rng)
}

/// `√area / perimeter`; `None` unless both are positive and finite.
pub fn compactness_index_sqrt(area: f64, perimeter: f64) -> Option<f64> {
    if !(area.is_finite() && perimeter.is_finite()) || area < 0.0 || perimeter <= 0.0 {
        return None;
    }
    Some(area.sqrt() / perimeter)
}

/// Drop the closing vertex of a ring if it repeats the first one.
fn open_ring(ring: &[Point]) -> &[Point] {
    match (ring.first(), ring.last()) {
        (Some(a), Some(b)) if ring.len() > 1 && a == b => &ring[..ring.len() - 1],
        _ => ring,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn unit_square() -> Vec<Point> {
        vec![
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
        ]
    }

    #[test]
    fn hull_drops_interior_and_collinear() {
        let mut pts = unit_square();
        pts.push(vector![0.5, 0.5]);
        pts.push(vector![0.5, 0.0]);
        pts.push(vector![1.0, 1.0]);
        let hull = convex_hull(&pts);
        assert_eq!(hull.len(), 4);
        assert!((polygon_area(&hull) - 1.0).abs() < 1e-15);
        // CCW orientation
        assert!(cross(hull[0], hull[1], hull[2]) > 0.0);
    }

    #[test]
    fn area_and_perimeter_of_closed_ring() {
        let mut ring = unit_square();
        ring.push(ring[0]);
        assert!((polygon_area(open_ring(&ring)) - 1.0).abs() < 1e-15);
        assert!((polygon_perimeter(&unit_square()) - 4.0).abs() < 1e-15);
    }

    #[test]
    fn square_compactness_is_two_over_pi() {
        let mut ring = unit_square();
        ring.push(ring[0]);
        let v = compactness_index_seeded(&ring, 11).unwrap();
        assert!((v - 2.0 / std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn many_sided_polygon_approaches_one() {
        let n = 720;
        let ring: Vec<Point> = (0..n)
            .map(|k| {
                let th = std::f64::consts::TAU * (k as f64) / (n as f64);
                vector![3.0 + th.cos(), -2.0 + th.sin()]
            })
            .collect();
        let v = compactness_index_seeded(&ring, 5).unwrap();
        assert!(v > 0.999 && v <= 1.0 + 1e-12);
    }

    #[test]
    fn degenerate_polygons_are_errors() {
        let line = vec![vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]];
        assert_eq!(
            compactness_index_seeded(&line, 0),
            Err(CompactnessError::TooFewVertices { found: 2 })
        );
        let nan = vec![vector![0.0, 0.0], vector![f64::NAN, 1.0], vector![2.0, 0.0]];
        assert_eq!(
            compactness_index_seeded(&nan, 0),
            Err(CompactnessError::NonFinite { index: 1 })
        );
    }

    #[test]
    fn sqrt_index() {
        let v = compactness_index_sqrt(1.0, 4.0).unwrap();
        assert!((v - 0.25).abs() < 1e-15);
        assert!(compactness_index_sqrt(1.0, 0.0).is_none());
        assert!(compactness_index_sqrt(f64::NAN, 1.0).is_none());
    }
}

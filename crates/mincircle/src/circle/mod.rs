//! Minimum enclosing circle (randomized incremental, expected O(n)).
//!
//! Purpose
//! - Smallest closed disk containing a finite point set, robust to collinear
//!   and duplicate points, with a relative containment slack so boundary points
//!   are never rejected by round-off.
//!
//! Layout
//! - `primitives`: containment, diameter circle, circumcircle.
//! - `solvers`: the three nested scan levels (0, 1, 2 pinned boundary points).
//! - `compactness`: shape indices built on top of the circle.
//! - `rand`: reproducible point clouds.
//!
//! Code cross-refs: `Circle`, `Circumcircle`, `ScanStats`, `CONTAIN_EPS`

mod cfg;
mod compactness;
mod primitives;
pub mod rand;
mod solvers;
mod types;

pub use cfg::CONTAIN_EPS;
pub use compactness::{
    circle_area, compactness_index, compactness_index_seeded, compactness_index_sqrt, convex_hull,
    polygon_area, polygon_perimeter, CompactnessError,
};
pub use primitives::{circumcircle, contains, diameter_circle};
pub use solvers::{
    minimum_enclosing_circle, minimum_enclosing_circle_fixed_order,
    minimum_enclosing_circle_seeded, minimum_enclosing_circle_with_stats, ScanStats,
};
pub use types::{validate_points, Circle, Circumcircle, Point, PointsError};

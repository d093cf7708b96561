//! Minimum enclosing circles in the plane.
//!
//! The core is the randomized incremental construction (expected linear time)
//! with explicit one- and two-boundary-point rescans, plus the geometric
//! primitives it rests on. Compactness helpers and reproducible point clouds
//! sit next to it because every caller so far needed them together.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>` (`Point`); circles are closed disks.
//! - Randomness is always injected (`&mut R: Rng`), never drawn from a global.
//! - Containment uses a fixed multiplicative slack, see `circle::CONTAIN_EPS`.

pub mod api;
pub mod circle;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use circle::{Circle, Point};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::circle::rand::{collinear_ramp, draw_points, CloudCfg, CloudShape, ReplayToken};
    pub use crate::circle::{
        circle_area, compactness_index, compactness_index_seeded, contains, convex_hull,
        minimum_enclosing_circle, minimum_enclosing_circle_seeded, polygon_area, Circle,
        Circumcircle, Point, CONTAIN_EPS,
    };
    pub use nalgebra::Vector2 as Vec2;
}

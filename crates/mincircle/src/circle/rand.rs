//! Reproducible point clouds for tests, benches, and the CLI demo.
//!
//! Model
//! - `draw_points` samples `n` points from a simple shape (disk, square, ring,
//!   segment), then scales and offsets them.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG, so
//!   the `index`-th cloud of a stream can be regenerated on its own.
//! - `collinear_ramp` is the adversarial order for the fixed-order solver:
//!   every new point falls outside the current circle.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Point;

/// Region the points are drawn from (before scale/offset).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CloudShape {
    /// Uniform in the unit disk.
    Disk,
    /// Uniform in `[-1, 1]²`.
    Square,
    /// On the unit circle, radii jittered by `±jitter`.
    Ring { jitter: f64 },
    /// Uniform on the segment from `(-1, 0)` to `(1, 0)`.
    Segment,
}

/// Point-cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    pub shape: CloudShape,
    /// Multiplies every coordinate after sampling.
    pub scale: f64,
    /// Added after scaling.
    pub offset: Vector2<f64>,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 100,
            shape: CloudShape::Disk,
            scale: 1.0,
            offset: Vector2::zeros(),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.count` points. Same `(cfg, tok)` gives the same cloud.
pub fn draw_points(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    (0..cfg.count)
        .map(|_| sample_shape(cfg.shape, &mut rng) * cfg.scale + cfg.offset)
        .collect()
}

fn sample_shape<R: Rng + ?Sized>(shape: CloudShape, rng: &mut R) -> Point {
    match shape {
        CloudShape::Disk => {
            let th = rng.gen::<f64>() * std::f64::consts::TAU;
            let r = rng.gen::<f64>().sqrt();
            Vector2::new(r * th.cos(), r * th.sin())
        }
        CloudShape::Square => Vector2::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0)),
        CloudShape::Ring { jitter } => {
            let th = rng.gen::<f64>() * std::f64::consts::TAU;
            let j = jitter.abs();
            let r = if j > 0.0 {
                1.0 + rng.gen_range(-j..=j)
            } else {
                1.0
            };
            Vector2::new(r * th.cos(), r * th.sin())
        }
        CloudShape::Segment => Vector2::new(rng.gen_range(-1.0..=1.0), 0.0),
    }
}

/// `(0,0), (1,0), …, (n-1,0)`: each point escapes the circle of its prefix.
pub fn collinear_ramp(n: usize) -> Vec<Point> {
    (0..n).map(|i| Vector2::new(i as f64, 0.0)).collect()
}

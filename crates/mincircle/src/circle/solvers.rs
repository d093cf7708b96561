//! Randomized incremental minimum enclosing circle.
//!
//! - `minimum_enclosing_circle`: shuffle, then scan with zero known boundary points.
//! - `circle_one_point`: rescan a prefix with one point pinned to the boundary.
//! - `circle_two_points`: single pass with two pinned points; keeps the most
//!   extreme circumcircle on each side of the chord.
//!
//! Each level works on an explicit prefix slice of the permuted input. The
//! only mutable state threaded through is `ScanStats`, which counts work so the
//! linear-vs-quadratic behaviour can be asserted without timing.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::primitives::{circumcircle, diameter_circle, side_offset};
use super::types::{Circle, Point};

/// Work counters for one solve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Calls to the tolerant containment predicate.
    pub containment_tests: usize,
    /// Entries into the one-boundary-point rescan.
    pub one_point_scans: usize,
    /// Entries into the two-boundary-point pass.
    pub two_point_scans: usize,
}

impl ScanStats {
    #[inline]
    fn test(&mut self, c: &Circle, p: Point) -> bool {
        self.containment_tests += 1;
        c.contains(p)
    }
}

/// Smallest circle enclosing `points`; `None` for empty input.
///
/// The input is copied and shuffled with `rng`, which gives expected O(n)
/// work regardless of the caller's order.
pub fn minimum_enclosing_circle<R: Rng + ?Sized>(points: &[Point], rng: &mut R) -> Option<Circle> {
    minimum_enclosing_circle_with_stats(points, rng).0
}

/// Same as `minimum_enclosing_circle` with a `StdRng` seeded from `seed`.
pub fn minimum_enclosing_circle_seeded(points: &[Point], seed: u64) -> Option<Circle> {
    let mut rng = StdRng::seed_from_u64(seed);
    minimum_enclosing_circle(points, &mut rng)
}

/// Randomized solve that also reports the work done.
pub fn minimum_enclosing_circle_with_stats<R: Rng + ?Sized>(
    points: &[Point],
    rng: &mut R,
) -> (Option<Circle>, ScanStats) {
    let mut shuffled = points.to_vec();
    shuffled.shuffle(rng);
    let mut stats = ScanStats::default();
    let circle = scan_unpinned(&shuffled, &mut stats);
    (circle, stats)
}

/// Solve in the caller's order, without shuffling.
///
/// Same result as the randomized solve, but adversarial orders (see
/// `rand::collinear_ramp`) cost Θ(n²) containment tests.
pub fn minimum_enclosing_circle_fixed_order(points: &[Point]) -> (Option<Circle>, ScanStats) {
    let mut stats = ScanStats::default();
    let circle = scan_unpinned(points, &mut stats);
    (circle, stats)
}

fn scan_unpinned(points: &[Point], stats: &mut ScanStats) -> Option<Circle> {
    let mut current: Option<Circle> = None;
    for (i, &p) in points.iter().enumerate() {
        let inside = match &current {
            Some(c) => stats.test(c, p),
            None => false,
        };
        if !inside {
            current = Some(circle_one_point(&points[..=i], p, stats));
        }
    }
    current
}

/// Smallest circle with `p` on its boundary enclosing `points`.
pub(crate) fn circle_one_point(points: &[Point], p: Point, stats: &mut ScanStats) -> Circle {
    stats.one_point_scans += 1;
    let mut c = Circle::at_point(p);
    let mut pinned_pair = false;
    for (i, &q) in points.iter().enumerate() {
        if stats.test(&c, q) {
            continue;
        }
        if pinned_pair {
            c = circle_two_points(&points[..=i], p, q, stats);
        } else {
            c = diameter_circle(p, q);
            pinned_pair = true;
        }
    }
    c
}

/// Smallest circle with `p` and `q` on its boundary enclosing `points`.
///
/// Points outside the diameter circle are split by the side of `p → q` they
/// fall on. Per side, the circumcircle whose center reaches farthest to that
/// side is kept: it is the largest of that side's candidates and covers the
/// rest. The smaller of the two survivors wins.
pub(crate) fn circle_two_points(
    points: &[Point],
    p: Point,
    q: Point,
    stats: &mut ScanStats,
) -> Circle {
    stats.two_point_scans += 1;
    let diameter = diameter_circle(p, q);
    // (signed reach of the center past the chord, circle)
    let mut left: Option<(f64, Circle)> = None;
    let mut right: Option<(f64, Circle)> = None;
    for &r in points {
        if stats.test(&diameter, r) {
            continue;
        }
        let side = side_offset(p, q, r);
        let Some(c) = circumcircle(p, q, r).circle() else {
            continue;
        };
        let reach = side_offset(p, q, c.center);
        if side > 0.0 {
            if left.map_or(true, |(best, _)| reach > best) {
                left = Some((reach, c));
            }
        } else if side < 0.0 && right.map_or(true, |(best, _)| reach < best) {
            right = Some((reach, c));
        }
    }
    match (left, right) {
        (None, None) => diameter,
        (Some((_, l)), None) => l,
        (None, Some((_, r))) => r,
        (Some((_, l)), Some((_, r))) => {
            if l.radius <= r.radius {
                l
            } else {
                r
            }
        }
    }
}

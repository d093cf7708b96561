//! Geometric primitives: tolerant containment, diameter circle, circumcircle.

use super::types::{distance, Circle, Circumcircle, Point};

/// True iff `p` lies within `radius * (1 + CONTAIN_EPS)` of the center.
#[inline]
pub fn contains(circle: &Circle, p: Point) -> bool {
    circle.contains(p)
}

/// Circle with segment `pq` as diameter.
///
/// The radius is the larger of the two half-lengths so both endpoints pass the
/// containment test even when the midpoint rounds asymmetrically.
pub fn diameter_circle(p: Point, q: Point) -> Circle {
    let center = p * 0.5 + q * 0.5;
    let radius = distance(center, p).max(distance(center, q));
    Circle::new(center, radius)
}

/// Circle through three points, or `Collinear` when the determinant is zero.
///
/// The points are mapped into the unit box: shifted so the midpoint of their
/// bounding box is the origin and divided by the half-extent. The center is
/// solved there and mapped back, so the cubic terms of the formula stay near 1
/// at any coordinate magnitude. The radius is the largest of the three
/// center-to-vertex distances.
///
/// A triple so flat that its center does not fit in `f64` is also reported as
/// `Collinear`.
pub fn circumcircle(a: Point, b: Point, c: Point) -> Circumcircle {
    let lo = a.inf(&b).inf(&c);
    let hi = a.sup(&b).sup(&c);
    let o = lo * 0.5 + hi * 0.5;
    let s = (hi * 0.5 - lo * 0.5).max();
    if s == 0.0 {
        return Circumcircle::Collinear;
    }
    let (pa, pb, pc) = ((a - o) / s, (b - o) / s, (c - o) / s);
    let d = (pa.x * (pb.y - pc.y) + pb.x * (pc.y - pa.y) + pc.x * (pa.y - pb.y)) * 2.0;
    if d == 0.0 {
        return Circumcircle::Collinear;
    }
    let (sa, sb, sc) = (pa.norm_squared(), pb.norm_squared(), pc.norm_squared());
    let x = (sa * (pb.y - pc.y) + sb * (pc.y - pa.y) + sc * (pa.y - pb.y)) / d;
    let y = (sa * (pc.x - pb.x) + sb * (pa.x - pc.x) + sc * (pb.x - pa.x)) / d;
    let center = o + Point::new(x, y) * s;
    let radius = distance(center, a)
        .max(distance(center, b))
        .max(distance(center, c));
    if !(center.x.is_finite() && center.y.is_finite() && radius.is_finite()) {
        return Circumcircle::Collinear;
    }
    Circumcircle::Circle(Circle::new(center, radius))
}

/// Twice the signed area of triangle `(a, b, c)`; positive when `c` is left of `a → b`.
#[inline]
pub(crate) fn cross(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Signed distance of `c` from the line `a → b`; positive on the left.
///
/// Same sign as [`cross`], but linear in the coordinate scale, so it neither
/// overflows nor flushes to zero at extreme magnitudes. Zero when `a == b`.
#[inline]
pub(crate) fn side_offset(a: Point, b: Point, c: Point) -> f64 {
    let len = distance(a, b);
    if len == 0.0 {
        return 0.0;
    }
    let u = (b - a) / len;
    let ac = c - a;
    u.x * ac.y - u.y * ac.x
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn diameter_circle_midpoint() {
        let c = diameter_circle(vector![0.0, 0.0], vector![4.0, 0.0]);
        assert_eq!(c.center, vector![2.0, 0.0]);
        assert!((c.radius - 2.0).abs() < 1e-15);
    }

    #[test]
    fn circumcircle_right_triangle_uses_hypotenuse() {
        let c = circumcircle(vector![0.0, 0.0], vector![2.0, 0.0], vector![0.0, 2.0])
            .circle()
            .expect("non-collinear");
        assert!((c.center - vector![1.0, 1.0]).norm() < 1e-12);
        assert!((c.radius - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn circumcircle_collinear_and_duplicate() {
        let a = vector![0.0, 0.0];
        let b = vector![1.0, 1.0];
        let c = vector![3.0, 3.0];
        assert_eq!(circumcircle(a, b, c), Circumcircle::Collinear);
        assert_eq!(circumcircle(a, a, b), Circumcircle::Collinear);
    }

    #[test]
    fn circumcircle_far_from_origin() {
        let off = vector![1e9, -3e9];
        let c = circumcircle(
            off + vector![0.0, 0.0],
            off + vector![4.0, 0.0],
            off + vector![2.0, 3.0],
        )
        .circle()
        .unwrap();
        assert!((c.center - (off + vector![2.0, 5.0 / 6.0])).norm() < 1e-5);
        assert!((c.radius - (4.0 + 25.0 / 36.0f64).sqrt()).abs() < 1e-5);
    }

    #[test]
    fn circumcircle_at_extreme_magnitudes() {
        let r0 = (4.0 + 25.0 / 36.0f64).sqrt();
        for s in [1e-300, 1e-150, 1e-100, 1e100, 1e150, 1e300] {
            let a = vector![0.0, 0.0];
            let b = vector![4.0 * s, 0.0];
            let c = vector![2.0 * s, 3.0 * s];
            let got = circumcircle(a, b, c).circle().expect("non-collinear");
            let want = Circle::new(vector![2.0 * s, 5.0 / 6.0 * s], r0 * s);
            assert!(got.approx_eq(&want, 1e-12), "scale {s}: {got:?}");
            assert!([a, b, c].iter().all(|&p| contains(&got, p)), "scale {s}");
        }
        let (a, b) = (vector![1e300, 1e300], vector![-1e300, 1e300]);
        assert_eq!(circumcircle(a, b, vector![3e300, 1e300]), Circumcircle::Collinear);
        assert_eq!(circumcircle(a, a, a), Circumcircle::Collinear);
    }

    #[test]
    fn diameter_circle_near_max_magnitude() {
        let p = vector![f64::MAX, -f64::MAX];
        let q = vector![f64::MAX * 0.5, -f64::MAX];
        let c = diameter_circle(p, q);
        assert!(c.center.x.is_finite() && c.radius.is_finite());
        assert!(contains(&c, p) && contains(&c, q));
        let tiny = diameter_circle(vector![0.0, 0.0], vector![4e-300, 0.0]);
        assert!((tiny.radius / 2e-300 - 1.0).abs() < 1e-15);
    }

    #[test]
    fn side_offset_is_scale_free() {
        for s in [1e-300, 1.0, 1e300] {
            let p = vector![0.0, 0.0];
            let q = vector![s, 0.0];
            assert!(side_offset(p, q, vector![0.5 * s, s]) > 0.0);
            assert!(side_offset(p, q, vector![0.5 * s, -s]) < 0.0);
            assert_eq!(side_offset(p, q, vector![3.0 * s, 0.0]), 0.0);
        }
        assert_eq!(side_offset(vector![1.0, 1.0], vector![1.0, 1.0], vector![0.0, 5.0]), 0.0);
    }

    #[test]
    fn containment_slack_is_relative() {
        let big = Circle::new(vector![0.0, 0.0], 1e12);
        assert!(contains(&big, vector![1e12 * (1.0 + 1e-15), 0.0]));
        assert!(!contains(&big, vector![1e12 * (1.0 + 1e-12), 0.0]));
        let small = Circle::new(vector![0.0, 0.0], 1e-12);
        assert!(contains(&small, vector![1e-12, 0.0]));
        assert!(!contains(&small, vector![2e-12, 0.0]));
        let dot = Circle::at_point(vector![5.0, 5.0]);
        assert!(contains(&dot, vector![5.0, 5.0]));
        assert!(!contains(&dot, vector![5.0, 5.0 + 1e-12]));
    }

    #[test]
    fn cross_sign_matches_orientation() {
        let p = vector![0.0, 0.0];
        let q = vector![1.0, 0.0];
        assert!(cross(p, q, vector![0.5, 1.0]) > 0.0);
        assert!(cross(p, q, vector![0.5, -1.0]) < 0.0);
        assert_eq!(cross(p, q, vector![3.0, 0.0]), 0.0);
    }
}

//! Property tests for the algebraic identities and the intersection contract.

use super::*;
use proptest::prelude::*;
use std::f64::consts::TAU;

fn coord() -> impl Strategy<Value = f64> {
    -1.0e3..1.0e3
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

fn nonzero_point() -> impl Strategy<Value = Point> {
    point().prop_filter("away from the origin", |p| p.magnitude() > 1e-3)
}

fn segment() -> impl Strategy<Value = LineSegment> {
    (point(), point()).prop_map(|(a, b)| LineSegment::new(a, b))
}

fn interval() -> impl Strategy<Value = OpenInterval> {
    (coord(), coord()).prop_map(|(a, b)| OpenInterval::spanning(a, b))
}

/// Distance between two angles on the circle.
fn angle_gap(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(TAU);
    d.min(TAU - d)
}

proptest! {
    #[test]
    fn rotation_adds_to_angle(p in nonzero_point(), theta in -10.0f64..10.0) {
        let rotated = p.rotate(theta);
        prop_assert!(angle_gap(rotated.angle(), p.angle() + theta) < 1e-9);
    }

    #[test]
    fn rotation_preserves_magnitude(p in point(), theta in -10.0f64..10.0) {
        let m = p.magnitude();
        prop_assert!((p.rotate(theta).magnitude() - m).abs() <= 1e-12 * m.max(1.0));
    }

    #[test]
    fn scaling_scales_magnitude(p in point(), f in -50.0f64..50.0) {
        let want = f.abs() * p.magnitude();
        prop_assert!((p.times(f).magnitude() - want).abs() <= 1e-12 * want.max(1.0));
    }

    #[test]
    fn normalized_has_unit_length(p in nonzero_point()) {
        prop_assert!((p.normalize().magnitude() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn self_intersection_is_identity(o in interval()) {
        prop_assert_eq!(o.intersection(&o), o);
    }

    #[test]
    fn intersection_commutes(a in interval(), b in interval()) {
        prop_assert_eq!(a.intersection(&b), b.intersection(&a));
    }

    #[test]
    fn intersection_lies_in_both(a in interval(), b in interval()) {
        if let Some((lo, hi)) = a.intersection(&b).bounds() {
            prop_assert!(a.contains(lo) && a.contains(hi));
            prop_assert!(b.contains(lo) && b.contains(hi));
        }
    }

    #[test]
    fn segment_intersects_itself(l in segment()) {
        prop_assert!(l.intersects(l));
        prop_assert!(l.intersects(l.reversed()));
    }

    #[test]
    fn segments_through_a_common_point_intersect(
        c in point(),
        a1 in 0.0f64..TAU,
        turn in 0.2f64..(std::f64::consts::PI - 0.2),
        r in prop::array::uniform4(0.1f64..100.0),
    ) {
        let a2 = a1 + turn;
        let d1 = Point::new(a1.cos(), a1.sin());
        let d2 = Point::new(a2.cos(), a2.sin());
        let l1 = LineSegment::new(c - d1 * r[0], c + d1 * r[1]);
        let l2 = LineSegment::new(c - d2 * r[2], c + d2 * r[3]);
        prop_assert!(l1.intersects(l2));
        prop_assert!(l2.intersects(l1));
    }

    #[test]
    fn segments_in_separated_strips_do_not_intersect(
        ys in prop::array::uniform4(coord()),
        xs in prop::array::uniform4(0.0f64..1.0e3),
    ) {
        let l1 = LineSegment::from_coords(-1.0 - xs[0], ys[0], -1.0 - xs[1], ys[1]);
        let l2 = LineSegment::from_coords(1.0 + xs[2], ys[2], 1.0 + xs[3], ys[3]);
        prop_assert!(!l1.intersects(l2));
        prop_assert!(!l2.intersects(l1));
    }

    #[test]
    fn shared_endpoint_counts(a in point(), b in point(), c in point()) {
        prop_assume!((a - b).magnitude() > 1e-3 && (c - b).magnitude() > 1e-3);
        prop_assert!(LineSegment::new(a, b).intersects(LineSegment::new(b, c)));
    }

    #[test]
    fn triangle_equality_ignores_order(a in point(), b in point(), c in point()) {
        let t = Triangle::new(a, b, c);
        for u in [
            Triangle::new(a, c, b),
            Triangle::new(b, a, c),
            Triangle::new(b, c, a),
            Triangle::new(c, a, b),
            Triangle::new(c, b, a),
        ] {
            prop_assert_eq!(t, u);
            prop_assert!((t.area() - u.area()).abs() < 1e-6);
        }
    }
}

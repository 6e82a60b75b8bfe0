//! Fillet construction: radius clamping and tangent geometry.
//!
//! A fillet replaces a sharp corner with a circular arc tangent to both
//! adjacent edges. For a corner with interior angle `theta` and radius `r`:
//! - the arc touches each edge at distance `d = r / tan(theta/2)` from the
//!   vertex;
//! - the arc center sits on the interior angle bisector at distance
//!   `r / sin(theta/2)` from the vertex.
//!
//! The radius is clamped so that no tangent point is offset past the far
//! end of its edge.

use std::f64::consts::PI;

use crate::types::{Fillet, Point, RoundedTriangle, Scalar, TriangleSpec, Vec2};

// ---------------------------------------------------------------------------
// Radius clamp
// ---------------------------------------------------------------------------

/// Largest fillet radius for which every tangent point stays on its edge.
///
/// At a base corner the tangent distance `r / tan(base_angle/2)` is limited
/// by the shorter of the base (`2a`) and the lateral edge (`L`); at the
/// apex it is limited by `L`. Returns 0 for degenerate dimensions.
#[must_use]
pub fn max_radius(a: Scalar, h: Scalar) -> Scalar {
    if a <= 0.0 || h <= 0.0 || !a.is_finite() || !h.is_finite() {
        return 0.0;
    }
    let lateral = a.hypot(h);
    let apex_angle = 2.0 * a.atan2(h);
    let base_angle = (PI - apex_angle) / 2.0;

    let base_limit = (base_angle / 2.0).tan() * (2.0 * a).min(lateral);
    let apex_limit = (apex_angle / 2.0).tan() * lateral;
    base_limit.min(apex_limit)
}

/// Clamp a requested corner radius to `[0, max_radius(a, h)]`.
#[must_use]
pub fn clamp_radius(a: Scalar, h: Scalar, r: Scalar) -> Scalar {
    let max = max_radius(a, h);
    if max <= 0.0 {
        return 0.0;
    }
    r.clamp(0.0, max)
}

// ---------------------------------------------------------------------------
// Tangent geometry
// ---------------------------------------------------------------------------

/// Reflect a point across the symmetry axis x = 0.
///
/// Negation is exact, so the two sides of the triangle stay bit-for-bit
/// symmetric.
#[inline]
fn mirror_x(p: Point) -> Point {
    Point::new(-p.x, p.y)
}

/// Compute the three fillets for `spec`, clamping the radius first.
///
/// Tangent points and centers follow the corner construction described in
/// the module docs. The outline orientation (for [`Fillet`] entry/exit
/// semantics) is A -> B -> C -> A.
#[must_use]
pub fn rounded_triangle(spec: &TriangleSpec) -> RoundedTriangle {
    let a = spec.a();
    let h = spec.h();
    let lateral = spec.lateral_len();
    let base_angle = spec.base_angle();
    let apex_angle = spec.apex_angle();
    let radius = clamp_radius(a, h, spec.r());

    let base_half = base_angle / 2.0;
    let apex_half = apex_angle / 2.0;
    let base_offset = radius / base_half.tan();
    let apex_offset = radius / apex_half.tan();

    // Unit direction along the lateral edge from A toward C.
    let u = Vec2::new(a / lateral, h / lateral);

    let a_v = spec.a_vertex();
    let c_v = spec.c_vertex();

    // Left base corner: entered from the lateral edge CA, exited onto the
    // base edge AB. Its bisector splits the angle between +x and u.
    let bis = Vec2::new(1.0 + u.x, u.y);
    let bis = bis / bis.length();
    let left = Fillet {
        vertex: a_v,
        entry: a_v + u * base_offset,
        exit: Point::new(-a + base_offset, 0.0),
        center: a_v + bis * (radius / base_half.sin()),
    };

    // Right base corner is the mirror image; entry and exit swap because
    // the outline passes through it in the opposite edge order.
    let right = Fillet {
        vertex: mirror_x(a_v),
        entry: mirror_x(left.exit),
        exit: mirror_x(left.entry),
        center: mirror_x(left.center),
    };

    // Apex corner: entered from the lateral edge BC, exited onto CA. Its
    // bisector runs along the symmetry axis toward the base.
    let toward_b = Vec2::new(u.x, -u.y);
    let entry = c_v + toward_b * apex_offset;
    let apex = Fillet {
        vertex: c_v,
        entry,
        exit: mirror_x(entry),
        center: Point::new(0.0, h - radius / apex_half.sin()),
    };

    RoundedTriangle {
        left,
        right,
        apex,
        radius,
        base_offset,
        apex_offset,
        base_angle,
        apex_angle,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::types::EPSILON;

    fn spec(a: Scalar, h: Scalar, r: Scalar) -> TriangleSpec {
        TriangleSpec::new(a, h, r).expect("valid spec")
    }

    fn dist(p: Point, q: Point) -> Scalar {
        (p - q).length()
    }

    // -- clamp_radius --

    #[test]
    fn clamp_keeps_small_radius() {
        assert_eq!(clamp_radius(96.0, 100.0, 12.0), 12.0);
    }

    #[test]
    fn clamp_zero_radius() {
        assert_eq!(clamp_radius(96.0, 100.0, 0.0), 0.0);
    }

    #[test]
    fn clamp_oversized_radius() {
        // For a = h = 10 the binding limit is the lateral edge:
        // tan(pi/8) * hypot(10, 10).
        let clamped = clamp_radius(10.0, 10.0, 1000.0);
        assert!(
            (clamped - 5.857_864_376_269_05).abs() < EPSILON,
            "clamped = {clamped}"
        );
    }

    #[test]
    fn clamp_degenerate_dimensions() {
        assert_eq!(clamp_radius(0.0, 10.0, 5.0), 0.0);
        assert_eq!(clamp_radius(10.0, 0.0, 5.0), 0.0);
        assert_eq!(clamp_radius(-3.0, 10.0, 5.0), 0.0);
        assert_eq!(clamp_radius(Scalar::NAN, 10.0, 5.0), 0.0);
        assert_eq!(clamp_radius(Scalar::INFINITY, 10.0, 5.0), 0.0);
    }

    #[test]
    fn clamp_is_idempotent() {
        for r in [0.0, 5.0, 12.0, 100.0, 1e6] {
            let once = clamp_radius(96.0, 100.0, r);
            assert_eq!(clamp_radius(96.0, 100.0, once), once, "r = {r}");
        }
    }

    #[test]
    fn clamp_is_monotone() {
        let radii = [0.0, 1.0, 10.0, 50.0, 59.0, 60.0, 1000.0];
        for pair in radii.windows(2) {
            let lo = clamp_radius(96.0, 100.0, pair[0]);
            let hi = clamp_radius(96.0, 100.0, pair[1]);
            assert!(lo <= hi, "clamp not monotone at {pair:?}");
        }
    }

    #[test]
    fn max_radius_golden_value() {
        let max = max_radius(96.0, 100.0);
        assert!(
            (max - 59.083_083_895_064_66).abs() < EPSILON,
            "max = {max}"
        );
    }

    // -- rounded_triangle --

    #[test]
    fn golden_offsets_and_angles() {
        let tri = rounded_triangle(&spec(96.0, 100.0, 12.0));
        assert_eq!(tri.radius, 12.0);
        assert!(
            (tri.base_offset - 28.154_614_513_116_92).abs() < EPSILON,
            "base offset: {}",
            tri.base_offset
        );
        assert!(
            (tri.apex_offset - 12.5).abs() < EPSILON,
            "apex offset: {}",
            tri.apex_offset
        );
        assert!((tri.base_angle - 0.805_803_494_083_986_3).abs() < EPSILON);
        assert!((tri.apex_angle - 1.529_985_665_421_820_5).abs() < EPSILON);
    }

    #[test]
    fn golden_tangent_points() {
        let tri = rounded_triangle(&spec(96.0, 100.0, 12.0));
        let cases = [
            (tri.left.exit, (-67.845_385, 0.0), "left exit"),
            (tri.left.entry, (-76.502_033, 20.310_382), "left entry"),
            (tri.right.entry, (67.845_385, 0.0), "right entry"),
            (tri.right.exit, (76.502_033, 20.310_382), "right exit"),
            (tri.apex.entry, (8.656_648, 90.982_658), "apex entry"),
            (tri.apex.exit, (-8.656_648, 90.982_658), "apex exit"),
        ];
        for (got, (x, y), label) in cases {
            assert!(
                (got.x - x).abs() < 1e-6 && (got.y - y).abs() < 1e-6,
                "{label}: got {got:?}, expected ({x}, {y})"
            );
        }
    }

    #[test]
    fn golden_centers() {
        let tri = rounded_triangle(&spec(96.0, 100.0, 12.0));
        assert!((tri.left.center.x - -67.845_385_486_883).abs() < EPSILON);
        assert!((tri.left.center.y - 12.0).abs() < EPSILON);
        assert!((tri.apex.center.y - 82.672_276_548_836_55).abs() < EPSILON);
    }

    #[test]
    fn centers_are_equidistant_from_tangent_points() {
        for (a, h, r) in [(96.0, 100.0, 12.0), (50.0, 86.6, 10.0), (10.0, 10.0, 1000.0)] {
            let tri = rounded_triangle(&spec(a, h, r));
            for (fillet, label) in [
                (&tri.left, "left"),
                (&tri.right, "right"),
                (&tri.apex, "apex"),
            ] {
                let d_entry = dist(fillet.center, fillet.entry);
                let d_exit = dist(fillet.center, fillet.exit);
                assert!(
                    (d_entry - tri.radius).abs() < EPSILON,
                    "{label} entry distance {d_entry} vs radius {} (a={a}, h={h}, r={r})",
                    tri.radius
                );
                assert!(
                    (d_exit - tri.radius).abs() < EPSILON,
                    "{label} exit distance {d_exit} vs radius {} (a={a}, h={h}, r={r})",
                    tri.radius
                );
            }
        }
    }

    #[test]
    fn mirror_symmetry_is_exact() {
        let tri = rounded_triangle(&spec(96.0, 100.0, 12.0));
        assert_eq!(tri.right.entry.x, -tri.left.exit.x);
        assert_eq!(tri.right.exit.x, -tri.left.entry.x);
        assert_eq!(tri.right.center.x, -tri.left.center.x);
        assert_eq!(tri.right.center.y, tri.left.center.y);
        assert_eq!(tri.apex.exit.x, -tri.apex.entry.x);
        assert_eq!(tri.apex.exit.y, tri.apex.entry.y);
        assert_eq!(tri.apex.center.x, 0.0);
    }

    #[test]
    fn zero_radius_collapses_to_vertices() {
        let tri = rounded_triangle(&spec(96.0, 100.0, 0.0));
        assert_eq!(tri.radius, 0.0);
        assert_eq!(tri.base_offset, 0.0);
        assert_eq!(tri.apex_offset, 0.0);
        for fillet in [&tri.left, &tri.right, &tri.apex] {
            assert_eq!(fillet.entry, fillet.vertex);
            assert_eq!(fillet.exit, fillet.vertex);
            assert_eq!(fillet.center, fillet.vertex);
        }
    }

    #[test]
    fn all_coordinates_finite_for_extreme_inputs() {
        for (a, h, r) in [
            (0.001, 100.0, 5.0),
            (100.0, 0.001, 5.0),
            (10.0, 10.0, 1e9),
            (1e-6, 1e-6, 1.0),
        ] {
            let tri = rounded_triangle(&spec(a, h, r));
            for fillet in [&tri.left, &tri.right, &tri.apex] {
                for p in [fillet.vertex, fillet.entry, fillet.exit, fillet.center] {
                    assert!(
                        p.x.is_finite() && p.y.is_finite(),
                        "non-finite point {p:?} for a={a}, h={h}, r={r}"
                    );
                }
            }
        }
    }

    #[test]
    fn offsets_stay_within_edge_bounds() {
        for (a, h, r) in [
            (96.0, 100.0, 1e6),
            (0.001, 100.0, 5.0),
            (100.0, 0.001, 5.0),
            (10.0, 10.0, 1000.0),
        ] {
            let s = spec(a, h, r);
            let tri = rounded_triangle(&s);
            let lateral = s.lateral_len();
            assert!(
                tri.base_offset <= (2.0 * a).min(lateral) + EPSILON,
                "base offset {} exceeds edges (a={a}, h={h}, r={r})",
                tri.base_offset
            );
            assert!(
                tri.apex_offset <= lateral + EPSILON,
                "apex offset {} exceeds lateral edge (a={a}, h={h}, r={r})",
                tri.apex_offset
            );
        }
    }

    #[test]
    fn entry_points_lie_on_their_edges() {
        let s = spec(96.0, 100.0, 12.0);
        let tri = rounded_triangle(&s);
        let u = Vec2::new(s.a() / s.lateral_len(), s.h() / s.lateral_len());

        // left.entry sits on CA: collinear with u from A.
        let v = tri.left.entry - s.a_vertex();
        assert!(v.cross(u).abs() < EPSILON, "left entry off edge: {v:?}");

        // apex.entry sits on BC: collinear with C -> B.
        let w = tri.apex.entry - s.c_vertex();
        let cb = s.b_vertex() - s.c_vertex();
        assert!(
            w.cross(cb).abs() < 1e-6,
            "apex entry off edge: cross = {}",
            w.cross(cb)
        );

        // Base tangent points sit on the base line.
        assert_eq!(tri.left.exit.y, 0.0);
        assert_eq!(tri.right.entry.y, 0.0);
    }
}

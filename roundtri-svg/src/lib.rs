//! SVG output for rounded triangles: path data strings and full documents.
//!
//! Key design points:
//! - The geometry is computed in SVG screen coordinates (y pointing
//!   **down**), so path data can be embedded as-is. [`YAxis::Up`] emits the
//!   same coordinates but inverts every arc sweep flag, for callers that
//!   mirror the geometry into a y-up frame themselves.
//! - Path data is built as raw `d` strings to preserve `f64` precision
//!   (the `svg` crate's `Data` builder uses `f32`).
//! - Sweep flags are resolved per corner from the cross product of the
//!   center-to-endpoint vectors, never hard-coded.
//! - Coordinates are written with at most [`PATH_PRECISION`] decimals,
//!   trailing zeros stripped and negative zero normalized, so equal inputs
//!   produce byte-identical output across platforms.

use svg::Document;

use roundtri_geometry::fillet::rounded_triangle;
use roundtri_geometry::types::{Point, RoundedTriangle, Scalar, TriangleSpec};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Decimal places used for path coordinates.
pub const PATH_PRECISION: usize = 3;

/// Vertical axis orientation of the frame the path will be used in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YAxis {
    /// SVG screen coordinates: y grows downward.
    #[default]
    Down,
    /// Mathematical coordinates: y grows upward. Coordinates are emitted
    /// unchanged; the sweep flags account for the caller's vertical flip.
    Up,
}

/// Compute the rounded-corner geometry for `spec` and serialize its
/// outline.
///
/// Returns the path data string together with the geometry, so callers can
/// report tangent points and the clamped radius without recomputing.
#[must_use]
pub fn rounded_triangle_path(spec: &TriangleSpec, axis: YAxis) -> (String, RoundedTriangle) {
    let tri = rounded_triangle(spec);
    let d = path_data(&tri, axis, PATH_PRECISION);
    (d, tri)
}

/// A ready-to-embed `<path>` element carrying only the outline.
#[must_use]
pub fn snippet(spec: &TriangleSpec, axis: YAxis) -> String {
    let (d, _) = rounded_triangle_path(spec, axis);
    format!("<path fill=\"currentColor\" d=\"{d}\"/>")
}

/// Options controlling SVG document output.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Extra margin around the triangle's bounds (in user units).
    /// Default: 1.0.
    pub margin: Scalar,
    /// Number of decimal places for coordinates. Default: 3.
    pub precision: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            margin: 1.0,
            precision: PATH_PRECISION,
        }
    }
}

/// Render the rounded triangle for `spec` to a standalone SVG [`Document`].
///
/// Documents are always emitted in screen coordinates so they display
/// correctly as-is; use [`rounded_triangle_path`] with [`YAxis::Up`] when
/// embedding into a flipped frame.
#[must_use]
pub fn render(spec: &TriangleSpec) -> Document {
    render_with_options(spec, &RenderOptions::default())
}

/// Render to an SVG string.
#[must_use]
pub fn render_to_string(spec: &TriangleSpec) -> String {
    render(spec).to_string()
}

/// Render with custom options.
#[must_use]
pub fn render_with_options(spec: &TriangleSpec, opts: &RenderOptions) -> Document {
    let tri = rounded_triangle(spec);
    let d = path_data(&tri, YAxis::Down, opts.precision);
    build_document(spec, opts, &d)
}

// ---------------------------------------------------------------------------
// Sweep resolution
// ---------------------------------------------------------------------------

/// Resolve the SVG `sweep-flag` for the short arc from `start` to `end`
/// around `center`.
///
/// The sign of the 2D cross product of the center-to-endpoint vectors
/// decides the turn direction: positive means counter-clockwise in y-up
/// math coordinates, which on a y-down screen is clockwise, i.e. SVG
/// sweep 1. [`YAxis::Up`] gives the inverted answer.
#[must_use]
pub fn arc_sweep_flag(start: Point, end: Point, center: Point, axis: YAxis) -> u8 {
    let v1 = start - center;
    let v2 = end - center;
    let cross = v1.cross(v2);
    match axis {
        YAxis::Down => u8::from(cross > 0.0),
        YAxis::Up => u8::from(cross <= 0.0),
    }
}

// ---------------------------------------------------------------------------
// Path data
// ---------------------------------------------------------------------------

/// Serialize the rounded-triangle outline as an SVG path data string.
///
/// Command order: move to the left base tangent point, line along the
/// base, arc around B, line up the right edge, arc around the apex, line
/// down the left edge, arc around A, close. Arcs are circular
/// (`rx = ry`), with x-axis-rotation and large-arc-flag always 0.
#[must_use]
pub fn path_data(tri: &RoundedTriangle, axis: YAxis, precision: usize) -> String {
    use std::fmt::Write;

    let radius = fmt_coord(tri.radius, precision);
    let mut d = String::with_capacity(160);

    d.push_str("M ");
    push_point(&mut d, tri.left.exit, precision);

    for fillet in [&tri.right, &tri.apex, &tri.left] {
        d.push_str(" L ");
        push_point(&mut d, fillet.entry, precision);
        let flag = arc_sweep_flag(fillet.entry, fillet.exit, fillet.center, axis);
        let _ = write!(d, " A {radius} {radius} 0 0 {flag} ");
        push_point(&mut d, fillet.exit, precision);
    }

    d.push_str(" Z");
    d
}

/// Format a coordinate with at most `precision` decimals.
///
/// Trailing zeros are stripped (then a trailing dot), and negative zero is
/// normalized to `0`.
#[must_use]
pub fn fmt_coord(v: Scalar, precision: usize) -> String {
    let s = format!("{v:.precision$}");
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    if s == "-0" {
        "0".to_owned()
    } else {
        s.to_owned()
    }
}

/// Write "x y" to the string with the given precision.
fn push_point(d: &mut String, p: Point, precision: usize) {
    d.push_str(&fmt_coord(p.x, precision));
    d.push(' ');
    d.push_str(&fmt_coord(p.y, precision));
}

// ---------------------------------------------------------------------------
// Document assembly
// ---------------------------------------------------------------------------

/// Build the final SVG [`Document`] around a path data string.
///
/// The `viewBox` spans the sharp triangle's bounds plus the margin on
/// every side. Fillets only pull the outline inward, so the sharp bounds
/// are a conservative hull of the rounded shape.
fn build_document(spec: &TriangleSpec, opts: &RenderOptions, d: &str) -> Document {
    let m = opts.margin;
    let p = opts.precision;

    let vb_x = -spec.a() - m;
    let vb_y = -m;
    let vb_w = 2.0f64.mul_add(m, 2.0 * spec.a());
    let vb_h = 2.0f64.mul_add(m, spec.h());

    Document::new()
        .set("xmlns", "http://www.w3.org/2000/svg")
        .set(
            "viewBox",
            format!(
                "{} {} {} {}",
                fmt_coord(vb_x, p),
                fmt_coord(vb_y, p),
                fmt_coord(vb_w, p),
                fmt_coord(vb_h, p),
            ),
        )
        .set("width", format!("{}pt", fmt_coord(vb_w, p)))
        .set("height", format!("{}pt", fmt_coord(vb_h, p)))
        .add(
            svg::node::element::Path::new()
                .set("fill", "currentColor")
                .set("d", d),
        )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Core types for rounded-triangle geometry.
//!
//! The coordinate frame is SVG-like: y grows **downward**. The triangle is
//! isosceles with its base on the x axis and the apex below it:
//!
//! ```text
//!   A(-a, 0) ---------- B(a, 0)
//!           \          /
//!            \        /
//!             C(0, h)
//! ```

use crate::error::GeometryError;
use crate::fillet;

// Re-export the kurbo vocabulary used throughout the workspace.
pub use kurbo::{Point, Vec2};

// ---------------------------------------------------------------------------
// Scalar
// ---------------------------------------------------------------------------

/// Convenience alias for coordinate arithmetic.
pub type Scalar = f64;

/// Tolerance for floating-point comparisons.
pub const EPSILON: Scalar = 1e-9;

// ---------------------------------------------------------------------------
// TriangleSpec
// ---------------------------------------------------------------------------

/// Validated input dimensions for a rounded isosceles triangle.
///
/// Construct via [`TriangleSpec::new`], which rejects non-positive or
/// non-finite dimensions up front. Everything downstream can then assume
/// the geometry is well formed and stay panic- and NaN-free.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleSpec {
    a: Scalar,
    h: Scalar,
    r: Scalar,
}

impl TriangleSpec {
    /// Create a spec from base half-width `a`, height `h`, and corner
    /// radius `r`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidDimension`] if `a` or `h` is not a
    /// positive finite number, or if `r` is negative or not finite. A zero
    /// radius is valid and produces sharp corners.
    pub fn new(a: Scalar, h: Scalar, r: Scalar) -> Result<Self, GeometryError> {
        if a <= 0.0 || !a.is_finite() {
            return Err(GeometryError::InvalidDimension(
                "base half-width must be positive and finite",
            ));
        }
        if h <= 0.0 || !h.is_finite() {
            return Err(GeometryError::InvalidDimension(
                "height must be positive and finite",
            ));
        }
        if r < 0.0 || !r.is_finite() {
            return Err(GeometryError::InvalidDimension(
                "corner radius must be non-negative and finite",
            ));
        }
        Ok(Self { a, h, r })
    }

    /// Base half-width.
    #[must_use]
    pub const fn a(&self) -> Scalar {
        self.a
    }

    /// Height (apex distance from the base).
    #[must_use]
    pub const fn h(&self) -> Scalar {
        self.h
    }

    /// Requested corner radius, before clamping.
    #[must_use]
    pub const fn r(&self) -> Scalar {
        self.r
    }

    /// Left base vertex `(-a, 0)`.
    #[must_use]
    pub const fn a_vertex(&self) -> Point {
        Point::new(-self.a, 0.0)
    }

    /// Right base vertex `(a, 0)`.
    #[must_use]
    pub const fn b_vertex(&self) -> Point {
        Point::new(self.a, 0.0)
    }

    /// Apex vertex `(0, h)`.
    #[must_use]
    pub const fn c_vertex(&self) -> Point {
        Point::new(0.0, self.h)
    }

    /// Length of each lateral edge, `hypot(a, h)`.
    #[must_use]
    pub fn lateral_len(&self) -> Scalar {
        self.a.hypot(self.h)
    }

    /// Full interior angle at the apex, `2 * atan2(a, h)`, in radians.
    #[must_use]
    pub fn apex_angle(&self) -> Scalar {
        2.0 * self.a.atan2(self.h)
    }

    /// Full interior angle at each base vertex, in radians.
    ///
    /// The three interior angles sum to pi and the two base angles are
    /// equal, so this is `(pi - apex_angle) / 2`.
    #[must_use]
    pub fn base_angle(&self) -> Scalar {
        (std::f64::consts::PI - self.apex_angle()) / 2.0
    }

    /// Largest corner radius this triangle can accommodate.
    #[must_use]
    pub fn max_radius(&self) -> Scalar {
        fillet::max_radius(self.a, self.h)
    }
}

// ---------------------------------------------------------------------------
// Fillet
// ---------------------------------------------------------------------------

/// One rounded corner: the original vertex, the two tangent points where
/// the arc meets the adjacent edges, and the arc center.
///
/// `entry` and `exit` are oriented by the outline walk A -> B -> C -> A:
/// the arc is entered from the incoming edge at `entry` and rejoins the
/// outgoing edge at `exit`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fillet {
    /// The sharp vertex this fillet replaces.
    pub vertex: Point,
    /// Tangent point on the incoming edge.
    pub entry: Point,
    /// Tangent point on the outgoing edge.
    pub exit: Point,
    /// Center of the fillet arc, on the interior angle bisector.
    pub center: Point,
}

// ---------------------------------------------------------------------------
// RoundedTriangle
// ---------------------------------------------------------------------------

/// Complete rounded-corner geometry for one triangle.
///
/// Produced by [`fillet::rounded_triangle`]. All coordinates are y-down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedTriangle {
    /// Fillet at the left base vertex `A(-a, 0)`.
    pub left: Fillet,
    /// Fillet at the right base vertex `B(a, 0)`.
    pub right: Fillet,
    /// Fillet at the apex `C(0, h)`.
    pub apex: Fillet,
    /// Radius actually used, after clamping.
    pub radius: Scalar,
    /// Tangent distance from each base vertex along its edges.
    pub base_offset: Scalar,
    /// Tangent distance from the apex along the lateral edges.
    pub apex_offset: Scalar,
    /// Full interior angle at each base vertex, in radians.
    pub base_angle: Scalar,
    /// Full interior angle at the apex, in radians.
    pub apex_angle: Scalar,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

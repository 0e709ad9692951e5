//! Basic 2D types: points, axis ranges, bounding boxes, segments.
//!
//! - `Range1`: closed interval `[min, max]` on one axis.
//! - `BBox2`: one `Range1` per axis.
//! - `Seg2`: segment between two points with the proximity helpers used by
//!   `EnclosedShape::is_closer_than`.

use nalgebra::Vector2;

/// Position or displacement in the plane.
pub type Point = Vector2<f64>;

/// Closed interval on one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range1 {
    pub min: f64,
    pub max: f64,
}

impl Range1 {
    #[inline]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
    /// Extent `max - min`.
    #[inline]
    pub fn extent(&self) -> f64 {
        self.max - self.min
    }
    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        self.min <= v && v <= self.max
    }
    #[inline]
    fn include(&mut self, v: f64) {
        self.min = self.min.min(v);
        self.max = self.max.max(v);
    }
}

/// Axis-aligned bounding box: per-axis min/max.
///
/// Invariants
/// - Built from a non-empty path, so `min <= max` on both axes for finite input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox2 {
    pub x: Range1,
    pub y: Range1,
}

impl BBox2 {
    /// Degenerate box holding a single point.
    #[inline]
    pub fn from_point(p: Point) -> Self {
        Self {
            x: Range1::new(p.x, p.x),
            y: Range1::new(p.y, p.y),
        }
    }

    /// Grow the box so it contains `p`.
    #[inline]
    pub fn include(&mut self, p: Point) {
        self.x.include(p.x);
        self.y.include(p.y);
    }

    /// Per-axis extent.
    #[inline]
    pub fn size(&self) -> Vector2<f64> {
        Vector2::new(self.x.extent(), self.y.extent())
    }

    #[inline]
    pub fn center(&self) -> Point {
        Vector2::new(
            0.5 * (self.x.min + self.x.max),
            0.5 * (self.y.min + self.y.max),
        )
    }

    /// Closed-interval membership on both axes.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.x.contains(p.x) && self.y.contains(p.y)
    }
}

/// Segment between `a` and `b` (an edge of a path).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Seg2 {
    pub a: Point,
    pub b: Point,
}

impl Seg2 {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// True when both endpoints coincide exactly.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a.x == self.b.x && self.a.y == self.b.y
    }

    /// Closest point of the segment to `p` (projection clamped to `[0, 1]`).
    pub fn closest_point(&self, p: Point) -> Point {
        if self.is_degenerate() {
            return self.a;
        }
        let ab = self.b - self.a;
        let t = (p - self.a).dot(&ab) / ab.norm_squared();
        self.a + ab * t.clamp(0.0, 1.0)
    }

    /// Cheap axis-aligned rejection for the threshold test.
    ///
    /// Returns false only if both endpoints lie strictly outside `p ± d` on the
    /// same side of one axis; such a segment cannot come within `d` of `p`.
    #[inline]
    pub fn may_be_closer_than(&self, p: Point, d: f64) -> bool {
        let (a, b) = (self.a, self.b);
        !(a.x < p.x - d && b.x < p.x - d)
            && !(a.x > p.x + d && b.x > p.x + d)
            && !(a.y < p.y - d && b.y < p.y - d)
            && !(a.y > p.y + d && b.y > p.y + d)
    }
}

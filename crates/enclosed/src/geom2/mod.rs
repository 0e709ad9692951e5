//! 2D geometry primitives over point paths.
//!
//! Purpose
//! - Stateless building blocks for `shape::EnclosedShape`: bounding-box
//!   reduction, squared distances, and the point-to-segment threshold test.
//! - Everything works on `&[Point]` so callers can feed any path, closed or not.
//!
//! Conventions
//! - A path is an ordered sequence of points. Edges are consecutive pairs;
//!   closure (first == last) is the caller's responsibility.
//! - Comparisons are exact. Distance thresholds are strict (`<`).
//!
//! Code cross-refs: `BBox2`, `Seg2`, `path_bounding_box`,
//! `is_point_segment_closer_than`

mod types;
mod util;

pub use types::{BBox2, Point, Range1, Seg2};
pub use util::{edges, is_point_segment_closer_than, path_bounding_box, points_distance2};

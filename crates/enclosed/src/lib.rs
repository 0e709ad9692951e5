//! Enclosed 2D shapes: closed polygon paths with bounding boxes, membership
//! and proximity queries, and in-place affine transforms.
//!
//! Layout
//! - `geom2`: stateless primitives (bounding box, squared distance, segment
//!   proximity) over plain point slices.
//! - `shape`: `EnclosedShape`, which owns an original and a current path and
//!   keeps the cached bounding box in sync with every transform.
//!
//! Coordinates are `f64` and y points up (positive angles rotate
//! counterclockwise). Tolerances are the caller's business.

pub mod geom2;
pub mod shape;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{BBox2, Point, Range1, Seg2};
pub use nalgebra::Vector2 as Vec2;
pub use shape::{EnclosedShape, ShapeError, TargetSize};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{
        edges, is_point_segment_closer_than, path_bounding_box, points_distance2, BBox2, Point,
        Range1, Seg2,
    };
    pub use crate::shape::{EnclosedShape, ShapeError, TargetSize};
    pub use nalgebra::Vector2 as Vec2;
}

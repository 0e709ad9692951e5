//! Enclosed shapes: a closed path plus its cached bounding box.
//!
//! Purpose
//! - `EnclosedShape` keeps the path supplied at construction (closed, never
//!   mutated again) next to a current path that transforms rewrite in place.
//! - Queries (`is_inside`, `is_closer_than`) read the current path only.
//!
//! Invariants
//! - Both paths are closed: first point == last point (exact coordinates).
//!   An open input path gets its first point appended.
//! - `bounding_box()` always equals `path_bounding_box(path())`; every
//!   mutation goes through `refresh_bbox`.
//! - `reset` copies the original path; later transforms never reach it.
//!
//! Chaining
//! - Transforms take `&mut self` and return `&mut Self`. `scale_to`/`scale_by`
//!   return `Result<&mut Self, ShapeError>` and leave the shape untouched on
//!   error.
//!
//! Code cross-refs: `geom2::{path_bounding_box, is_point_segment_closer_than}`

mod error;
mod query;
mod transform;

pub use error::ShapeError;
pub use transform::TargetSize;

use nalgebra::Vector2;
use tracing::debug;

use crate::geom2::{edges, path_bounding_box, BBox2, Point, Seg2};

/// Closed 2D polygon with an immutable original and a transformable current path.
#[derive(Clone, Debug)]
pub struct EnclosedShape {
    original: Vec<Point>,
    path: Vec<Point>,
    bbox: BBox2,
}

impl EnclosedShape {
    /// Build a shape from `path`, closing it if first and last points differ.
    ///
    /// Rejects empty paths and non-finite coordinates.
    pub fn new(path: &[Point]) -> Result<Self, ShapeError> {
        let (first, last) = match (path.first(), path.last()) {
            (Some(f), Some(l)) => (*f, *l),
            _ => return Err(ShapeError::EmptyPath),
        };
        if let Some(index) = path
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(ShapeError::NonFinite { index });
        }
        let mut original = Vec::with_capacity(path.len() + 1);
        original.extend_from_slice(path);
        if first.x != last.x || first.y != last.y {
            debug!(points = path.len(), "closing open path");
            original.push(first);
        }
        let bbox = BBox2::from_point(first);
        let mut shape = Self {
            path: original.clone(),
            original,
            bbox,
        };
        shape.refresh_bbox();
        Ok(shape)
    }

    /// Convenience constructor from raw `[x, y]` pairs.
    pub fn from_coords(coords: &[[f64; 2]]) -> Result<Self, ShapeError> {
        let path: Vec<Point> = coords.iter().map(|c| Vector2::new(c[0], c[1])).collect();
        Self::new(&path)
    }

    /// Current (transformed) closed path.
    #[inline]
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Closed path as constructed, before any transform.
    #[inline]
    pub fn original_path(&self) -> &[Point] {
        &self.original
    }

    /// Bounding box of the current path.
    #[inline]
    pub fn bounding_box(&self) -> BBox2 {
        self.bbox
    }

    /// Number of points in the current path (closing point included).
    #[inline]
    pub fn point_count(&self) -> usize {
        self.path.len()
    }

    /// Edges of the current path; closure makes the last edge end at the first point.
    pub fn edges(&self) -> impl Iterator<Item = Seg2> + '_ {
        edges(&self.path)
    }

    /// Restore the current path to a fresh copy of the original.
    pub fn reset(&mut self) -> &mut Self {
        self.path.clone_from(&self.original);
        self.refresh_bbox();
        self
    }

    /// Recompute the cached box from the current path.
    fn refresh_bbox(&mut self) {
        // never empty: construction rejects empty paths and transforms map point-for-point
        if let Some(bbox) = path_bounding_box(&self.path) {
            self.bbox = bbox;
        }
    }
}

#[cfg(test)]
mod tests;

//! In-place affine transforms of the current path.
//!
//! All transforms map the current path point-for-point and then refresh the
//! cached bounding box. Scaling reads the box *before* the call.

use nalgebra::{Matrix2, Vector2};
use tracing::{debug, warn};

use crate::geom2::Point;

use super::{EnclosedShape, ShapeError};

/// Requested bounding-box size for `scale_to`; either axis may be left open.
///
/// An open axis reuses the scale factor computed for the other one, so
/// `TargetSize::width(w)` scales uniformly to width `w`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TargetSize {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl TargetSize {
    #[inline]
    pub fn new(x: Option<f64>, y: Option<f64>) -> Self {
        Self { x, y }
    }
    #[inline]
    pub fn both(width: f64, height: f64) -> Self {
        Self::new(Some(width), Some(height))
    }
    #[inline]
    pub fn width(width: f64) -> Self {
        Self::new(Some(width), None)
    }
    #[inline]
    pub fn height(height: f64) -> Self {
        Self::new(None, Some(height))
    }
}

impl From<Vector2<f64>> for TargetSize {
    fn from(v: Vector2<f64>) -> Self {
        Self::both(v.x, v.y)
    }
}

impl EnclosedShape {
    /// Scale anisotropically about `center` so the box gets the requested size.
    ///
    /// Per axis `k = target / current_extent` and `p' = (p - center)·k + center`.
    /// Errors leave the shape unchanged.
    pub fn scale_to(&mut self, center: Point, size: TargetSize) -> Result<&mut Self, ShapeError> {
        if size.x.is_none() && size.y.is_none() {
            warn!("scale_to without any target dimension");
            return Err(ShapeError::MissingTargetSize);
        }
        let current = self.bbox.size();
        let factor = |axis: usize, target: Option<f64>| -> Result<Option<f64>, ShapeError> {
            match target {
                None => Ok(None),
                Some(t) if !t.is_finite() => Err(ShapeError::NonFiniteTarget),
                Some(_) if current[axis] == 0.0 => Err(ShapeError::DegenerateExtent { axis }),
                Some(t) => Ok(Some(t / current[axis])),
            }
        };
        let k = match (factor(0, size.x), factor(1, size.y)) {
            (Ok(Some(kx)), Ok(Some(ky))) => Vector2::new(kx, ky),
            (Ok(Some(kx)), Ok(None)) => {
                debug!(k = kx, "height factor follows width");
                Vector2::new(kx, kx)
            }
            (Ok(None), Ok(Some(ky))) => {
                debug!(k = ky, "width factor follows height");
                Vector2::new(ky, ky)
            }
            (Err(err), _) | (_, Err(err)) => {
                warn!(%err, "scale_to rejected");
                return Err(err);
            }
            (Ok(None), Ok(None)) => return Err(ShapeError::MissingTargetSize),
        };
        Ok(self.map_points(|p| (p - center).component_mul(&k) + center))
    }

    /// Scale about `center` to `multiplier` times the current box extent.
    pub fn scale_by(
        &mut self,
        center: Point,
        multiplier: Vector2<f64>,
    ) -> Result<&mut Self, ShapeError> {
        if !(multiplier.x.is_finite() && multiplier.y.is_finite()) {
            warn!(?multiplier, "scale_by rejected");
            return Err(ShapeError::NonFiniteTarget);
        }
        let size = self.bbox.size().component_mul(&multiplier);
        self.scale_to(center, size.into())
    }

    /// Rotate about `center` by `angle` radians (counterclockwise, y up).
    pub fn rotate(&mut self, center: Point, angle: f64) -> &mut Self {
        let (s, c) = angle.sin_cos();
        let m = Matrix2::new(c, -s, s, c);
        self.map_points(|p| center + m * (p - center))
    }

    /// Translate by `target - center`; `center` is only a reference point.
    pub fn move_to(&mut self, center: Point, target: Point) -> &mut Self {
        let shift = target - center;
        self.map_points(|p| p + shift)
    }

    fn map_points<F: Fn(Point) -> Point>(&mut self, f: F) -> &mut Self {
        for p in self.path.iter_mut() {
            *p = f(*p);
        }
        self.refresh_bbox();
        self
    }
}

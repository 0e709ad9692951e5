use std::collections::HashMap;

use enclosed::{BBox2, Point, ShapeError, Vec2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// `(x, y)` tuple → point.
#[inline]
pub fn point(p: (f64, f64)) -> Point {
    Vec2::new(p.0, p.1)
}

pub fn points(path: Vec<(f64, f64)>) -> Vec<Point> {
    path.into_iter().map(point).collect()
}

pub fn tuples(path: &[Point]) -> Vec<(f64, f64)> {
    path.iter().map(|p| (p.x, p.y)).collect()
}

pub type PyRange = HashMap<&'static str, f64>;

/// Box as `({"min", "max"}, {"min", "max"})`, one dict per axis.
pub fn bbox_dicts(b: BBox2) -> (PyRange, PyRange) {
    let range = |min: f64, max: f64| HashMap::from([("min", min), ("max", max)]);
    (range(b.x.min, b.x.max), range(b.y.min, b.y.max))
}

pub fn map_shape_err(err: ShapeError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Proximity thresholds must be non-negative.
pub fn check_distance(distance: f64) -> PyResult<f64> {
    if distance >= 0.0 {
        Ok(distance)
    } else {
        Err(PyValueError::new_err(format!(
            "distance must be non-negative, got {distance}"
        )))
    }
}

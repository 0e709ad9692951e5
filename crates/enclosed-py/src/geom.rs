//! Free-function bindings for the geometry primitives.

use crate::common::{bbox_dicts, check_distance, point, points, PyRange};
use enclosed::geom2::{self, Seg2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

#[pyfunction]
pub fn path_bounding_box(path: Vec<(f64, f64)>) -> PyResult<(PyRange, PyRange)> {
    geom2::path_bounding_box(&points(path))
        .map(bbox_dicts)
        .ok_or_else(|| PyValueError::new_err("bounding box of an empty path is undefined"))
}

#[pyfunction]
pub fn points_distance2(a: (f64, f64), b: (f64, f64)) -> f64 {
    geom2::points_distance2(point(a), point(b))
}

#[pyfunction]
pub fn is_point_segment_closer_than(
    p: (f64, f64),
    segment: ((f64, f64), (f64, f64)),
    distance: f64,
) -> PyResult<bool> {
    let seg = Seg2::new(point(segment.0), point(segment.1));
    Ok(geom2::is_point_segment_closer_than(point(p), seg, check_distance(distance)?))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(path_bounding_box, m)?)?;
    m.add_function(wrap_pyfunction!(points_distance2, m)?)?;
    m.add_function(wrap_pyfunction!(is_point_segment_closer_than, m)?)?;
    Ok(())
}

//! `EnclosedShape` as a Python class. Transforms return the shape itself so
//! Python callers can chain (`shape.reset().move_to(c, t)`).

use crate::common::{bbox_dicts, check_distance, map_shape_err, point, points, tuples, PyRange};
use enclosed::{EnclosedShape, TargetSize};
use pyo3::prelude::*;

#[pyclass(name = "EnclosedShape", module = "enclosed_native")]
pub struct PyEnclosedShape {
    inner: EnclosedShape,
}

#[pymethods]
impl PyEnclosedShape {
    #[new]
    fn new(path: Vec<(f64, f64)>) -> PyResult<Self> {
        let inner = EnclosedShape::new(&points(path)).map_err(map_shape_err)?;
        Ok(Self { inner })
    }

    fn get_path(&self) -> Vec<(f64, f64)> {
        tuples(self.inner.path())
    }

    fn get_original_path(&self) -> Vec<(f64, f64)> {
        tuples(self.inner.original_path())
    }

    fn get_bounding_box(&self) -> (PyRange, PyRange) {
        bbox_dicts(self.inner.bounding_box())
    }

    fn is_inside(&self, p: (f64, f64)) -> bool {
        self.inner.is_inside(point(p))
    }

    fn is_closer_than(&self, p: (f64, f64), distance: f64) -> PyResult<bool> {
        Ok(self.inner.is_closer_than(point(p), check_distance(distance)?))
    }

    fn reset(mut slf: PyRefMut<'_, Self>) -> PyRefMut<'_, Self> {
        slf.inner.reset();
        slf
    }

    /// `size` is `(width, height)`; either may be `None`, not both.
    fn scale_to(
        mut slf: PyRefMut<'_, Self>,
        center: (f64, f64),
        size: (Option<f64>, Option<f64>),
    ) -> PyResult<PyRefMut<'_, Self>> {
        slf.inner
            .scale_to(point(center), TargetSize::new(size.0, size.1))
            .map_err(map_shape_err)?;
        Ok(slf)
    }

    fn scale_by(
        mut slf: PyRefMut<'_, Self>,
        center: (f64, f64),
        multiplier: (f64, f64),
    ) -> PyResult<PyRefMut<'_, Self>> {
        slf.inner
            .scale_by(point(center), point(multiplier))
            .map_err(map_shape_err)?;
        Ok(slf)
    }

    fn rotate(mut slf: PyRefMut<'_, Self>, center: (f64, f64), angle: f64) -> PyRefMut<'_, Self> {
        slf.inner.rotate(point(center), angle);
        slf
    }

    fn move_to(
        mut slf: PyRefMut<'_, Self>,
        center: (f64, f64),
        to: (f64, f64),
    ) -> PyRefMut<'_, Self> {
        slf.inner.move_to(point(center), point(to));
        slf
    }

    fn __len__(&self) -> usize {
        self.inner.point_count()
    }

    fn __repr__(&self) -> String {
        let b = self.inner.bounding_box();
        format!(
            "EnclosedShape(points={}, x=[{}, {}], y=[{}, {}])",
            self.inner.point_count(),
            b.x.min,
            b.x.max,
            b.y.min,
            b.y.max
        )
    }
}

//! PyO3 bindings for the `enclosed` crate.
//!
//! Notes
//! - Keep bindings thin: points cross the boundary as `(x, y)` tuples and
//!   bounding boxes as one `{"min", "max"}` dict per axis.
//! - `ShapeError` surfaces as `ValueError`.

use pyo3::prelude::*;

mod common;
mod geom;
mod shape;

#[pymodule]
fn enclosed_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<shape::PyEnclosedShape>()?;
    geom::register(m)?;
    m.add("__version__", enclosed::VERSION)?;
    Ok(())
}

//! PyO3 bindings for the `marksum` finder.
//!
//! Notes
//! - Keep bindings thin; Python receives plain lists of index lists.

use pyo3::prelude::*;

mod common;
mod finder;

#[pymodule]
fn marksum_native(_py: Python, m: &PyModule) -> PyResult<()> {
    finder::register(m)?;
    Ok(())
}

use marksum::finder::FinderError;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::PyErr;

/// Bad input raises `ValueError`; an internal defect raises `RuntimeError`.
pub fn map_finder_err(err: FinderError) -> PyErr {
    match err {
        FinderError::MissingMark { .. } => PyRuntimeError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

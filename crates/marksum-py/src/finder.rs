//! Combination finder bindings.

use crate::common::map_finder_err;
use marksum::finder::{find_combinations_with, FinderCfg};
use pyo3::prelude::*;

/// All ascending index lists whose values sum to `target`.
#[pyfunction]
#[pyo3(signature = (target, elements, max_combinations=None))]
pub fn find_combinations(
    target: i64,
    elements: Vec<i64>,
    max_combinations: Option<usize>,
) -> PyResult<Vec<Vec<usize>>> {
    let cfg = FinderCfg {
        max_combinations,
        ..FinderCfg::default()
    };
    find_combinations_with(target, &elements, cfg)
        .map(|found| found.combinations)
        .map_err(map_finder_err)
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(find_combinations, m)?)?;
    Ok(())
}

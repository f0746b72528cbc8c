//! Combination finder: all index subsets whose values sum to a target.
//!
//! Purpose
//! - Given a target and an ordered sequence of positive integers, return every
//!   combination of positions (each position used at most once) whose values
//!   sum exactly to the target. Equal values at different positions give
//!   distinct combinations.
//!
//! Algorithm
//! - `marks`: forward sweep building a reachability index over `1..=target`
//!   (a point is marked with the indices that directly reach it).
//! - `backtrace`: walk from the target mark back to 0, branching on every
//!   mark whose index is below the backtrace's smallest index.
//!
//! Input policy
//! - Negative targets and non-positive elements are rejected up front
//!   (`FinderError`). Elements above the target are accepted and inert.
//! - Target 0 follows `FinderCfg::zero_target`.
//!
//! Ordering
//! - Combinations are ascending index sequences, reported in discovery order
//!   (seed order at the target, then breadth-first extension). The mark map is
//!   ordered, so repeated calls return identical output.

mod backtrace;
mod marks;
pub mod reference;
mod types;

pub use backtrace::enumerate;
pub use marks::Marks;
pub use types::{Combination, Enumeration, FinderCfg, FinderError, ZeroTarget};

/// Find all combinations with the default configuration.
pub fn find_combinations(target: i64, elements: &[i64]) -> Result<Vec<Combination>, FinderError> {
    find_combinations_with(target, elements, FinderCfg::default()).map(|e| e.combinations)
}

/// Find combinations under `cfg` (target-0 policy, result cap).
pub fn find_combinations_with(
    target: i64,
    elements: &[i64],
    cfg: FinderCfg,
) -> Result<Enumeration, FinderError> {
    let (target, elements) = validate(target, elements)?;
    if target == 0 {
        let mut out = Enumeration::default();
        if cfg.zero_target == ZeroTarget::EmptyCombination {
            if cfg.max_combinations == Some(0) {
                out.truncated = true;
            } else {
                out.combinations.push(Vec::new());
            }
        }
        return Ok(out);
    }
    let marks = Marks::build(target, &elements);
    tracing::debug!(
        total = target,
        elements = elements.len(),
        points = marks.len(),
        reachable = marks.is_reachable(target),
        "marks built"
    );
    enumerate(&marks, &elements, cfg)
}

/// Check the input policy and convert to unsigned.
pub fn validate(target: i64, elements: &[i64]) -> Result<(u64, Vec<u64>), FinderError> {
    let target = u64::try_from(target).map_err(|_| FinderError::NegativeTarget { target })?;
    let elements = elements
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            if value > 0 {
                Ok(value as u64)
            } else {
                Err(FinderError::NonPositiveElement { index, value })
            }
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok((target, elements))
}

/// Values selected by `combination`, in index order.
///
/// Panics if an index is out of bounds for `elements`.
pub fn combination_values(elements: &[i64], combination: &[usize]) -> Vec<i64> {
    combination.iter().map(|&i| elements[i]).collect()
}

#[cfg(test)]
mod tests;

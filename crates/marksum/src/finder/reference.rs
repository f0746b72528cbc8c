//! Exhaustive reference enumerator (oracle for tests and `--verify`).
//!
//! Walks all `2^n` index subsets, so it is only meant for short inputs.

use super::types::Combination;

/// Largest input length `exhaustive_combinations` accepts.
pub const MAX_EXHAUSTIVE_LEN: usize = 20;

/// All non-empty index subsets of `elements` whose values sum to `target`,
/// sorted by size then lexicographically.
///
/// Returns `None` when `elements.len() > MAX_EXHAUSTIVE_LEN`.
pub fn exhaustive_combinations(target: i64, elements: &[i64]) -> Option<Vec<Combination>> {
    let n = elements.len();
    if n > MAX_EXHAUSTIVE_LEN {
        return None;
    }
    let mut out: Vec<Combination> = (1u32..(1u32 << n))
        .filter_map(|mask| {
            let combo: Combination = (0..n).filter(|&i| mask & (1 << i) != 0).collect();
            let sum: i128 = combo.iter().map(|&i| elements[i] as i128).sum();
            (sum == target as i128).then_some(combo)
        })
        .collect();
    out.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    Some(out)
}

/// Sort combinations into the same canonical order as `exhaustive_combinations`.
pub fn canonical(mut combinations: Vec<Combination>) -> Vec<Combination> {
    combinations.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    combinations
}

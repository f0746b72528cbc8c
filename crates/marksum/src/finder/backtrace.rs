//! Backtrace enumeration: walk from `target` back to 0 through the marks.

use std::collections::VecDeque;

use super::marks::Marks;
use super::types::{Combination, Enumeration, FinderCfg, FinderError};

/// A partial combination under reconstruction.
///
/// Indices are stored in descending order so that prepending the next
/// (smaller) index is a `push`; `remaining` is the prior mark point still to
/// be covered.
#[derive(Clone, Debug)]
struct Backtrace {
    desc: Vec<usize>,
    remaining: u64,
}

impl Backtrace {
    fn seed(index: usize, value: u64, target: u64) -> Self {
        Self {
            desc: vec![index],
            remaining: target - value,
        }
    }

    #[inline]
    fn smallest(&self) -> usize {
        // Never empty: seeded with one index and only ever grown.
        self.desc[self.desc.len() - 1]
    }

    fn extended(&self, index: usize, value: u64) -> Self {
        let mut desc = Vec::with_capacity(self.desc.len() + 1);
        desc.extend_from_slice(&self.desc);
        desc.push(index);
        Self {
            desc,
            remaining: self.remaining - value,
        }
    }

    fn into_combination(mut self) -> Combination {
        self.desc.reverse();
        self.desc
    }
}

/// Enumerate every combination reaching `marks.target()`.
///
/// Work proceeds from a FIFO queue: seeds are the indices marked at the
/// target; each popped backtrace either completes (`remaining == 0`) or spawns
/// one copy per mark at its prior point whose index is below its current
/// smallest index. That strict bound keeps combinations ascending, makes each
/// index set appear once, and guarantees termination.
pub fn enumerate(
    marks: &Marks,
    elements: &[u64],
    cfg: FinderCfg,
) -> Result<Enumeration, FinderError> {
    let target = marks.target();
    let mut out = Enumeration::default();
    let mut queue: VecDeque<Backtrace> = marks
        .indices_at(target)
        .unwrap_or_default()
        .iter()
        .map(|&i| Backtrace::seed(i, elements[i], target))
        .collect();

    while let Some(bt) = queue.pop_front() {
        if cfg
            .max_combinations
            .is_some_and(|cap| out.combinations.len() >= cap)
        {
            out.truncated = true;
            break;
        }
        if bt.remaining == 0 {
            out.combinations.push(bt.into_combination());
            continue;
        }
        let prior = marks
            .indices_at(bt.remaining)
            .ok_or(FinderError::MissingMark {
                point: bt.remaining,
            })?;
        let floor = bt.smallest();
        // Indices at a point are ascending, so stop at the first one >= floor.
        for &j in prior.iter().take_while(|&&j| j < floor) {
            queue.push_back(bt.extended(j, elements[j]));
        }
    }

    tracing::debug!(
        total = target,
        combinations = out.combinations.len(),
        truncated = out.truncated,
        "backtrace enumeration done"
    );
    Ok(out)
}

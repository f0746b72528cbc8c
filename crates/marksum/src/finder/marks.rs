//! Mark construction: the forward sweep over the elements.
//!
//! Picture a stick of length `target`. For each element `e` (index `i`), in
//! input order:
//! 1. every mark `k` already on the stick spawns a mark at `k + e`;
//! 2. a mark is made at `e` itself;
//! 3. marks beyond `target` are never made.
//!
//! Each mark records only the index that *directly* led to it: `1 + 2 + 3`
//! marks point 6 with the index of `3`. If point `target` carries a mark, at
//! least one combination exists and `backtrace` walks back to 0 from there.

use std::collections::BTreeMap;

/// Reachability index over the points `1..=target`.
///
/// Invariants:
/// - A point is present iff some non-empty subset of elements sums to it.
/// - Indices at a point are strictly ascending (discovery order of a
///   left-to-right sweep), and each was recorded while
///   `point - elements[i]` was already reachable or zero.
/// - Immutable once built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Marks {
    target: u64,
    points: BTreeMap<u64, Vec<usize>>,
}

impl Marks {
    /// Run the forward sweep. `elements` are assumed positive (see `validate`).
    pub fn build(target: u64, elements: &[u64]) -> Self {
        let mut marks = Self {
            target,
            points: BTreeMap::new(),
        };
        for (i, &e) in elements.iter().enumerate() {
            marks.sweep(i, e);
        }
        marks
    }

    fn sweep(&mut self, index: usize, value: u64) {
        // Snapshot first: this element must not extend marks it creates itself.
        let before: Vec<u64> = self.points.keys().copied().collect();
        for k in before {
            // k <= target always holds, so the subtraction cannot underflow.
            if value <= self.target - k {
                self.mark(k + value, index);
            }
        }
        if value <= self.target {
            self.mark(value, index);
        }
    }

    #[inline]
    fn mark(&mut self, point: u64, index: usize) {
        self.points.entry(point).or_default().push(index);
    }

    #[inline]
    pub fn target(&self) -> u64 {
        self.target
    }

    /// Indices recorded at `point`, ascending; `None` if unreachable.
    #[inline]
    pub fn indices_at(&self, point: u64) -> Option<&[usize]> {
        self.points.get(&point).map(Vec::as_slice)
    }

    #[inline]
    pub fn is_reachable(&self, point: u64) -> bool {
        self.points.contains_key(&point)
    }

    /// Reachable points in increasing order.
    pub fn points(&self) -> impl Iterator<Item = u64> + '_ {
        self.points.keys().copied()
    }

    /// Number of reachable points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

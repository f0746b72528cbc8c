//! Data types for the finder: configuration, results, and errors.
//!
//! Kept small and explicit so `marks` and `backtrace` read top to bottom.

use std::fmt;

/// A combination: ascending element indices whose values sum to the target.
pub type Combination = Vec<usize>;

/// What to report when the target is 0.
///
/// Every element is positive, so no mark ever lands on 0. The only subset
/// summing to 0 is the empty one; whether that counts is a caller choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZeroTarget {
    /// No combinations (a combination selects at least one element).
    #[default]
    NoCombinations,
    /// Exactly one combination, the empty index sequence.
    EmptyCombination,
}

/// Finder configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct FinderCfg {
    pub zero_target: ZeroTarget,
    /// Stop after this many combinations. The output can be exponential in
    /// the input length; `None` enumerates everything.
    pub max_combinations: Option<usize>,
}

/// Enumeration result plus whether the cap in `FinderCfg` cut it short.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Enumeration {
    /// Combinations in discovery order.
    pub combinations: Vec<Combination>,
    /// `true` iff `max_combinations` was reached while backtraces were still active.
    pub truncated: bool,
}

/// Errors surfaced by the finder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FinderError {
    /// The target must be `>= 0`.
    NegativeTarget { target: i64 },
    /// Every element must be `> 0`; reports the first offender.
    NonPositiveElement { index: usize, value: i64 },
    /// A backtrace reached a point with no marks. Mark construction guarantees
    /// this cannot happen, so it indicates a defect rather than bad input.
    MissingMark { point: u64 },
}

impl fmt::Display for FinderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeTarget { target } => {
                write!(f, "target must be non-negative, got {target}")
            }
            Self::NonPositiveElement { index, value } => {
                write!(f, "element {index} must be positive, got {value}")
            }
            Self::MissingMark { point } => write!(
                f,
                "internal error: backtrace reached point {point} which carries no marks"
            ),
        }
    }
}

impl std::error::Error for FinderError {}

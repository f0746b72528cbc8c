//! Curated internal API for the CLI and bindings (UNSTABLE).
//!
//! Not a public API. Breaking changes are allowed and expected.

// Finder
pub use crate::finder::reference::{canonical, exhaustive_combinations, MAX_EXHAUSTIVE_LEN};
pub use crate::finder::{
    combination_values, enumerate, find_combinations, find_combinations_with, validate,
    Combination, Enumeration, FinderCfg, FinderError, Marks, ZeroTarget,
};
// Random instances
pub use crate::instances::{
    draw_instance, ElementCount, Instance, InstanceCfg, ReplayToken as InstanceReplay,
    TargetChoice,
};

//! Subset-sum combination finder (mark-up algorithm).
//!
//! Given a target and an ordered sequence of positive integers, find every
//! combination of positions whose values sum exactly to the target.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - Prefer clarity and better design over compatibility; breaking changes
//!   are fine when they improve quality.

pub mod api;
pub mod finder;
pub mod instances;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::finder::{
        combination_values, find_combinations, find_combinations_with, Combination, Enumeration,
        FinderCfg, FinderError, Marks, ZeroTarget,
    };
    pub use crate::instances::{draw_instance, ElementCount, Instance, InstanceCfg, ReplayToken};
}

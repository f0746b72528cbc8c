//! JSON report written by `find` and `random`.

use anyhow::{Context, Result};
use marksum::api::{combination_values, Enumeration};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::provenance::ensure_parent_dir;

/// Replay token of a drawn instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replay {
    pub seed: u64,
    pub index: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindReport {
    pub target: i64,
    pub elements: Vec<i64>,
    /// Ascending index sequences, in discovery order.
    pub combinations: Vec<Vec<usize>>,
    /// Values at `combinations`, row for row.
    pub values: Vec<Vec<i64>>,
    pub truncated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replay: Option<Replay>,
}

impl FindReport {
    pub fn new(target: i64, elements: Vec<i64>, found: Enumeration) -> Self {
        let values = found
            .combinations
            .iter()
            .map(|c| combination_values(&elements, c))
            .collect();
        Self {
            target,
            elements,
            combinations: found.combinations,
            values,
            truncated: found.truncated,
            replay: None,
        }
    }

    pub fn with_replay(mut self, replay: Replay) -> Self {
        self.replay = Some(replay);
        self
    }
}

pub fn write_json(path: &Path, report: &FindReport) -> Result<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, serde_json::to_vec_pretty(report)?)
        .with_context(|| format!("writing {}", path.display()))
}

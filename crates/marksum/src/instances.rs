//! Random problem instances (replay tokens, planted targets).
//!
//! Purpose
//! - Reproducible inputs for benchmarks, property checks, and the CLI
//!   `random` subcommand.
//!
//! Model
//! - Draw `n` element values uniformly from `1..=value_max`.
//! - The target is either planted (sum of a random non-empty subset, so at
//!   least one combination exists) or uniform in `1..=target_max`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Element count distribution.
#[derive(Clone, Copy, Debug)]
pub enum ElementCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl ElementCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            ElementCount::Fixed(n) => n,
            ElementCount::Uniform { min, max } => rng.gen_range(min..=max.max(min)),
        }
    }
}

/// How the target is chosen.
#[derive(Clone, Copy, Debug)]
pub enum TargetChoice {
    /// Sum of a random non-empty subset of the drawn elements.
    Planted,
    /// Uniform in `1..=target_max`; may have no solution.
    Uniform { target_max: u64 },
}

/// Instance sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct InstanceCfg {
    pub element_count: ElementCount,
    /// Values are drawn from `1..=value_max` (clamped to at least 1).
    pub value_max: u64,
    pub target: TargetChoice,
}

impl Default for InstanceCfg {
    fn default() -> Self {
        Self {
            element_count: ElementCount::Fixed(12),
            value_max: 100,
            target: TargetChoice::Planted,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// A drawn problem instance, in the signed form the finder accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instance {
    pub target: i64,
    pub elements: Vec<i64>,
}

/// Draw an instance.
///
/// Notes
/// - A planted target over zero elements is 0.
/// - `value_max` is capped so that any subset sum fits in `i64`.
pub fn draw_instance(cfg: InstanceCfg, tok: ReplayToken) -> Instance {
    let mut rng = tok.to_std_rng();
    let n = cfg.element_count.sample(&mut rng);
    let cap = (i64::MAX as u64) / (n.max(1) as u64);
    let value_max = cfg.value_max.clamp(1, cap);
    let values: Vec<u64> = (0..n).map(|_| rng.gen_range(1..=value_max)).collect();
    let target = match cfg.target {
        TargetChoice::Planted if n == 0 => 0,
        TargetChoice::Planted => {
            // Force one pick so the subset is never empty.
            let forced = rng.gen_range(0..n);
            values
                .iter()
                .enumerate()
                .filter(|&(i, _)| i == forced || rng.gen_bool(0.5))
                .map(|(_, &v)| v)
                .sum()
        }
        TargetChoice::Uniform { target_max } => {
            rng.gen_range(1..=target_max.clamp(1, i64::MAX as u64))
        }
    };
    Instance {
        target: target as i64,
        elements: values.into_iter().map(|v| v as i64).collect(),
    }
}

use anyhow::{bail, ensure, Context, Result};
use clap::{Args, Parser, Subcommand};
use marksum::api::{
    canonical, draw_instance, exhaustive_combinations, find_combinations_with, ElementCount,
    Enumeration, FinderCfg, InstanceCfg, InstanceReplay, TargetChoice, ZeroTarget,
    MAX_EXHAUSTIVE_LEN,
};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;
mod report;

use provenance::Payload;
use report::{FindReport, Replay};

/// Elements and target of the classic sample run.
const DEMO_TARGET: i64 = 100;
const DEMO_ELEMENTS: [i64; 8] = [8, 91, 9, 10, 1, 99, 1, 103];

#[derive(Parser)]
#[command(name = "marksum")]
#[command(about = "Find every index combination whose values sum to a target")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve one instance given inline or as a CSV column
    Find(FindArgs),
    /// Draw a reproducible random instance and solve it
    Random(RandomArgs),
    /// Solve the classic sample input and print the combinations
    Demo,
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args)]
struct FindArgs {
    #[arg(long, allow_negative_numbers = true)]
    target: i64,
    /// Comma-separated element values
    #[arg(
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        conflicts_with = "input"
    )]
    elements: Vec<i64>,
    /// CSV file with a header row
    #[arg(long)]
    input: Option<PathBuf>,
    /// Column of `--input` holding the element values
    #[arg(long, default_value = "value")]
    column: String,
    /// Cross-check against exhaustive enumeration (short inputs only)
    #[arg(long)]
    verify: bool,
    /// Write the JSON report (plus provenance sidecar) here instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
    #[command(flatten)]
    finder: FinderArgs,
}

#[derive(Args)]
struct RandomArgs {
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 0)]
    index: u64,
    /// Number of elements
    #[arg(long, default_value_t = 12)]
    len: usize,
    #[arg(long, default_value_t = 100)]
    value_max: u64,
    /// Uniform target in 1..=MAX instead of a planted one
    #[arg(long)]
    target_max: Option<u64>,
    #[command(flatten)]
    finder: FinderArgs,
}

#[derive(Args, Clone, Copy)]
struct FinderArgs {
    /// Stop after this many combinations
    #[arg(long)]
    max: Option<usize>,
    /// Report the empty combination when the target is 0
    #[arg(long)]
    empty_for_zero: bool,
}

impl FinderArgs {
    fn cfg(self) -> FinderCfg {
        FinderCfg {
            zero_target: if self.empty_for_zero {
                ZeroTarget::EmptyCombination
            } else {
                ZeroTarget::NoCombinations
            },
            max_combinations: self.max,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Find(args) => find(args),
        Action::Random(args) => random(args),
        Action::Demo => demo(),
        Action::Report => report(),
    }
}

fn find(args: FindArgs) -> Result<()> {
    let elements = match &args.input {
        Some(path) => input::read_elements_csv(path, &args.column)?,
        None if !args.elements.is_empty() => args.elements.clone(),
        None => bail!("pass elements with --elements a,b,c or --input file.csv"),
    };
    let cfg = args.finder.cfg();
    tracing::info!(
        total = args.target,
        elements = elements.len(),
        max = ?cfg.max_combinations,
        "find"
    );
    let found = find_combinations_with(args.target, &elements, cfg)
        .context("finding combinations")?;
    tracing::info!(
        combinations = found.combinations.len(),
        truncated = found.truncated,
        "found"
    );
    if args.verify {
        verify(args.target, &elements, cfg, &found)?;
    }

    let report = FindReport::new(args.target, elements, found);
    match args.out {
        Some(out) => {
            report::write_json(&out, &report)?;
            let params = serde_json::json!({
                "target": report.target,
                "elements": report.elements.len(),
                "input": args.input,
                "max_combinations": cfg.max_combinations,
                "empty_for_zero": args.finder.empty_for_zero,
                "combinations": report.combinations.len(),
                "truncated": report.truncated,
            });
            let sidecar = provenance::write_sidecar(&out, Payload::new(params))?;
            tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "written");
        }
        None => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

/// Compare against the exhaustive enumerator as index sets.
fn verify(target: i64, elements: &[i64], cfg: FinderCfg, found: &Enumeration) -> Result<()> {
    ensure!(!found.truncated, "cannot verify a truncated enumeration");
    let mut expected = exhaustive_combinations(target, elements).with_context(|| {
        format!("--verify supports at most {MAX_EXHAUSTIVE_LEN} elements")
    })?;
    if target == 0 && cfg.zero_target == ZeroTarget::EmptyCombination {
        expected.insert(0, Vec::new());
    }
    ensure!(
        canonical(found.combinations.clone()) == expected,
        "finder disagrees with exhaustive enumeration ({} vs {} combinations)",
        found.combinations.len(),
        expected.len()
    );
    tracing::info!(combinations = expected.len(), "verified");
    Ok(())
}

fn random(args: RandomArgs) -> Result<()> {
    let instance_cfg = InstanceCfg {
        element_count: ElementCount::Fixed(args.len),
        value_max: args.value_max,
        target: match args.target_max {
            Some(target_max) => TargetChoice::Uniform { target_max },
            None => TargetChoice::Planted,
        },
    };
    let tok = InstanceReplay {
        seed: args.seed,
        index: args.index,
    };
    let inst = draw_instance(instance_cfg, tok);
    tracing::info!(seed = args.seed, index = args.index, total = inst.target, "random");
    let found = find_combinations_with(inst.target, &inst.elements, args.finder.cfg())
        .context("finding combinations")?;
    let report = FindReport::new(inst.target, inst.elements, found).with_replay(Replay {
        seed: args.seed,
        index: args.index,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn demo() -> Result<()> {
    tracing::info!(total = DEMO_TARGET, "demo");
    let found = find_combinations_with(DEMO_TARGET, &DEMO_ELEMENTS, FinderCfg::default())?;
    println!("{:?}", found.combinations);
    Ok(())
}

fn report() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&provenance::summary())?);
    Ok(())
}

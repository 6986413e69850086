//! CLI argument parsing using clap

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Parallelization level for solver execution
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// No parallelization; execute all solvers sequentially in order
    Sequential,
    /// Parallelize across days; parts run sequentially on one parsed input (default)
    #[default]
    Day,
    /// Parallelize across all day/part combinations
    Part,
}

/// How malformed records are reported
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ErrorPolicyArg {
    /// Stop at the first malformed record
    FailFast,
    /// Report every malformed record
    CollectAll,
}

impl From<ErrorPolicyArg> for cube_game::ErrorPolicy {
    fn from(arg: ErrorPolicyArg) -> Self {
        match arg {
            ErrorPolicyArg::FailFast => cube_game::ErrorPolicy::FailFast,
            ErrorPolicyArg::CollectAll => cube_game::ErrorPolicy::CollectAll,
        }
    }
}

/// Cube game and calibration puzzle runner
#[derive(Parser, Debug)]
#[command(name = "cubes", about = "Run the cube game and calibration puzzles", version)]
pub struct Args {
    /// Day to run (runs all registered days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Input file for the selected day (requires --day)
    #[arg(short, long, requires = "day")]
    pub input: Option<PathBuf>,

    /// Directory holding dayNN.txt inputs [default: ~/.cache/cubes]
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Config file [default: ~/.config/cubes/config.toml when present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Capacity overrides, e.g. `red=12,green=13,blue=14`
    #[arg(long)]
    pub capacities: Option<String>,

    /// What to do with malformed records
    #[arg(long, value_enum)]
    pub error_policy: Option<ErrorPolicyArg>,

    /// Parse records of one input in parallel
    #[arg(long)]
    pub parallel_lines: bool,

    /// Number of threads for parallel execution
    #[arg(long)]
    pub threads: Option<usize>,

    /// Parallelization level: sequential, day, or part
    #[arg(long, value_enum, default_value = "day")]
    pub parallelize_by: ParallelizeBy,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG wins
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

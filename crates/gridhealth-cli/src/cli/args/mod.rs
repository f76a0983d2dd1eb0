use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod common;
pub use common::*;

#[derive(Parser)]
#[command(
    name = "gridhealth",
    version,
    about = "Flakiness and infra-failure health reports for CI test grids"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Summarize a grid snapshot into a healthiness report
    Summarize(SummarizeArgs),
    Version,
}

#[derive(Parser, Debug, Clone)]
pub struct SummarizeArgs {
    /// Grid snapshot (JSON, TestGrid state export shape)
    #[arg(long)]
    pub grid: PathBuf,

    /// Dashboard tab name; env fallback for tests without a `- [env]` suffix
    #[arg(long)]
    pub tab: String,

    /// Window start (ms since epoch, inclusive). Defaults to --days before --end
    #[arg(long, allow_hyphen_values = true)]
    pub start: Option<i64>,

    /// Window end (ms since epoch, inclusive). Defaults to now
    #[arg(long, allow_hyphen_values = true)]
    pub end: Option<i64>,

    /// Window length in days when --start is omitted
    #[arg(long, default_value_t = 7)]
    pub days: u32,

    /// Analyzer config (YAML)
    #[arg(long, env = "GRIDHEALTH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Minimum counted runs for a test to be reported (overrides config)
    #[arg(long, allow_hyphen_values = true)]
    pub min_runs: Option<i64>,

    /// Write the report here instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

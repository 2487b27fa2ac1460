//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{AnalyzeArgs, CompareArgs, ConfigArgs, ScheduleArgs};

/// Yieldrank - bond yield, duration and after-tax attractiveness ranking
#[derive(Parser)]
#[command(name = "yieldrank")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Configuration file (TOML). Defaults to the user config directory.
    #[arg(long, global = true, env = "YIELDRANK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Yield, duration and after-tax return for one bond
    Analyze(AnalyzeArgs),

    /// Rank up to 20 bonds by after-tax yield per year of duration
    Compare(CompareArgs),

    /// Print the cash-flow schedule for a bond
    Schedule(ScheduleArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the key values)
    Minimal,
}

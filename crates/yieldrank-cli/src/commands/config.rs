//! Config command implementation.
//!
//! Shows, creates and locates the analytics configuration file.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Subcommand};

use yieldrank_analytics::config::AnalyticsConfig;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output::{print_header, print_info, print_json, print_output, print_success, KeyValue};
use crate::settings;

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Write a configuration file holding the defaults
    Init(InitArgs),

    /// Show configuration file location
    Path,
}

/// Arguments for init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Execute the config command.
pub fn execute(args: &ConfigArgs, config_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    match &args.command {
        ConfigCommand::Show => execute_show(config_path, format),
        ConfigCommand::Init(init) => execute_init(init, config_path),
        ConfigCommand::Path => execute_path(config_path),
    }
}

fn execute_show(config_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let config = settings::load(config_path)?;

    match format {
        OutputFormat::Json => print_json(&config)?,
        OutputFormat::Table => {
            print_header("Current Configuration");
            print_output(&config_rows(&config), format)?;
        }
        OutputFormat::Csv => print_output(&config_rows(&config), format)?,
        OutputFormat::Minimal => print!("{}", settings::to_toml(&config)?),
    }

    Ok(())
}

fn execute_init(args: &InitArgs, config_path: Option<&Path>) -> Result<()> {
    let path = resolve_path(config_path)?;

    if path.exists() && !args.force {
        return Err(CliError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        ))
        .into());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, settings::to_toml(&AnalyticsConfig::default())?)?;

    print_success(&format!("Wrote default configuration to {}", path.display()));
    Ok(())
}

fn execute_path(config_path: Option<&Path>) -> Result<()> {
    let path = resolve_path(config_path)?;
    println!("{}", path.display());

    if !path.exists() {
        print_info("File does not exist; built-in defaults are in use");
    }

    Ok(())
}

fn resolve_path(config_path: Option<&Path>) -> Result<PathBuf, CliError> {
    config_path
        .map(Path::to_path_buf)
        .or_else(settings::default_path)
        .ok_or_else(|| CliError::Config("could not determine config directory".into()))
}

/// Flattens a configuration into key/value rows.
fn config_rows(config: &AnalyticsConfig) -> Vec<KeyValue> {
    let solver = &config.solver;
    let mut rows = vec![
        KeyValue::new("tax_treatment", config.tax_treatment.to_string()),
        KeyValue::new("duration_epsilon", format!("{:e}", config.duration_epsilon)),
        KeyValue::new("parallel", config.parallel.to_string()),
        KeyValue::new("parallel_threshold", config.parallel_threshold.to_string()),
        KeyValue::new("solver.tolerance", format!("{:e}", solver.tolerance)),
        KeyValue::new("solver.max_iterations", solver.max_iterations.to_string()),
        KeyValue::new("solver.lower_bound", solver.lower_bound.to_string()),
        KeyValue::new("solver.initial_upper", solver.initial_upper.to_string()),
        KeyValue::new("solver.upper_cap", solver.upper_cap.to_string()),
    ];
    if let Some(guess) = solver.initial_guess {
        rows.push(KeyValue::new("solver.initial_guess", guess.to_string()));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_rows() {
        let rows = config_rows(&AnalyticsConfig::default());
        assert_eq!(rows.len(), 9);
        assert_eq!(rows[0].value, "coupon-only");
        assert_eq!(rows[5].value, "100");
    }

    #[test]
    fn test_resolve_explicit_path() {
        let path = resolve_path(Some(Path::new("/tmp/yieldrank.toml"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/yieldrank.toml"));
    }
}

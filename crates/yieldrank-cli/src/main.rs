//! Yieldrank CLI - Command-line interface for bond yield and ranking analytics.
//!
//! # Usage
//!
//! ```bash
//! # Analyze a bond
//! yieldrank analyze --face 1000 --price 950 --coupon 5 --tax 20 --years 5
//!
//! # Rank bonds from a file
//! yieldrank compare --file bonds.json
//!
//! # Rank bonds given inline
//! yieldrank compare --bond A:1000:950:5:5 --bond B:1000:980:4:3 --tax 20
//!
//! # Show the cash-flow schedule
//! yieldrank schedule --face 1000 --coupon 5 --years 5
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;
mod settings;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let format = cli.format;
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Analyze(args) => {
            let config = settings::load(config_path)?;
            commands::analyze::execute(&args, &config, format)?;
        }
        Commands::Compare(args) => {
            let config = settings::load(config_path)?;
            commands::compare::execute(&args, &config, format, cli.quiet)?;
        }
        Commands::Schedule(args) => commands::schedule::execute(&args, format)?,
        Commands::Config(args) => commands::config::execute(&args, config_path, format)?,
    }

    Ok(())
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_logging(verbose: bool, quiet: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else if quiet {
        EnvFilter::new("off")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

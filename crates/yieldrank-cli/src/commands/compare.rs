//! Compare command implementation.
//!
//! Ranks a batch of bonds by after-tax yield per year of duration.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use yieldrank_analytics::config::AnalyticsConfig;
use yieldrank_analytics::functions::compute_batch_with_config;
use yieldrank_analytics::ranking::{BatchResult, RankedBond};
use yieldrank_core::types::BondSpec;

use crate::cli::OutputFormat;
use crate::commands::from_percent;
use crate::error::{CliError, CliResult};
use crate::output::{
    format_percent, print_header, print_highlighted_table, print_json, print_output, print_warning,
};

/// Arguments for the compare command.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Bond file (.json, .yaml/.yml or .csv) with face_value, price,
    /// coupon_rate, tax_rate and years_to_maturity as fractions
    #[arg(long, required_unless_present = "bond")]
    pub file: Option<PathBuf>,

    /// Inline bond as name:face:price:coupon_pct:years (repeatable)
    #[arg(short, long)]
    pub bond: Vec<String>,

    /// Tax rate on coupon income as percentage, applied to every bond
    #[arg(short, long)]
    pub tax: Option<Decimal>,
}

/// One row of the ranking table.
#[derive(Debug, Serialize, Tabled)]
struct RankRow {
    #[tabled(rename = "Rank")]
    rank: usize,
    #[tabled(rename = "Bond")]
    bond: String,
    #[tabled(rename = "YTM")]
    ytm: String,
    #[tabled(rename = "After-tax YTM")]
    ytm_after_tax: String,
    #[tabled(rename = "Duration")]
    duration: String,
    #[tabled(rename = "Net Return")]
    net_return: String,
    #[tabled(rename = "YTM/Duration")]
    ratio: String,
}

impl From<&RankedBond> for RankRow {
    fn from(r: &RankedBond) -> Self {
        Self {
            rank: r.rank,
            bond: r.id.to_string(),
            ytm: format_percent(r.metrics.ytm),
            ytm_after_tax: format_percent(r.metrics.ytm_after_tax),
            duration: format!("{:.4}", r.metrics.duration),
            net_return: format_percent(r.metrics.net_total_return_after_tax),
            ratio: format!("{:.6}", r.ratio),
        }
    }
}

/// Execute the compare command.
pub fn execute(
    args: &CompareArgs,
    config: &AnalyticsConfig,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let bonds = collect_bonds(args)?;
    tracing::debug!("ranking {} bonds", bonds.len());

    let result = compute_batch_with_config(&bonds, config)?;

    if !quiet {
        for skipped in &result.skipped {
            print_warning(&format!(
                "{} (#{}) not ranked: {}",
                skipped.id,
                skipped.index + 1,
                skipped.reason
            ));
        }
    }

    match format {
        OutputFormat::Table => print_ranking(&result),
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Csv => {
            let rows: Vec<RankRow> = result.ranked.iter().map(RankRow::from).collect();
            print_output(&rows, format)?;
        }
        OutputFormat::Minimal => {
            for ranked in &result.ranked {
                println!("{}", ranked.id);
            }
        }
    }

    Ok(())
}

fn print_ranking(result: &BatchResult) {
    let rows: Vec<RankRow> = result.ranked.iter().map(RankRow::from).collect();
    print_header("Bond Ranking (after-tax YTM / duration)");

    let best = (!rows.is_empty()).then_some(0);
    let worst = (rows.len() > 1).then(|| rows.len() - 1);
    print_highlighted_table(&rows, best, worst);
}

fn collect_bonds(args: &CompareArgs) -> CliResult<Vec<BondSpec>> {
    let mut bonds = match &args.file {
        Some(path) => read_bond_file(path)?,
        None => Vec::new(),
    };

    for text in &args.bond {
        bonds.push(parse_inline_bond(text, Decimal::ZERO)?);
    }

    if let Some(tax) = args.tax {
        let tax = from_percent(tax);
        bonds = bonds
            .iter()
            .map(|b| b.with_tax_rate(tax))
            .collect::<Result<_, _>>()?;
    }

    Ok(bonds)
}

/// Parses `name:face:price:coupon_pct:years`.
pub fn parse_inline_bond(text: &str, tax_rate: Decimal) -> CliResult<BondSpec> {
    let invalid = |reason: &str| CliError::InvalidBond {
        input: text.to_string(),
        reason: reason.to_string(),
    };

    let parts: Vec<&str> = text.split(':').collect();
    let [name, face, price, coupon, years] = parts.as_slice() else {
        return Err(invalid("expected name:face:price:coupon_pct:years"));
    };

    let number = |field: &str, value: &str| -> CliResult<Decimal> {
        value
            .trim()
            .parse::<Decimal>()
            .map_err(|_| invalid(&format!("{field} '{value}' is not a number")))
    };
    let years: f64 = years
        .trim()
        .parse()
        .map_err(|_| invalid(&format!("years '{years}' is not a number")))?;

    Ok(BondSpec::new(
        name.trim(),
        number("face", face)?,
        number("price", price)?,
        from_percent(number("coupon", coupon)?),
        tax_rate,
        years,
    )?)
}

/// Reads bonds from a JSON, YAML or CSV file.
pub fn read_bond_file(path: &Path) -> CliResult<Vec<BondSpec>> {
    let input_error = |reason: String| CliError::InputFile {
        path: path.display().to_string(),
        reason,
    };

    let content = std::fs::read_to_string(path).map_err(|e| input_error(e.to_string()))?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("json") => serde_json::from_str(&content).map_err(|e| input_error(e.to_string())),
        Some("yaml" | "yml") => {
            serde_yaml::from_str(&content).map_err(|e| input_error(e.to_string()))
        }
        Some("csv") => csv::Reader::from_reader(content.as_bytes())
            .deserialize()
            .collect::<Result<Vec<BondSpec>, _>>()
            .map_err(|e| input_error(e.to_string())),
        _ => Err(input_error(
            "unsupported extension, use .json, .yaml, .yml or .csv".to_string(),
        )),
    }
}

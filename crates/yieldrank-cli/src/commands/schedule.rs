//! Schedule command implementation.
//!
//! Prints the annual cash flows of a bond.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use yieldrank_analytics::cashflows::build_schedule;
use yieldrank_core::types::{CashFlowSchedule, MAX_YEARS_TO_MATURITY};

use crate::cli::OutputFormat;
use crate::commands::{from_percent, MaturityArgs};
use crate::error::{CliError, CliResult};
use crate::output::{print_header, print_json, print_output};

/// Arguments for the schedule command.
#[derive(Args, Debug)]
pub struct ScheduleArgs {
    /// Face value
    #[arg(long, default_value = "1000")]
    pub face: Decimal,

    /// Annual coupon rate as percentage (e.g., 5.0 for 5%)
    #[arg(short, long, default_value = "0")]
    pub coupon: Decimal,

    /// Tax rate on coupon income as percentage; adds an after-tax column
    #[arg(short, long)]
    pub tax: Option<Decimal>,

    #[command(flatten)]
    pub maturity: MaturityArgs,
}

/// One row of the schedule table.
#[derive(Debug, Serialize, Tabled)]
pub struct ScheduleRow {
    #[tabled(rename = "Period")]
    pub period: u32,
    #[tabled(rename = "Coupon")]
    pub coupon: Decimal,
    #[tabled(rename = "Principal")]
    pub principal: Decimal,
    #[tabled(rename = "Total")]
    pub total: Decimal,
    #[tabled(rename = "After Tax")]
    pub after_tax: Decimal,
}

/// Execute the schedule command.
pub fn execute(args: &ScheduleArgs, format: OutputFormat) -> Result<()> {
    let periods = whole_periods(args.maturity.years()?)?;
    let schedule = build_schedule(args.face, from_percent(args.coupon), periods)?;
    let tax = args.tax.map(from_percent).unwrap_or(Decimal::ZERO);
    let taxed = schedule.after_tax(tax)?;
    let rows = schedule_rows(&schedule, &taxed);

    match format {
        OutputFormat::Table => {
            print_header(&format!("Cash Flows ({periods} annual periods)"));
            print_output(&rows, format)?;
            println!(
                "Total: {}  After tax: {}",
                schedule.total(),
                taxed.total()
            );
        }
        OutputFormat::Json => print_json(&rows)?,
        OutputFormat::Csv => print_output(&rows, format)?,
        OutputFormat::Minimal => {
            for row in &rows {
                println!("{} {}", row.period, row.total);
            }
        }
    }

    Ok(())
}

/// Rounds a maturity to whole annual periods after range-checking it.
fn whole_periods(years: f64) -> CliResult<u32> {
    if !years.is_finite() || !(1.0..=MAX_YEARS_TO_MATURITY).contains(&years) {
        return Err(CliError::InvalidArgument(format!(
            "years to maturity must be in [1, {MAX_YEARS_TO_MATURITY}], got {years}"
        )));
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok(years.round() as u32)
}

/// Table rows pairing each flow with its after-tax counterpart.
pub fn schedule_rows(schedule: &CashFlowSchedule, taxed: &CashFlowSchedule) -> Vec<ScheduleRow> {
    schedule
        .iter()
        .zip(taxed.iter())
        .map(|(cf, taxed)| ScheduleRow {
            period: cf.period(),
            coupon: cf.coupon_amount(),
            principal: cf.principal_amount(),
            total: cf.amount(),
            after_tax: taxed.amount(),
        })
        .collect()
}

//! Analyze command implementation.
//!
//! Yield, duration and after-tax figures for a single bond.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use yieldrank_analytics::cashflows::CashFlowModel;
use yieldrank_analytics::config::AnalyticsConfig;
use yieldrank_analytics::functions::compute_single_bond_with_config;
use yieldrank_analytics::metrics::BondMetrics;
use yieldrank_core::types::{BondSpec, CashFlowSchedule};

use crate::cli::OutputFormat;
use crate::commands::BondArgs;
use crate::output::{format_percent, print_header, print_json, print_output, KeyValue};

/// Arguments for the analyze command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    /// Show cashflows
    #[arg(long)]
    pub cashflows: bool,
}

#[derive(Serialize)]
struct AnalyzeReport<'a> {
    bond: &'a BondSpec,
    metrics: &'a BondMetrics,
    #[serde(skip_serializing_if = "Option::is_none")]
    cashflows: Option<&'a CashFlowSchedule>,
}

/// Execute the analyze command.
pub fn execute(args: &AnalyzeArgs, config: &AnalyticsConfig, format: OutputFormat) -> Result<()> {
    let bond = args.bond.to_spec()?;
    let metrics = compute_single_bond_with_config(&bond, config)?;
    let schedule = if args.cashflows {
        Some(CashFlowModel::schedule_for(&bond)?)
    } else {
        None
    };

    match format {
        OutputFormat::Table => {
            print_header("Bond Analytics");
            print_output(&metric_rows(&bond, &metrics, config), format)?;

            if let Some(schedule) = &schedule {
                print_cashflows(schedule, &schedule.after_tax(bond.tax_rate())?);
            }
        }
        OutputFormat::Json => {
            print_json(&AnalyzeReport {
                bond: &bond,
                metrics: &metrics,
                cashflows: schedule.as_ref(),
            })?;
        }
        OutputFormat::Csv => {
            print_output(&metric_rows(&bond, &metrics, config), format)?;
        }
        OutputFormat::Minimal => {
            println!(
                "YTM: {}, After-tax YTM: {}, Duration: {:.4}, Ratio: {}",
                format_percent(metrics.ytm),
                format_percent(metrics.ytm_after_tax),
                metrics.duration,
                format_ratio(metrics.ytm_duration_ratio)
            );
        }
    }

    Ok(())
}

fn metric_rows(bond: &BondSpec, metrics: &BondMetrics, config: &AnalyticsConfig) -> Vec<KeyValue> {
    vec![
        KeyValue::new("Bond", bond.id().to_string()),
        KeyValue::new("Face Value", bond.face_value().to_string()),
        KeyValue::new("Price", bond.price().to_string()),
        KeyValue::new("Coupon", format!("{}%", bond.coupon_rate() * rust_decimal::Decimal::ONE_HUNDRED)),
        KeyValue::new("Tax Rate", format!("{}%", bond.tax_rate() * rust_decimal::Decimal::ONE_HUNDRED)),
        KeyValue::new("Periods", bond.periods().to_string()),
        KeyValue::from_percent("Yield to Maturity", metrics.ytm),
        KeyValue::from_percent("After-tax YTM", metrics.ytm_after_tax),
        KeyValue::new("Tax Treatment", config.tax_treatment.to_string()),
        KeyValue::from_f64("Macaulay Duration", metrics.duration, 4),
        KeyValue::from_f64("Modified Duration", metrics.modified_duration, 4),
        KeyValue::from_percent("Net Total Return (after tax)", metrics.net_total_return_after_tax),
        KeyValue::new("YTM / Duration", format_ratio(metrics.ytm_duration_ratio)),
        KeyValue::new("Solver Iterations", metrics.yield_iterations.to_string()),
    ]
}

fn format_ratio(ratio: Option<f64>) -> String {
    ratio.map_or_else(|| "n/a".to_string(), |r| format!("{r:.6}"))
}

/// Print cashflow schedule.
fn print_cashflows(schedule: &CashFlowSchedule, taxed: &CashFlowSchedule) {
    use tabled::{settings::Style, Table};

    #[derive(Tabled)]
    struct CashflowRow {
        #[tabled(rename = "Period")]
        period: u32,
        #[tabled(rename = "Cashflow")]
        cashflow: String,
        #[tabled(rename = "After Tax")]
        after_tax: String,
        #[tabled(rename = "Type")]
        cf_type: String,
    }

    let rows: Vec<CashflowRow> = schedule
        .iter()
        .zip(taxed.iter())
        .map(|(cf, net)| CashflowRow {
            period: cf.period(),
            cashflow: format!("{:.4}", cf.amount()),
            after_tax: format!("{:.4}", net.amount()),
            cf_type: cf.cf_type().to_string(),
        })
        .collect();

    print_header("Cashflow Schedule");
    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{table}");
}

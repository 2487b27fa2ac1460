//! CLI command implementations.

pub mod analyze;
pub mod compare;
pub mod config;
pub mod schedule;

// Re-export submodules for convenience
pub use analyze::AnalyzeArgs;
pub use compare::CompareArgs;
pub use config::ConfigArgs;
pub use schedule::ScheduleArgs;

use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use yieldrank_core::types::{years_between, BondSpec};

use crate::error::{CliError, CliResult};

/// Maturity given either as years or as dates.
#[derive(Args, Debug, Clone)]
pub struct MaturityArgs {
    /// Years to maturity (rounded to whole annual periods)
    #[arg(short, long, required_unless_present = "maturity", conflicts_with = "maturity")]
    pub years: Option<f64>,

    /// Maturity date (YYYY-MM-DD)
    #[arg(short, long)]
    pub maturity: Option<String>,

    /// Purchase date (YYYY-MM-DD). Defaults to today.
    #[arg(long, requires = "maturity")]
    pub purchase: Option<String>,
}

impl MaturityArgs {
    /// Resolves years to maturity; dates convert as days / 365.25.
    pub fn years(&self) -> CliResult<f64> {
        if let Some(years) = self.years {
            return Ok(years);
        }

        let maturity = self
            .maturity
            .as_deref()
            .ok_or_else(|| CliError::InvalidArgument("--years or --maturity is required".into()))?;
        let maturity = parse_date(maturity)?;
        let purchase = match self.purchase.as_deref() {
            Some(s) => parse_date(s)?,
            None => chrono::Local::now().date_naive(),
        };

        Ok(years_between(purchase, maturity)?)
    }
}

/// Terms of a single bond.
#[derive(Args, Debug, Clone)]
pub struct BondArgs {
    /// Label shown in output
    #[arg(long, default_value = "bond")]
    pub id: String,

    /// Face (redemption) value
    #[arg(long, default_value = "1000")]
    pub face: Decimal,

    /// Purchase price
    #[arg(short, long)]
    pub price: Decimal,

    /// Annual coupon rate as percentage, e.g. 5 for 5%
    #[arg(short, long, default_value = "0")]
    pub coupon: Decimal,

    /// Tax rate on coupon income as percentage, e.g. 20 for 20%
    #[arg(short, long, default_value = "0")]
    pub tax: Decimal,

    #[command(flatten)]
    pub maturity: MaturityArgs,
}

impl BondArgs {
    /// Builds a validated bond specification.
    pub fn to_spec(&self) -> CliResult<BondSpec> {
        Ok(BondSpec::new(
            self.id.as_str(),
            self.face,
            self.price,
            from_percent(self.coupon),
            from_percent(self.tax),
            self.maturity.years()?,
        )?)
    }
}

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Converts a percentage to a fraction exactly.
pub fn from_percent(pct: Decimal) -> Decimal {
    pct / Decimal::ONE_HUNDRED
}

//! Domain types for bond analytics.
//!
//! - [`BondSpec`]: Validated input description of a fixed-coupon bond
//! - [`BondId`]: Caller-supplied bond label
//! - [`CashFlow`]: One period's coupon and principal
//! - [`CashFlowSchedule`]: Ordered cash flows for periods `1..=N`
//! - [`years_between`]: Year fraction between two dates

mod bond;
mod cashflow;
mod maturity;

pub use bond::{BondId, BondSpec, BondSpecBuilder, MAX_YEARS_TO_MATURITY};
pub use cashflow::{CashFlow, CashFlowSchedule, CashFlowType};
pub use maturity::{years_between, DAYS_PER_YEAR};

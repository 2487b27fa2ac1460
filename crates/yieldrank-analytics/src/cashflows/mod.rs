//! Cash flow generation for annual-pay bullet bonds.
//!
//! - [`CashFlowModel`]: builds the coupon/principal schedule from a bond
//! - [`build_schedule`]: the same from raw face value, coupon rate and periods

mod generator;

pub use generator::{build_schedule, CashFlowModel};

//! Modified duration calculation.
//!
//! Modified duration measures the percentage price change per unit change in yield.
//! It's derived from Macaulay duration:
//!
//! ## Formula
//!
//! ```text
//! D_mod = D_mac / (1 + y)
//! ```
//!
//! with annual compounding.

use yieldrank_core::types::CashFlowSchedule;

use super::macaulay_duration;
use crate::error::AnalyticsResult;

/// Calculate modified duration from a schedule and yield.
pub fn modified_duration(schedule: &CashFlowSchedule, ytm: f64) -> AnalyticsResult<f64> {
    let mac_dur = macaulay_duration(schedule, ytm)?;
    Ok(modified_from_macaulay(mac_dur, ytm))
}

/// Convert Macaulay duration to modified duration.
pub fn modified_from_macaulay(macaulay: f64, ytm: f64) -> f64 {
    macaulay / (1.0 + ytm)
}

/// Approximate price change for a yield move using modified duration.
pub fn price_change_from_duration(mod_duration: f64, price: f64, yield_change: f64) -> f64 {
    -mod_duration * price * yield_change
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cashflows::build_schedule;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_modified_duration_discount_bond() {
        let schedule = build_schedule(dec!(1000), dec!(0.05), 5).unwrap();
        let dur = modified_duration(&schedule, 0.061_932_3).unwrap();
        assert_relative_eq!(dur, 4.268_12, epsilon = 1e-4);
    }

    #[test]
    fn test_modified_from_macaulay() {
        // 5.0 / 1.06
        assert_relative_eq!(modified_from_macaulay(5.0, 0.06), 4.716_98, epsilon = 1e-5);
    }

    #[test]
    fn test_price_change_approximation() {
        let change = price_change_from_duration(5.0, 100.0, 0.01);
        assert_relative_eq!(change, -5.0, epsilon = 1e-12);
    }
}

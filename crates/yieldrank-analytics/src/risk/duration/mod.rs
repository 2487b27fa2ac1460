//! Duration calculations for annual-pay bonds.
//!
//! ## Formula
//!
//! ```text
//! D_mac = Σ(t × PV(CF_t)) / Σ PV(CF_t)
//! ```
//!
//! where `PV(CF_t) = CF_t / (1 + r)^t` and `t` is in years.

mod modified;

pub use modified::{modified_duration, modified_from_macaulay, price_change_from_duration};

use yieldrank_core::types::CashFlowSchedule;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Macaulay duration of a schedule at yield `ytm`.
///
/// Uses the pre-tax yield when called from the single-bond pipeline.
///
/// # Example
///
/// ```rust
/// use rust_decimal_macros::dec;
/// use yieldrank_analytics::cashflows::build_schedule;
/// use yieldrank_analytics::risk::macaulay_duration;
///
/// let zero = build_schedule(dec!(100), dec!(0), 7).unwrap();
/// let d = macaulay_duration(&zero, 0.03).unwrap();
/// assert!((d - 7.0).abs() < 1e-12);
/// ```
pub fn macaulay_duration(schedule: &CashFlowSchedule, ytm: f64) -> AnalyticsResult<f64> {
    macaulay_from_flows(&schedule.to_f64_pairs(), ytm)
}

/// Macaulay duration from `(time, amount)` pairs.
pub fn macaulay_from_flows(flows: &[(f64, f64)], ytm: f64) -> AnalyticsResult<f64> {
    if flows.is_empty() {
        return Err(AnalyticsError::InvalidInput(
            "no cash flows provided".to_string(),
        ));
    }
    if !ytm.is_finite() || ytm <= -1.0 {
        return Err(AnalyticsError::InvalidInput(format!(
            "yield must be finite and above -1, got {ytm}"
        )));
    }

    let base = 1.0 + ytm;
    let (weighted_sum, price) = flows.iter().fold((0.0, 0.0), |(w, p), &(t, cf)| {
        let pv = cf * base.powf(-t);
        (w + t * pv, p + pv)
    });

    if price.abs() < 1e-10 {
        return Err(AnalyticsError::DivisionByZero(
            "present value is zero in macaulay duration".to_string(),
        ));
    }

    Ok(weighted_sum / price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cashflows::build_schedule;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_macaulay_discount_bond() {
        let schedule = build_schedule(dec!(1000), dec!(0.05), 5).unwrap();
        let dur = macaulay_duration(&schedule, 0.061_932_3).unwrap();
        assert_relative_eq!(dur, 4.532_45, epsilon = 1e-4);
    }

    #[test]
    fn test_macaulay_zero_coupon_equals_maturity() {
        for years in [1, 5, 30] {
            let schedule = build_schedule(dec!(100), dec!(0), years).unwrap();
            let dur = macaulay_duration(&schedule, 0.07).unwrap();
            assert_relative_eq!(dur, f64::from(years), epsilon = 1e-10);
        }
    }

    #[test]
    fn test_macaulay_bounded_by_maturity() {
        let schedule = build_schedule(dec!(100), dec!(0.08), 10).unwrap();
        let dur = macaulay_duration(&schedule, 0.08).unwrap();
        assert!(dur > 1.0 && dur < 10.0);
    }

    #[test]
    fn test_macaulay_empty() {
        assert!(macaulay_from_flows(&[], 0.05).is_err());
    }

    #[test]
    fn test_macaulay_rate_at_minus_one() {
        let err = macaulay_from_flows(&[(1.0, 100.0)], -1.0).unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidInput(_)));
    }

    #[test]
    fn test_macaulay_zero_value() {
        let err = macaulay_from_flows(&[(1.0, 0.0), (2.0, 0.0)], 0.05).unwrap_err();
        assert!(matches!(err, AnalyticsError::DivisionByZero(_)));
    }
}

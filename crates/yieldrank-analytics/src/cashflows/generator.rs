//! Schedule generation.

use rust_decimal::Decimal;
use yieldrank_core::types::{BondSpec, CashFlow, CashFlowSchedule};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Builds cash flow schedules.
///
/// Periods are whole years. Each of periods `1..N` pays
/// `face_value * coupon_rate`; period `N` pays that coupon plus face value.
pub struct CashFlowModel;

impl CashFlowModel {
    /// Builds the schedule for a validated bond.
    pub fn schedule_for(bond: &BondSpec) -> AnalyticsResult<CashFlowSchedule> {
        Self::build(bond.face_value(), bond.coupon_rate(), bond.periods())
    }

    /// Builds a schedule from raw terms.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rust_decimal_macros::dec;
    /// use yieldrank_analytics::cashflows::CashFlowModel;
    ///
    /// let schedule = CashFlowModel::build(dec!(1000), dec!(0.05), 5).unwrap();
    /// assert_eq!(schedule.len(), 5);
    /// assert_eq!(schedule.total(), dec!(1250));
    /// ```
    pub fn build(
        face_value: Decimal,
        coupon_rate: Decimal,
        periods: u32,
    ) -> AnalyticsResult<CashFlowSchedule> {
        if periods == 0 {
            return Err(AnalyticsError::validation(
                "a schedule needs at least one period",
            ));
        }
        if face_value <= Decimal::ZERO {
            return Err(AnalyticsError::validation(format!(
                "face value must be positive, got {face_value}"
            )));
        }

        let coupon = face_value.checked_mul(coupon_rate).ok_or_else(|| {
            AnalyticsError::validation(format!(
                "coupon of {face_value} at {coupon_rate} exceeds the decimal range"
            ))
        })?;
        let flows: Vec<CashFlow> = (1..periods)
            .map(|t| CashFlow::coupon(t, coupon))
            .chain(std::iter::once(CashFlow::final_payment(
                periods, coupon, face_value,
            )))
            .collect();

        Ok(CashFlowSchedule::new(flows)?)
    }
}

/// Builds a schedule from face value, coupon rate and whole years.
pub fn build_schedule(
    face_value: Decimal,
    coupon_rate: Decimal,
    years: u32,
) -> AnalyticsResult<CashFlowSchedule> {
    CashFlowModel::build(face_value, coupon_rate, years)
}

//! After-tax yield and total return.
//!
//! A flat tax applies to coupon income only. Principal is returned
//! untaxed, so a bond bought below par carries its pull-to-par gain
//! through to the after-tax figures in full.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use yieldrank_core::types::CashFlowSchedule;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::yields::YieldSolver;

/// How the after-tax yield is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TaxTreatment {
    /// Re-solve the yield on a schedule whose coupons are scaled by
    /// `1 - tax`.
    #[default]
    CouponOnly,
    /// Scale the pre-tax yield by `1 - tax`.
    ScaledYield,
}

impl std::fmt::Display for TaxTreatment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaxTreatment::CouponOnly => write!(f, "coupon-only"),
            TaxTreatment::ScaledYield => write!(f, "scaled-yield"),
        }
    }
}

/// After-tax yield and unannualized net total return.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxAdjustedReturn {
    /// After-tax yield to maturity.
    pub ytm_after_tax: f64,
    /// `(Σ after-tax cash flows - price) / price` over the holding period.
    pub net_total_return_after_tax: f64,
    /// Iterations spent re-solving the yield (zero when no solve was needed).
    pub iterations: u32,
}

/// Applies coupon-only tax with a default solver.
///
/// # Example
///
/// ```rust
/// use rust_decimal_macros::dec;
/// use yieldrank_analytics::cashflows::build_schedule;
/// use yieldrank_analytics::tax::apply_tax;
///
/// let schedule = build_schedule(dec!(1000), dec!(0.04), 10).unwrap();
/// let taxed = apply_tax(&schedule, 0.04, dec!(0.25), dec!(1000)).unwrap();
/// assert!((taxed.ytm_after_tax - 0.03).abs() < 1e-6);
/// ```
pub fn apply_tax(
    schedule: &CashFlowSchedule,
    pre_tax_yield: f64,
    tax_rate: Decimal,
    price: Decimal,
) -> AnalyticsResult<TaxAdjustedReturn> {
    apply_tax_with(
        schedule,
        pre_tax_yield,
        tax_rate,
        price,
        &YieldSolver::new(),
        TaxTreatment::CouponOnly,
    )
}

/// Applies tax using the given solver and treatment.
pub fn apply_tax_with(
    schedule: &CashFlowSchedule,
    pre_tax_yield: f64,
    tax_rate: Decimal,
    price: Decimal,
    solver: &YieldSolver,
    treatment: TaxTreatment,
) -> AnalyticsResult<TaxAdjustedReturn> {
    if tax_rate < Decimal::ZERO || tax_rate >= Decimal::ONE {
        return Err(AnalyticsError::validation(format!(
            "tax rate must be in [0, 1), got {tax_rate}"
        )));
    }
    if price <= Decimal::ZERO {
        return Err(AnalyticsError::validation(format!(
            "price must be positive, got {price}"
        )));
    }

    let after_tax = schedule.after_tax(tax_rate)?;
    let net_total_return_after_tax = after_tax
        .total()
        .checked_sub(price)
        .and_then(|gain| gain.checked_div(price))
        .and_then(|ratio| ratio.to_f64())
        .ok_or_else(|| {
            AnalyticsError::InvalidInput(format!(
                "net total return at price {price} exceeds the decimal range"
            ))
        })?;

    let (ytm_after_tax, iterations) = match treatment {
        _ if tax_rate.is_zero() => (pre_tax_yield, 0),
        TaxTreatment::CouponOnly => {
            let result = solver
                .solve_with_guess(&after_tax, price, pre_tax_yield)?
                .require_converged()?;
            (result.yield_value, result.iterations)
        }
        TaxTreatment::ScaledYield => {
            let keep = (Decimal::ONE - tax_rate).to_f64().unwrap_or(1.0);
            (pre_tax_yield * keep, 0)
        }
    };

    log::trace!(
        "after-tax ({treatment}) yield {ytm_after_tax:.6}, net return {net_total_return_after_tax:.6}"
    );

    Ok(TaxAdjustedReturn {
        ytm_after_tax,
        net_total_return_after_tax,
        iterations,
    })
}

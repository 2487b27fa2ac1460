//! Cash flow types for annual-pay bullet bonds.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// Type of cash flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CashFlowType {
    /// Regular coupon payment
    Coupon,
    /// Combined coupon and principal (final payment)
    CouponAndPrincipal,
}

impl fmt::Display for CashFlowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CashFlowType::Coupon => "Coupon",
            CashFlowType::CouponAndPrincipal => "Coupon+Principal",
        };
        write!(f, "{name}")
    }
}

/// A cash flow paid at the end of an annual period.
///
/// The coupon and principal components are kept apart so that tax can be
/// applied to coupon income alone.
///
/// # Example
///
/// ```rust
/// use yieldrank_core::types::{CashFlow, CashFlowType};
/// use rust_decimal_macros::dec;
///
/// let cf = CashFlow::final_payment(5, dec!(50), dec!(1000));
/// assert_eq!(cf.amount(), dec!(1050));
/// assert_eq!(cf.cf_type(), CashFlowType::CouponAndPrincipal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CashFlow {
    period: u32,
    coupon: Decimal,
    principal: Decimal,
    cf_type: CashFlowType,
}

impl CashFlow {
    /// Creates a coupon-only cash flow.
    #[must_use]
    pub fn coupon(period: u32, amount: Decimal) -> Self {
        Self {
            period,
            coupon: amount,
            principal: Decimal::ZERO,
            cf_type: CashFlowType::Coupon,
        }
    }

    /// Creates the final payment combining coupon and principal.
    #[must_use]
    pub fn final_payment(period: u32, coupon: Decimal, principal: Decimal) -> Self {
        Self {
            period,
            coupon,
            principal,
            cf_type: CashFlowType::CouponAndPrincipal,
        }
    }

    /// Returns the period index (1-based).
    pub fn period(&self) -> u32 {
        self.period
    }

    /// Returns the period as a time in years.
    pub fn time(&self) -> f64 {
        f64::from(self.period)
    }

    /// Returns the total amount paid.
    ///
    /// Saturates at the `Decimal` range; flows inside a
    /// [`CashFlowSchedule`] are known to fit.
    pub fn amount(&self) -> Decimal {
        self.coupon.saturating_add(self.principal)
    }

    /// Returns the coupon component.
    pub fn coupon_amount(&self) -> Decimal {
        self.coupon
    }

    /// Returns the principal component.
    pub fn principal_amount(&self) -> Decimal {
        self.principal
    }

    /// Returns the cash flow type.
    pub fn cf_type(&self) -> CashFlowType {
        self.cf_type
    }

    /// Returns true if this flow repays principal.
    pub fn is_principal(&self) -> bool {
        self.cf_type == CashFlowType::CouponAndPrincipal
    }

    /// Returns the flow with its coupon scaled by `1 - tax_rate`.
    pub fn after_tax(&self, tax_rate: Decimal) -> CoreResult<Self> {
        let coupon = Decimal::ONE
            .checked_sub(tax_rate)
            .and_then(|keep| self.coupon.checked_mul(keep))
            .ok_or_else(|| {
                CoreError::invalid_cash_flow(format!(
                    "after-tax coupon out of range at period {} (tax rate {tax_rate})",
                    self.period
                ))
            })?;
        Ok(Self { coupon, ..*self })
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}: {} ({})", self.period, self.amount(), self.cf_type)
    }
}

/// Ordered cash flows for periods `1..=N`.
///
/// A schedule is never empty, its periods are contiguous starting at 1,
/// and only the last entry carries principal. Its undiscounted totals fit
/// in a `Decimal`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCashFlowSchedule")]
pub struct CashFlowSchedule {
    flows: Vec<CashFlow>,
}

#[derive(Deserialize)]
struct RawCashFlowSchedule {
    flows: Vec<CashFlow>,
}

impl TryFrom<RawCashFlowSchedule> for CashFlowSchedule {
    type Error = CoreError;

    fn try_from(raw: RawCashFlowSchedule) -> CoreResult<Self> {
        Self::new(raw.flows)
    }
}

/// Sums `values`, or `None` when the sum leaves the `Decimal` range.
fn checked_sum(mut values: impl Iterator<Item = Decimal>) -> Option<Decimal> {
    values.try_fold(Decimal::ZERO, Decimal::checked_add)
}

impl CashFlowSchedule {
    /// Creates a schedule, checking ordering and shape.
    pub fn new(flows: Vec<CashFlow>) -> CoreResult<Self> {
        if flows.is_empty() {
            return Err(CoreError::invalid_cash_flow("schedule must not be empty"));
        }

        let last = flows.len() - 1;
        for (i, cf) in flows.iter().enumerate() {
            let expected = u32::try_from(i + 1)
                .map_err(|_| CoreError::invalid_cash_flow("schedule too long"))?;
            if cf.period != expected {
                return Err(CoreError::invalid_cash_flow(format!(
                    "expected period {expected}, found {}",
                    cf.period
                )));
            }
            if cf.is_principal() != (i == last) {
                return Err(CoreError::invalid_cash_flow(format!(
                    "principal must be paid in the final period only (period {})",
                    cf.period
                )));
            }
        }

        let fits = flows
            .iter()
            .all(|cf| cf.coupon.checked_add(cf.principal).is_some())
            && checked_sum(flows.iter().map(CashFlow::amount)).is_some()
            && checked_sum(flows.iter().map(CashFlow::coupon_amount)).is_some();
        if !fits {
            return Err(CoreError::invalid_cash_flow(
                "cash flow totals exceed the decimal range",
            ));
        }

        Ok(Self { flows })
    }

    /// Returns the cash flows as a slice.
    pub fn as_slice(&self) -> &[CashFlow] {
        &self.flows
    }

    /// Returns the number of cash flows.
    pub fn len(&self) -> usize {
        self.flows.len()
    }

    /// Returns true if there are no cash flows.
    ///
    /// Always false for a constructed schedule.
    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// Returns an iterator over the cash flows.
    pub fn iter(&self) -> impl Iterator<Item = &CashFlow> {
        self.flows.iter()
    }

    /// Returns the final (principal-bearing) cash flow.
    pub fn last(&self) -> Option<&CashFlow> {
        self.flows.last()
    }

    /// Returns the undiscounted sum of all flows.
    pub fn total(&self) -> Decimal {
        checked_sum(self.flows.iter().map(CashFlow::amount)).unwrap_or(Decimal::MAX)
    }

    /// Returns the undiscounted sum of coupon components.
    pub fn total_coupons(&self) -> Decimal {
        checked_sum(self.flows.iter().map(CashFlow::coupon_amount)).unwrap_or(Decimal::MAX)
    }

    /// Returns a schedule with every coupon scaled by `1 - tax_rate`.
    ///
    /// Principal is left untouched. Fails when a scaled coupon or the new
    /// totals leave the `Decimal` range.
    pub fn after_tax(&self, tax_rate: Decimal) -> CoreResult<Self> {
        let flows = self
            .flows
            .iter()
            .map(|cf| cf.after_tax(tax_rate))
            .collect::<CoreResult<Vec<_>>>()?;
        Self::new(flows)
    }

    /// Returns `(time, amount)` pairs as `f64` for numerical work.
    pub fn to_f64_pairs(&self) -> Vec<(f64, f64)> {
        use rust_decimal::prelude::ToPrimitive;
        self.flows
            .iter()
            .map(|cf| (cf.time(), cf.amount().to_f64().unwrap_or(0.0)))
            .collect()
    }
}

impl<'a> IntoIterator for &'a CashFlowSchedule {
    type Item = &'a CashFlow;
    type IntoIter = std::slice::Iter<'a, CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.flows.iter()
    }
}

impl IntoIterator for CashFlowSchedule {
    type Item = CashFlow;
    type IntoIter = std::vec::IntoIter<CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.flows.into_iter()
    }
}

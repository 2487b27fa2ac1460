//! Per-bond analytics: yield, duration, after-tax return and ratio.

use serde::{Deserialize, Serialize};
use yieldrank_core::types::BondSpec;

use crate::cashflows::CashFlowModel;
use crate::config::AnalyticsConfig;
use crate::error::AnalyticsResult;
use crate::risk::{macaulay_duration, modified_from_macaulay};
use crate::tax::apply_tax_with;
use crate::yields::YieldSolver;

/// Analytics for one bond.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondMetrics {
    /// Pre-tax yield to maturity.
    pub ytm: f64,
    /// After-tax yield to maturity.
    pub ytm_after_tax: f64,
    /// Macaulay duration at the pre-tax yield, in years.
    pub duration: f64,
    /// Modified duration at the pre-tax yield.
    pub modified_duration: f64,
    /// Unannualized after-tax total return over the holding period.
    pub net_total_return_after_tax: f64,
    /// After-tax yield per year of duration. `None` when duration is
    /// within the configured epsilon of zero.
    pub ytm_duration_ratio: Option<f64>,
    /// Iterations used by the pre-tax yield solve.
    pub yield_iterations: u32,
    /// Iterations used by the after-tax yield solve.
    pub after_tax_iterations: u32,
}

impl BondMetrics {
    /// Runs the full pipeline for one bond.
    ///
    /// Schedule, pre-tax yield, duration, after-tax figures, then the ratio.
    /// A yield solve that runs out of iterations is a convergence error.
    pub fn compute(bond: &BondSpec, config: &AnalyticsConfig) -> AnalyticsResult<Self> {
        bond.validate()?;

        let solver = YieldSolver::new().with_settings(config.solver);
        let schedule = CashFlowModel::schedule_for(bond)?;

        let pre_tax = solver
            .solve(&schedule, bond.price())?
            .require_converged()?;
        let ytm = pre_tax.yield_value;

        let duration = macaulay_duration(&schedule, ytm)?;
        let taxed = apply_tax_with(
            &schedule,
            ytm,
            bond.tax_rate(),
            bond.price(),
            &solver,
            config.tax_treatment,
        )?;

        let ytm_duration_ratio =
            (duration.abs() >= config.duration_epsilon).then(|| taxed.ytm_after_tax / duration);

        log::debug!(
            "{}: ytm {ytm:.6}, after-tax {:.6}, duration {duration:.4}",
            bond.id(),
            taxed.ytm_after_tax
        );

        Ok(Self {
            ytm,
            ytm_after_tax: taxed.ytm_after_tax,
            duration,
            modified_duration: modified_from_macaulay(duration, ytm),
            net_total_return_after_tax: taxed.net_total_return_after_tax,
            ytm_duration_ratio,
            yield_iterations: pre_tax.iterations,
            after_tax_iterations: taxed.iterations,
        })
    }
}

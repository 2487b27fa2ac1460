//! Bracketed yield solver.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use yieldrank_core::types::CashFlowSchedule;
use yieldrank_math::solvers::{expand_upper_bracket, hybrid};
use yieldrank_math::MathError;

use crate::config::SolverSettings;
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::pricing::{present_value, pv_derivative};

/// Outcome of a yield solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldResult {
    /// Solved annual rate (0.05 for 5%).
    pub yield_value: f64,
    /// Newton plus bisection iterations used.
    pub iterations: u32,
    /// Whether the pricing tolerance was met.
    pub converged: bool,
    /// Final relative pricing error, `PV(r) / price - 1`.
    pub residual: f64,
}

impl YieldResult {
    /// Returns the result, or a convergence error if the budget ran out.
    pub fn require_converged(self) -> AnalyticsResult<Self> {
        if self.converged {
            Ok(self)
        } else {
            Err(AnalyticsError::convergence(
                self.iterations,
                format!(
                    "iteration budget exhausted at r = {:.8} (relative residual {:.2e})",
                    self.yield_value, self.residual
                ),
            ))
        }
    }

    fn exact_zero() -> Self {
        Self {
            yield_value: 0.0,
            iterations: 0,
            converged: true,
            residual: 0.0,
        }
    }
}

/// Solves for the yield that reprices a schedule.
///
/// Newton-Raphson runs inside a bracket whose lower end is fixed and whose
/// upper end doubles until the pricing error changes sign. Newton hands
/// over to bisection when it leaves the bracket or stalls.
///
/// A price equal to the undiscounted total returns zero without iterating.
/// A price that no rate inside the bracket can reach is a
/// [`AnalyticsError::Convergence`] error. Running out of iterations inside
/// a valid bracket is reported as `converged = false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct YieldSolver {
    settings: SolverSettings,
}

impl YieldSolver {
    /// Creates a solver with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the solver settings.
    #[must_use]
    pub fn with_settings(mut self, settings: SolverSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Returns the solver settings.
    pub fn settings(&self) -> &SolverSettings {
        &self.settings
    }

    /// Solves for the yield at `price`.
    pub fn solve(&self, schedule: &CashFlowSchedule, price: Decimal) -> AnalyticsResult<YieldResult> {
        self.solve_from(schedule, price, self.settings.initial_guess)
    }

    /// Solves for the yield at `price`, starting Newton at `guess`.
    pub fn solve_with_guess(
        &self,
        schedule: &CashFlowSchedule,
        price: Decimal,
        guess: f64,
    ) -> AnalyticsResult<YieldResult> {
        self.solve_from(schedule, price, Some(guess))
    }

    fn solve_from(
        &self,
        schedule: &CashFlowSchedule,
        price: Decimal,
        guess: Option<f64>,
    ) -> AnalyticsResult<YieldResult> {
        if price <= Decimal::ZERO {
            return Err(AnalyticsError::validation(format!(
                "price must be positive, got {price}"
            )));
        }

        if schedule.total() == price {
            log::trace!("price {price} equals undiscounted total, yield is zero");
            return Ok(YieldResult::exact_zero());
        }

        let price_f = price
            .to_f64()
            .ok_or_else(|| AnalyticsError::InvalidInput(format!("price {price} overflows f64")))?;
        let flows = schedule.to_f64_pairs();

        let objective = |r: f64| (present_value(&flows, r) / price_f - 1.0).min(f64::MAX);
        let derivative = |r: f64| pv_derivative(&flows, r) / price_f;

        let search = self.settings.bracket_search();
        let bracket = expand_upper_bracket(&objective, &search).map_err(|e| match e {
            MathError::InvalidBracket { .. } => AnalyticsError::convergence(
                0,
                format!(
                    "no yield in [{}, {}] reprices the bond at {price}",
                    search.lower, search.upper_cap
                ),
            ),
            other => other.into(),
        })?;

        let start = guess.unwrap_or_else(|| approximate_yield(schedule, price_f));
        log::debug!(
            "solving yield in [{}, {}] from {start:.6}",
            bracket.lower,
            bracket.upper
        );

        match hybrid(
            objective,
            derivative,
            start,
            bracket,
            &self.settings.solver_config(),
        ) {
            Ok(result) => Ok(YieldResult {
                yield_value: result.root,
                iterations: result.iterations,
                converged: true,
                residual: result.residual,
            }),
            Err(MathError::ConvergenceFailed {
                iterations,
                residual,
                last_estimate,
            }) => {
                log::warn!(
                    "yield solver stopped after {iterations} iterations at {last_estimate:.8} \
                     (relative residual {residual:.2e})"
                );
                Ok(YieldResult {
                    yield_value: last_estimate,
                    iterations,
                    converged: false,
                    residual,
                })
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Coupon-plus-pull-to-par approximation used to seed Newton.
fn approximate_yield(schedule: &CashFlowSchedule, price: f64) -> f64 {
    let periods = schedule.len() as f64;
    let coupons = schedule.total_coupons().to_f64().unwrap_or(0.0);
    let principal = schedule
        .last()
        .and_then(|cf| cf.principal_amount().to_f64())
        .unwrap_or(price);

    (coupons / periods + (principal - price) / periods) / ((principal + price) / 2.0)
}

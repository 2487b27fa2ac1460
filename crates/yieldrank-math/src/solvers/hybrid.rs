//! Hybrid root-finding algorithm.
//!
//! Combines Newton-Raphson with bisection for bounded, robust convergence.

use crate::error::{MathError, MathResult};
use crate::solvers::{bisection, Bracket, SolverConfig, SolverResult, MIN_DERIVATIVE};

/// Newton iterations allowed before handing over to bisection.
const NEWTON_BUDGET: u32 = 20;

/// Consecutive residual blow-ups tolerated before Newton is abandoned.
const MAX_DIVERGENCE: u32 = 3;

/// Hybrid root-finding algorithm.
///
/// Starts with Newton-Raphson for fast quadratic convergence and falls back
/// to bisection over `bracket` as soon as Newton misbehaves. The iteration
/// count in the result covers both phases, and the combined total never
/// exceeds `config.max_iterations`.
///
/// # Strategy
///
/// 1. Clamp the initial guess into the bracket and run Newton (at most 20 steps)
/// 2. Abandon Newton if a step leaves the bracket, the derivative vanishes,
///    or the residual keeps growing
/// 3. Bisect the bracket with the remaining iteration budget
///
/// # Example
///
/// ```rust
/// use yieldrank_math::solvers::{hybrid, Bracket, SolverConfig};
///
/// // Find root of x^3 - x - 2
/// let f = |x: f64| x * x * x - x - 2.0;
/// let df = |x: f64| 3.0 * x * x - 1.0;
///
/// let bracket = Bracket::new(&f, 1.0, 2.0).unwrap();
/// let result = hybrid(f, df, 1.5, bracket, &SolverConfig::default()).unwrap();
/// assert!((f(result.root)).abs() < 1e-10);
/// ```
pub fn hybrid<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    bracket: Bracket,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let start = if initial_guess.is_finite() {
        initial_guess.clamp(bracket.lower, bracket.upper)
    } else {
        (bracket.lower + bracket.upper) / 2.0
    };

    let newton_budget = config.max_iterations.min(NEWTON_BUDGET);
    let newton_used = match newton_within(&f, &df, start, &bracket, newton_budget, config) {
        Ok(result) => return Ok(result),
        Err(used) => used,
    };

    log::debug!(
        "Newton gave up after {newton_used} steps, bisecting [{}, {}]",
        bracket.lower,
        bracket.upper
    );

    let remaining = config.max_iterations.saturating_sub(newton_used);
    let bisection_config = config.with_max_iterations(remaining);

    match bisection(&f, bracket.lower, bracket.upper, &bisection_config) {
        Ok(result) => Ok(SolverResult {
            iterations: result.iterations + newton_used,
            ..result
        }),
        Err(MathError::ConvergenceFailed {
            residual,
            last_estimate,
            ..
        }) => Err(MathError::convergence_failed(
            config.max_iterations,
            residual,
            last_estimate,
        )),
        Err(e) => Err(e),
    }
}

/// Newton-Raphson confined to a bracket.
///
/// Returns `Err(steps_used)` when Newton should hand over to bisection.
fn newton_within<F, DF>(
    f: &F,
    df: &DF,
    start: f64,
    bracket: &Bracket,
    budget: u32,
    config: &SolverConfig,
) -> Result<SolverResult, u32>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let mut x = start;
    let mut prev_residual = f64::MAX;
    let mut divergence_count = 0;

    for iteration in 0..budget {
        let fx = f(x);
        let residual = fx.abs();

        if residual < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        if residual > prev_residual * 2.0 {
            divergence_count += 1;
            if divergence_count >= MAX_DIVERGENCE {
                return Err(iteration);
            }
        } else {
            divergence_count = 0;
        }
        prev_residual = residual;

        let dfx = df(x);
        if !dfx.is_finite() || dfx.abs() < MIN_DERIVATIVE {
            return Err(iteration);
        }

        let next = x - fx / dfx;
        if !next.is_finite() || !bracket.contains(next) {
            return Err(iteration + 1);
        }
        x = next;
    }

    let fx = f(x);
    if fx.abs() < config.tolerance {
        return Ok(SolverResult {
            root: x,
            iterations: budget,
            residual: fx,
        });
    }

    Err(budget)
}

//! Root-finding algorithms.
//!
//! This module provides bounded numerical solvers:
//!
//! - [`bisection`]: Simple and reliable bracketing method
//! - [`hybrid`]: Newton-Raphson inside a known bracket, with bisection fallback
//! - [`expand_upper_bracket`]: Grows an upper bound until the function changes sign
//!
//! # Choosing a Solver
//!
//! | Solver | Speed | Reliability | Requires |
//! |--------|-------|-------------|----------|
//! | Bisection | Slow (linear) | Guaranteed | Bracket |
//! | Hybrid | Fast | Guaranteed | Bracket + derivative |
//!
//! All solvers stop on the residual test `|f(x)| < tolerance`. Callers that
//! want a relative criterion normalize `f` before handing it in.
//!
//! # Example: YTM Calculation
//!
//! ```rust
//! use yieldrank_math::solvers::{expand_upper_bracket, hybrid, BracketSearch, SolverConfig};
//!
//! // Bond: 5% coupon, 5 years, price 95, residual relative to price
//! let pv = |y: f64| {
//!     let mut pv = 0.0;
//!     for t in 1..=5 {
//!         pv += 5.0 / (1.0 + y).powi(t);
//!     }
//!     pv + 100.0 / (1.0 + y).powi(5)
//! };
//! let f = |y: f64| pv(y) / 95.0 - 1.0;
//! let df = |y: f64| {
//!     let mut dpv = 0.0;
//!     for t in 1..=5 {
//!         dpv -= f64::from(t) * 5.0 / (1.0 + y).powi(t + 1);
//!     }
//!     (dpv - 5.0 * 100.0 / (1.0 + y).powi(6)) / 95.0
//! };
//!
//! let bracket = expand_upper_bracket(&f, &BracketSearch::default()).unwrap();
//! let result = hybrid(f, df, 0.05, bracket, &SolverConfig::new(1e-6, 100)).unwrap();
//! assert!(result.root > 0.05); // YTM > coupon rate for discount bond
//! ```

mod bisection;
mod bracket;
mod hybrid;

pub use bisection::bisection;
pub use bracket::{
    expand_upper_bracket, Bracket, BracketSearch, DEFAULT_INITIAL_UPPER, DEFAULT_LOWER_BOUND,
    DEFAULT_UPPER_CAP,
};
pub use hybrid::hybrid;

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Derivatives with a magnitude below this are treated as zero.
pub(crate) const MIN_DERIVATIVE: f64 = 1e-15;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}

//! Configuration for bond analytics computation.

use serde::{Deserialize, Serialize};
use yieldrank_math::solvers::{
    BracketSearch, SolverConfig, DEFAULT_INITIAL_UPPER, DEFAULT_LOWER_BOUND, DEFAULT_UPPER_CAP,
};

use crate::tax::TaxTreatment;

/// Default relative pricing tolerance: `|PV - price| < 1e-6 * price`.
pub const DEFAULT_PRICE_TOLERANCE: f64 = 1e-6;

/// Default iteration budget for the yield solver.
pub const DEFAULT_YIELD_MAX_ITERATIONS: u32 = 100;

/// Durations with a magnitude below this cannot produce a ratio.
pub const DEFAULT_DURATION_EPSILON: f64 = 1e-9;

/// Yield solver settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Relative pricing tolerance.
    pub tolerance: f64,

    /// Combined Newton and bisection iteration budget.
    pub max_iterations: u32,

    /// Lowest rate searched.
    pub lower_bound: f64,

    /// First upper bound tried before doubling.
    pub initial_upper: f64,

    /// Upper bound doubling stops here.
    pub upper_cap: f64,

    /// Newton starting point. When unset a coupon-plus-pull-to-par
    /// approximation is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_guess: Option<f64>,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_PRICE_TOLERANCE,
            max_iterations: DEFAULT_YIELD_MAX_ITERATIONS,
            lower_bound: DEFAULT_LOWER_BOUND,
            initial_upper: DEFAULT_INITIAL_UPPER,
            upper_cap: DEFAULT_UPPER_CAP,
            initial_guess: None,
        }
    }
}

impl SolverSettings {
    /// Sets the relative pricing tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the iteration budget.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the bracket search bounds.
    #[must_use]
    pub fn with_bracket(mut self, lower_bound: f64, initial_upper: f64, upper_cap: f64) -> Self {
        self.lower_bound = lower_bound;
        self.initial_upper = initial_upper;
        self.upper_cap = upper_cap;
        self
    }

    /// Sets the Newton starting point.
    #[must_use]
    pub fn with_initial_guess(mut self, guess: f64) -> Self {
        self.initial_guess = Some(guess);
        self
    }

    /// Root-finder configuration derived from these settings.
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig::new(self.tolerance, self.max_iterations)
    }

    /// Bracket search derived from these settings.
    pub fn bracket_search(&self) -> BracketSearch {
        BracketSearch::new(self.lower_bound, self.initial_upper, self.upper_cap)
    }
}

/// Configuration for single-bond and batch analytics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// How tax turns the pre-tax yield into an after-tax yield.
    pub tax_treatment: TaxTreatment,

    /// Bonds whose duration is within this of zero are skipped when ranking.
    pub duration_epsilon: f64,

    /// Enable parallel processing (requires 'parallel' feature).
    pub parallel: bool,

    /// Minimum batch size to trigger parallel processing.
    pub parallel_threshold: usize,

    /// Yield solver settings.
    pub solver: SolverSettings,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            tax_treatment: TaxTreatment::default(),
            duration_epsilon: DEFAULT_DURATION_EPSILON,
            parallel: false,
            parallel_threshold: 8,
            solver: SolverSettings::default(),
        }
    }
}

impl AnalyticsConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the solver settings.
    #[must_use]
    pub fn with_solver(mut self, solver: SolverSettings) -> Self {
        self.solver = solver;
        self
    }

    /// Sets the tax treatment.
    #[must_use]
    pub fn with_tax_treatment(mut self, treatment: TaxTreatment) -> Self {
        self.tax_treatment = treatment;
        self
    }

    /// Sets the degenerate-duration threshold.
    #[must_use]
    pub fn with_duration_epsilon(mut self, epsilon: f64) -> Self {
        self.duration_epsilon = epsilon;
        self
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }
}

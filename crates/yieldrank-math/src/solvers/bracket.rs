//! Bracket search for bounded root finding.

use crate::error::{MathError, MathResult};

/// Default lower bound: rates must stay above -100% for finite discount factors.
pub const DEFAULT_LOWER_BOUND: f64 = -0.99;

/// Default starting upper bound.
pub const DEFAULT_INITIAL_UPPER: f64 = 1.0;

/// Default ceiling for upper-bound doubling.
pub const DEFAULT_UPPER_CAP: f64 = 10.0;

/// Parameters for [`expand_upper_bracket`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketSearch {
    /// Fixed lower end of the bracket.
    pub lower: f64,
    /// First upper bound tried.
    pub initial_upper: f64,
    /// Largest upper bound tried; doubling stops here.
    pub upper_cap: f64,
}

impl Default for BracketSearch {
    fn default() -> Self {
        Self {
            lower: DEFAULT_LOWER_BOUND,
            initial_upper: DEFAULT_INITIAL_UPPER,
            upper_cap: DEFAULT_UPPER_CAP,
        }
    }
}

impl BracketSearch {
    /// Creates a new bracket search.
    #[must_use]
    pub fn new(lower: f64, initial_upper: f64, upper_cap: f64) -> Self {
        Self {
            lower,
            initial_upper,
            upper_cap,
        }
    }

    fn validate(&self) -> MathResult<()> {
        if !(self.lower.is_finite() && self.initial_upper.is_finite() && self.upper_cap.is_finite())
        {
            return Err(MathError::invalid_input("bracket bounds must be finite"));
        }
        if self.initial_upper <= self.lower {
            return Err(MathError::invalid_input(format!(
                "initial upper bound {} must exceed lower bound {}",
                self.initial_upper, self.lower
            )));
        }
        if self.upper_cap < self.initial_upper {
            return Err(MathError::invalid_input(format!(
                "upper cap {} is below initial upper bound {}",
                self.upper_cap, self.initial_upper
            )));
        }
        Ok(())
    }
}

/// An interval `[lower, upper]` over which the function changes sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    /// Lower end.
    pub lower: f64,
    /// Upper end.
    pub upper: f64,
    /// Function value at `lower`.
    pub f_lower: f64,
    /// Function value at `upper`.
    pub f_upper: f64,
}

impl Bracket {
    /// Evaluates `f` at both ends and checks for a sign change.
    pub fn new<F>(f: &F, a: f64, b: f64) -> MathResult<Self>
    where
        F: Fn(f64) -> f64,
    {
        let (lower, upper) = (a.min(b), a.max(b));
        let (f_lower, f_upper) = (f(lower), f(upper));

        if f_lower * f_upper > 0.0 || !f_lower.is_finite() || !f_upper.is_finite() {
            return Err(MathError::InvalidBracket {
                a: lower,
                b: upper,
                fa: f_lower,
                fb: f_upper,
            });
        }

        Ok(Self {
            lower,
            upper,
            f_lower,
            f_upper,
        })
    }

    /// Returns true if `x` lies inside the bracket (inclusive).
    pub fn contains(&self, x: f64) -> bool {
        (self.lower..=self.upper).contains(&x)
    }
}

/// Finds a sign change by keeping the lower bound fixed and doubling the
/// upper bound from `initial_upper` until `f` changes sign, never going past
/// `upper_cap`.
///
/// Fails with [`MathError::InvalidBracket`] (reporting the capped bound) when
/// no sign change exists below the cap.
///
/// # Example
///
/// ```rust
/// use yieldrank_math::solvers::{expand_upper_bracket, BracketSearch};
///
/// let f = |x: f64| x - 3.0;
/// let bracket = expand_upper_bracket(&f, &BracketSearch::default()).unwrap();
/// assert_eq!(bracket.upper, 4.0);
/// ```
pub fn expand_upper_bracket<F>(f: &F, search: &BracketSearch) -> MathResult<Bracket>
where
    F: Fn(f64) -> f64,
{
    search.validate()?;

    let lower = search.lower;
    let f_lower = f(lower);
    if !f_lower.is_finite() {
        return Err(MathError::invalid_input(format!(
            "function is not finite at lower bound {lower}"
        )));
    }

    let mut upper = search.initial_upper;
    loop {
        let f_upper = f(upper);

        if f_lower * f_upper <= 0.0 {
            return Ok(Bracket {
                lower,
                upper,
                f_lower,
                f_upper,
            });
        }

        if upper >= search.upper_cap {
            log::debug!("no sign change in [{lower}, {upper}]");
            return Err(MathError::InvalidBracket {
                a: lower,
                b: upper,
                fa: f_lower,
                fb: f_upper,
            });
        }

        upper = (upper * 2.0).min(search.upper_cap);
        log::trace!("expanding upper bracket to {upper}");
    }
}

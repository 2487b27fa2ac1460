//! Error types for the analytics engine.

use thiserror::Error;
use yieldrank_core::CoreError;
use yieldrank_math::MathError;

/// Error type for all analytics operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
    /// Input rejected before any computation ran.
    #[error("validation error: {reason}")]
    Validation {
        /// What was rejected.
        reason: String,
    },

    /// Yield solver found no root or ran out of iterations.
    #[error("yield solver failed to converge after {iterations} iterations: {reason}")]
    Convergence {
        /// Number of iterations before failure.
        iterations: u32,
        /// Reason for failure.
        reason: String,
    },

    /// Invalid input parameter to a low-level calculation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Division by zero or a vanishing denominator.
    #[error("division by zero: {0}")]
    DivisionByZero(String),

    /// Math/solver error
    #[error("math error: {0}")]
    MathError(String),
}

/// Result type alias for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

impl AnalyticsError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }

    /// Creates a convergence error.
    #[must_use]
    pub fn convergence(iterations: u32, reason: impl Into<String>) -> Self {
        Self::Convergence {
            iterations,
            reason: reason.into(),
        }
    }

    /// Returns true for input validation failures.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Returns true for solver convergence failures.
    pub fn is_convergence(&self) -> bool {
        matches!(self, Self::Convergence { .. })
    }
}

impl From<CoreError> for AnalyticsError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidBondSpec { reason } => AnalyticsError::Validation { reason },
            other => AnalyticsError::InvalidInput(other.to_string()),
        }
    }
}

impl From<MathError> for AnalyticsError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::ConvergenceFailed { iterations, .. } => AnalyticsError::Convergence {
                iterations,
                reason: err.to_string(),
            },
            MathError::InvalidBracket { .. } => AnalyticsError::Convergence {
                iterations: 0,
                reason: err.to_string(),
            },
            MathError::InvalidInput { .. } => AnalyticsError::MathError(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnalyticsError::convergence(100, "did not converge");
        assert!(err.to_string().contains("100 iterations"));
        assert!(err.is_convergence());

        let err = AnalyticsError::validation("batch of 21 bonds exceeds limit of 20");
        assert!(err.to_string().starts_with("validation error"));
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_core_error() {
        let err: AnalyticsError = CoreError::invalid_bond_spec("price must be positive").into();
        assert_eq!(
            err,
            AnalyticsError::Validation {
                reason: "price must be positive".to_string()
            }
        );
    }

    #[test]
    fn test_from_math_error() {
        let err: AnalyticsError = MathError::InvalidBracket {
            a: -0.99,
            b: 10.0,
            fa: -0.5,
            fb: -0.9,
        }
        .into();
        assert!(err.is_convergence());

        let err: AnalyticsError = MathError::convergence_failed(100, 1e-3, 0.05).into();
        match err {
            AnalyticsError::Convergence { iterations, .. } => assert_eq!(iterations, 100),
            other => panic!("unexpected {other:?}"),
        }
    }
}

//! Yield-to-maturity calculation.
//!
//! The yield is the constant annual rate `r` at which the discounted
//! schedule reprices the bond:
//!
//! ```text
//! Σ CF_t / (1 + r)^t = price
//! ```
//!
//! # Usage
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use yieldrank_analytics::cashflows::build_schedule;
//! use yieldrank_analytics::yields::YieldSolver;
//!
//! let schedule = build_schedule(dec!(1000), dec!(0.05), 10).unwrap();
//! let result = YieldSolver::new().solve(&schedule, dec!(1000)).unwrap();
//! assert!(result.converged);
//! assert!((result.yield_value - 0.05).abs() < 1e-6);
//! ```

mod solver;

pub use solver::{YieldResult, YieldSolver};

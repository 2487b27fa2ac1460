//! # Yieldrank Math
//!
//! Numerical building blocks for the Yieldrank bond analytics library.
//!
//! This crate provides:
//!
//! - **Solvers**: Bounded root-finding (bisection, and a
//!   Newton-with-bisection-fallback hybrid)
//! - **Bracketing**: Adaptive upper-bound expansion for sign-change search
//!
//! ## Design Philosophy
//!
//! - **Bounded**: every iteration loop has an explicit budget
//! - **Honest failure**: no root is reported without a residual inside tolerance
//! - **Generic**: solvers take plain `Fn(f64) -> f64` closures

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{
        bisection, expand_upper_bracket, hybrid, Bracket, BracketSearch, SolverConfig,
        SolverResult,
    };
}

pub use error::{MathError, MathResult};

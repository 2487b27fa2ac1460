//! # Yieldrank Core
//!
//! Core types for the Yieldrank bond analytics library.
//!
//! This crate provides the value types shared by the analytics engine and
//! its callers:
//!
//! - **Bond specification**: [`BondSpec`](types::BondSpec), validated at construction
//! - **Cash flows**: [`CashFlow`](types::CashFlow) and [`CashFlowSchedule`](types::CashFlowSchedule)
//! - **Dates**: year-fraction helper for purchase/maturity dates
//!
//! ## Design Philosophy
//!
//! - **Validated values**: a `BondSpec` that exists satisfies its invariants
//! - **Exact inputs**: money and rates are `Decimal`, so sums are exact
//! - **Immutable**: nothing here is mutated after construction
//!
//! ## Example
//!
//! ```rust
//! use yieldrank_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let bond = BondSpec::builder()
//!     .id("ACME 5% 2030")
//!     .face_value(dec!(1000))
//!     .price(dec!(950))
//!     .coupon_rate(dec!(0.05))
//!     .tax_rate(dec!(0.2))
//!     .years_to_maturity(5.0)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(bond.periods(), 5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{
        years_between, BondId, BondSpec, BondSpecBuilder, CashFlow, CashFlowSchedule,
        CashFlowType,
    };
}

pub use error::{CoreError, CoreResult};

//! # Yieldrank Analytics
//!
//! Analytics engine for annual-pay, fixed-coupon bullet bonds.
//!
//! - **Cash Flows**: coupon and principal schedule from a bond specification
//! - **Yields**: bracketed Newton/bisection yield-to-maturity solver
//! - **Risk**: Macaulay and modified duration
//! - **Tax**: after-tax yield and net total return with coupon-only taxation
//! - **Ranking**: after-tax yield per year of duration across up to 20 bonds
//!
//! ## Pipeline
//!
//! ```text
//! BondSpec -> CashFlowModel -> YieldSolver -> duration -> tax -> BondMetrics
//!                                                               -> AttractivenessRanker
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use yieldrank_analytics::prelude::*;
//! use yieldrank_core::types::BondSpec;
//!
//! let bonds: Vec<BondSpec> = [(dec!(950), 5.0), (dec!(980), 3.0)]
//!     .into_iter()
//!     .enumerate()
//!     .map(|(i, (price, years))| {
//!         BondSpec::builder()
//!             .id(format!("B{i}"))
//!             .face_value(dec!(1000))
//!             .price(price)
//!             .coupon_rate(dec!(0.05))
//!             .tax_rate(dec!(0.2))
//!             .years_to_maturity(years)
//!             .build()
//!             .unwrap()
//!     })
//!     .collect();
//!
//! let batch = compute_batch(&bonds).unwrap();
//! assert_eq!(batch.ranked[0].rank, 1);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]

pub mod error;

pub use error::{AnalyticsError, AnalyticsResult};

pub mod cashflows;
pub mod config;
pub mod functions;
pub mod metrics;
pub mod pricing;
pub mod ranking;
pub mod risk;
pub mod tax;
pub mod yields;

/// Prelude module for convenient imports.
///
/// ```rust
/// use yieldrank_analytics::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{AnalyticsError, AnalyticsResult};

    // Cash flows
    pub use crate::cashflows::{build_schedule, CashFlowModel};

    // Configuration
    pub use crate::config::{AnalyticsConfig, SolverSettings};

    // Yields
    pub use crate::yields::{YieldResult, YieldSolver};

    // Pricing
    pub use crate::pricing::{present_value, pv_derivative};

    // Risk
    pub use crate::risk::{macaulay_duration, modified_duration, modified_from_macaulay};

    // Tax
    pub use crate::tax::{apply_tax, apply_tax_with, TaxAdjustedReturn, TaxTreatment};

    // Ranking
    pub use crate::ranking::{
        rank_evaluated, AttractivenessRanker, BatchResult, RankedBond, SkipReason, SkippedBond,
        MAX_BATCH_SIZE,
    };

    // Standalone functions
    pub use crate::functions::{
        compute_batch, compute_batch_with_config, compute_single_bond,
        compute_single_bond_with_config,
    };
    pub use crate::metrics::BondMetrics;
}

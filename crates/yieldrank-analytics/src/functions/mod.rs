//! Standalone entry points for bond analytics.
//!
//! # Example
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use yieldrank_analytics::functions::{compute_batch, compute_single_bond};
//! use yieldrank_core::types::BondSpec;
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
//! let metrics = compute_single_bond(&bond).unwrap();
//! assert!(metrics.ytm > metrics.ytm_after_tax);
//!
//! let batch = compute_batch(&[bond]).unwrap();
//! assert_eq!(batch.ranked.len(), 1);
//! ```

use yieldrank_core::types::BondSpec;

use crate::config::AnalyticsConfig;
use crate::error::AnalyticsResult;
use crate::metrics::BondMetrics;
use crate::ranking::{AttractivenessRanker, BatchResult};

/// Computes analytics for one bond with default configuration.
///
/// Fails with a validation error for an invalid bond and a convergence
/// error when no yield can be solved.
pub fn compute_single_bond(bond: &BondSpec) -> AnalyticsResult<BondMetrics> {
    compute_single_bond_with_config(bond, &AnalyticsConfig::default())
}

/// Computes analytics for one bond.
pub fn compute_single_bond_with_config(
    bond: &BondSpec,
    config: &AnalyticsConfig,
) -> AnalyticsResult<BondMetrics> {
    BondMetrics::compute(bond, config)
}

/// Ranks a batch of 1 to 20 bonds with default configuration.
pub fn compute_batch(bonds: &[BondSpec]) -> AnalyticsResult<BatchResult> {
    compute_batch_with_config(bonds, &AnalyticsConfig::default())
}

/// Ranks a batch of 1 to 20 bonds.
pub fn compute_batch_with_config(
    bonds: &[BondSpec],
    config: &AnalyticsConfig,
) -> AnalyticsResult<BatchResult> {
    AttractivenessRanker::new()
        .with_config(config.clone())
        .rank(bonds)
}

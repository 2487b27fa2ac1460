//! Batch evaluation and ordering.

use serde::{Deserialize, Serialize};
use yieldrank_core::types::{BondId, BondSpec};

use crate::config::AnalyticsConfig;
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::metrics::BondMetrics;

/// Largest batch accepted by [`AttractivenessRanker::rank`].
pub const MAX_BATCH_SIZE: usize = 20;

/// A bond that made it into the ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedBond {
    /// 1 is the most attractive.
    pub rank: usize,
    /// Position in the input batch.
    pub index: usize,
    /// Caller-supplied identifier.
    pub id: BondId,
    /// After-tax yield over duration.
    pub ratio: f64,
    /// Full analytics.
    pub metrics: BondMetrics,
}

/// Why a bond was left out of the ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// Duration too close to zero for a ratio.
    DegenerateDuration {
        /// The offending duration.
        duration: f64,
    },
    /// The yield could not be solved.
    NonConvergent {
        /// Solver failure message.
        reason: String,
    },
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::DegenerateDuration { duration } => {
                write!(f, "degenerate duration {duration:.3e}")
            }
            SkipReason::NonConvergent { reason } => write!(f, "no yield: {reason}"),
        }
    }
}

/// A bond excluded from the ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedBond {
    /// Position in the input batch.
    pub index: usize,
    /// Caller-supplied identifier.
    pub id: BondId,
    /// Why it was excluded.
    pub reason: SkipReason,
}

/// Ranked and skipped bonds from one batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    /// Ranked bonds, most attractive first.
    pub ranked: Vec<RankedBond>,
    /// Skipped bonds in input order.
    pub skipped: Vec<SkippedBond>,
}

impl BatchResult {
    /// Most attractive bond, if any were ranked.
    pub fn best(&self) -> Option<&RankedBond> {
        self.ranked.first()
    }

    /// Least attractive bond, if any were ranked.
    pub fn worst(&self) -> Option<&RankedBond> {
        self.ranked.last()
    }

    /// Input indices in ranked order.
    pub fn order(&self) -> Vec<usize> {
        self.ranked.iter().map(|r| r.index).collect()
    }
}

/// Ranks bonds by after-tax yield per year of duration.
#[derive(Debug, Clone, Default)]
pub struct AttractivenessRanker {
    config: AnalyticsConfig,
}

impl AttractivenessRanker {
    /// Creates a ranker with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_config(mut self, config: AnalyticsConfig) -> Self {
        self.config = config;
        self
    }

    /// Evaluates and ranks a batch of 1 to 20 bonds.
    ///
    /// The whole batch is validated before anything is computed: a bad size
    /// or any invalid bond fails with [`AnalyticsError::Validation`].
    /// Convergence failures and degenerate durations are isolated per bond
    /// and reported in [`BatchResult::skipped`]. Any other per-bond error,
    /// such as unusable solver settings, fails the batch.
    pub fn rank(&self, bonds: &[BondSpec]) -> AnalyticsResult<BatchResult> {
        validate_batch(bonds)?;

        let outcomes = evaluate_all(bonds, &self.config);

        let mut rows = Vec::with_capacity(bonds.len());
        let mut skipped = Vec::new();
        for (index, (bond, outcome)) in bonds.iter().zip(outcomes).enumerate() {
            let reason = match outcome {
                Ok(metrics) => {
                    rows.push((index, bond.id().clone(), metrics));
                    continue;
                }
                Err(e) => skip_reason(&e).ok_or_else(|| {
                    log::error!("bond {index} ({}) failed: {e}", bond.id());
                    e
                })?,
            };
            log::warn!("skipping bond {index} ({}): {reason}", bond.id());
            skipped.push(SkippedBond {
                index,
                id: bond.id().clone(),
                reason,
            });
        }

        Ok(order_rows(rows, skipped, self.config.duration_epsilon))
    }
}

/// Orders already-evaluated bonds.
///
/// Applies the same degenerate-duration rule, with `config.duration_epsilon`,
/// and stable descending sort as [`AttractivenessRanker::rank`]. Indices are
/// positions in `rows`.
pub fn rank_evaluated(rows: Vec<(BondId, BondMetrics)>, config: &AnalyticsConfig) -> BatchResult {
    let rows = rows
        .into_iter()
        .enumerate()
        .map(|(index, (id, metrics))| (index, id, metrics))
        .collect();
    order_rows(rows, Vec::new(), config.duration_epsilon)
}

/// Per-bond failures that exclude the bond instead of failing the batch.
fn skip_reason(err: &AnalyticsError) -> Option<SkipReason> {
    match err {
        AnalyticsError::Convergence { .. } => Some(SkipReason::NonConvergent {
            reason: err.to_string(),
        }),
        AnalyticsError::DivisionByZero(_) => Some(SkipReason::DegenerateDuration { duration: 0.0 }),
        _ => None,
    }
}

fn validate_batch(bonds: &[BondSpec]) -> AnalyticsResult<()> {
    if bonds.is_empty() {
        return Err(AnalyticsError::validation("batch must contain at least one bond"));
    }
    if bonds.len() > MAX_BATCH_SIZE {
        return Err(AnalyticsError::validation(format!(
            "batch of {} bonds exceeds limit of {MAX_BATCH_SIZE}",
            bonds.len()
        )));
    }
    for (index, bond) in bonds.iter().enumerate() {
        bond.validate().map_err(|e| {
            AnalyticsError::validation(format!("bond {index} ({}): {e}", bond.id()))
        })?;
    }
    Ok(())
}

fn evaluate_all(bonds: &[BondSpec], config: &AnalyticsConfig) -> Vec<AnalyticsResult<BondMetrics>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(bonds.len()) {
            return bonds
                .par_iter()
                .map(|bond| BondMetrics::compute(bond, config))
                .collect();
        }
    }

    bonds
        .iter()
        .map(|bond| BondMetrics::compute(bond, config))
        .collect()
}

fn order_rows(
    rows: Vec<(usize, BondId, BondMetrics)>,
    mut skipped: Vec<SkippedBond>,
    epsilon: f64,
) -> BatchResult {
    let mut ranked = Vec::with_capacity(rows.len());

    for (index, id, metrics) in rows {
        match metrics.ytm_duration_ratio {
            Some(ratio) if metrics.duration.abs() >= epsilon => ranked.push(RankedBond {
                rank: 0,
                index,
                id,
                ratio,
                metrics,
            }),
            _ => {
                log::warn!(
                    "skipping bond {index} ({id}): duration {} below {epsilon}",
                    metrics.duration
                );
                skipped.push(SkippedBond {
                    index,
                    id,
                    reason: SkipReason::DegenerateDuration {
                        duration: metrics.duration,
                    },
                });
            }
        }
    }

    // Stable: equal ratios keep input order
    ranked.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));
    for (position, bond) in ranked.iter_mut().enumerate() {
        bond.rank = position + 1;
    }
    skipped.sort_by_key(|s| s.index);

    BatchResult { ranked, skipped }
}

//! Attractiveness ranking across a batch of bonds.
//!
//! Each bond is scored by its after-tax yield per year of Macaulay
//! duration. Bonds are ranked by that ratio, highest first, with ties kept
//! in input order. Bonds that cannot be scored are reported as skipped
//! rather than failing the batch.

mod ranker;

pub use ranker::{
    rank_evaluated, AttractivenessRanker, BatchResult, RankedBond, SkipReason, SkippedBond,
    MAX_BATCH_SIZE,
};

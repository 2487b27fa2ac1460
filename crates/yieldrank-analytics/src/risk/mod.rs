//! Interest-rate risk measures.
//!
//! - **Macaulay duration**: PV-weighted average time to receipt
//! - **Modified duration**: Macaulay duration scaled by `1 / (1 + r)`

pub mod duration;

pub use duration::{
    macaulay_duration, macaulay_from_flows, modified_duration, modified_from_macaulay,
    price_change_from_duration,
};

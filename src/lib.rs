//! Umbrella crate for the house price estimator workspace.
//!
//! Re-exports [`house_price_core`] so the demos can `use house_price_rs::prelude::*`.
pub use house_price_core::*;

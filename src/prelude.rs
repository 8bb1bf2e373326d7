//! Prelude module for comb_day crate.
//!
//! Re-exports the derive_more macros used across modules.

#[allow(unused_imports)]
pub use derive_more::{Display, From, Into};

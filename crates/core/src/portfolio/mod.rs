//! Portfolio module - valuation of the asset inventory.

pub mod valuation;

pub use valuation::*;

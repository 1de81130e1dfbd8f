//! Asset valuation module.
//!
//! Turns stored asset records into current values and the reports built on
//! them: asset list, asset detail, inventory, depreciation, funding and the
//! dashboard summary.

mod valuation_calculator;
mod valuation_model;
mod valuation_service;
mod valuation_traits;

pub use valuation_calculator::*;
pub use valuation_model::*;
pub use valuation_service::ValuationService;
pub use valuation_traits::ValuationServiceTrait;

#[cfg(test)]
mod valuation_service_tests;

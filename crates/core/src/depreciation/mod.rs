//! Depreciation module - input models and the current value calculator.

mod depreciation_calculator;
mod depreciation_model;


pub use depreciation_calculator::{
    compute_current_value, compute_current_value_as_of, depreciation_info,
    try_compute_current_value_as_of,
};
pub use depreciation_model::{
    DepreciationDefaults, DepreciationInfo, DepreciationInput, DepreciationMethod, PurchaseDate,
};

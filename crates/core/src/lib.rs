//! Assetdesk Core - depreciation engine and valuation reports.
//!
//! This crate contains the valuation logic behind the asset management
//! screens. It is storage-agnostic: asset records arrive through
//! `AssetRepositoryTrait`, "today" arrives through `Clock`, and every
//! number handed back is ready for display or summation.

pub mod assets;
pub mod constants;
pub mod depreciation;
pub mod errors;
pub mod portfolio;
pub mod settings;
pub mod utils;

// Re-export common types from asset and depreciation modules
pub use assets::*;
pub use depreciation::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

//! Core error types for the Assetdesk valuation core.
//!
//! Storage lives outside this crate, so repository failures are carried as
//! strings. Depreciation errors never leave the calculator's fail-soft entry
//! points; they are exposed only through the explicit `try_*` functions.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the valuation core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

/// Reasons a depreciation value could not be computed.
///
/// The fail-soft calculator folds every one of these into "return the
/// purchase price".
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DepreciationError {
    #[error("Purchase date '{0}' is not a YYYY-MM-DD date")]
    InvalidPurchaseDate(String),

    #[error("Useful life of zero years cannot be depreciated")]
    ZeroUsefulLife,

    #[error(
        "Depreciation produced a non-finite value ({method}, useful life {useful_life_years}, \
         {years_owned:.4} years owned)"
    )]
    NonFiniteValue {
        method: String,
        useful_life_years: i64,
        years_owned: f64,
    },
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

//! Depreciation domain models.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SALVAGE_VALUE, DEFAULT_USEFUL_LIFE_YEARS, PURCHASE_DATE_FORMAT};
use crate::errors::DepreciationError;

/// Depreciation method recorded on an asset.
///
/// Stored as a free-form string column. Anything other than the two known
/// methods, an empty value included, is kept verbatim in `Other` and applies
/// no depreciation until the asset is fully depreciated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DepreciationMethod {
    #[default]
    StraightLine,
    DecliningBalance,
    /// Depreciation explicitly disabled (`"none"`)
    None,
    Other(String),
}

impl DepreciationMethod {
    pub fn as_str(&self) -> &str {
        match self {
            DepreciationMethod::StraightLine => "straight_line",
            DepreciationMethod::DecliningBalance => "declining_balance",
            DepreciationMethod::None => "none",
            DepreciationMethod::Other(raw) => raw,
        }
    }

    /// Whether the record asks for depreciation at all.
    ///
    /// Unknown methods still count: reports list them, the calculator simply
    /// leaves their value at purchase price until fully depreciated.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, DepreciationMethod::None)
    }
}

impl From<&str> for DepreciationMethod {
    fn from(raw: &str) -> Self {
        match raw {
            "straight_line" => DepreciationMethod::StraightLine,
            "declining_balance" => DepreciationMethod::DecliningBalance,
            "none" => DepreciationMethod::None,
            other => DepreciationMethod::Other(other.to_string()),
        }
    }
}

impl From<String> for DepreciationMethod {
    fn from(raw: String) -> Self {
        DepreciationMethod::from(raw.as_str())
    }
}

impl From<DepreciationMethod> for String {
    fn from(method: DepreciationMethod) -> Self {
        match method {
            DepreciationMethod::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for DepreciationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Purchase date as it comes off an asset record: either a real date or the
/// raw text of the column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PurchaseDate {
    Date(NaiveDate),
    Text(String),
}

impl PurchaseDate {
    /// Empty text is treated the same as a missing date.
    pub fn is_blank(&self) -> bool {
        matches!(self, PurchaseDate::Text(raw) if raw.is_empty())
    }

    /// Resolves the value to a calendar date, parsing `YYYY-MM-DD` text.
    pub fn resolve(&self) -> Result<NaiveDate, DepreciationError> {
        match self {
            PurchaseDate::Date(date) => Ok(*date),
            PurchaseDate::Text(raw) => NaiveDate::parse_from_str(raw, PURCHASE_DATE_FORMAT)
                .map_err(|_| DepreciationError::InvalidPurchaseDate(raw.clone())),
        }
    }
}

impl From<NaiveDate> for PurchaseDate {
    fn from(date: NaiveDate) -> Self {
        PurchaseDate::Date(date)
    }
}

impl From<&str> for PurchaseDate {
    fn from(raw: &str) -> Self {
        PurchaseDate::Text(raw.to_string())
    }
}

impl From<String> for PurchaseDate {
    fn from(raw: String) -> Self {
        PurchaseDate::Text(raw)
    }
}

/// Acquisition facts for a single depreciation computation.
///
/// Built per call from an asset record; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct DepreciationInput {
    /// Original acquisition cost per unit
    pub purchase_price: Option<f64>,
    pub purchase_date: Option<PurchaseDate>,
    /// Floor the asset depreciates toward
    pub salvage_value: f64,
    pub useful_life_years: i64,
    pub method: DepreciationMethod,
}

impl Default for DepreciationInput {
    fn default() -> Self {
        Self {
            purchase_price: None,
            purchase_date: None,
            salvage_value: DEFAULT_SALVAGE_VALUE,
            useful_life_years: DEFAULT_USEFUL_LIFE_YEARS,
            method: DepreciationMethod::default(),
        }
    }
}

impl DepreciationInput {
    pub fn new(purchase_price: f64, purchase_date: impl Into<PurchaseDate>) -> Self {
        Self {
            purchase_price: Some(purchase_price),
            purchase_date: Some(purchase_date.into()),
            ..Self::default()
        }
    }

    pub fn with_salvage_value(mut self, salvage_value: f64) -> Self {
        self.salvage_value = salvage_value;
        self
    }

    pub fn with_useful_life_years(mut self, useful_life_years: i64) -> Self {
        self.useful_life_years = useful_life_years;
        self
    }

    pub fn with_method(mut self, method: impl Into<DepreciationMethod>) -> Self {
        self.method = method.into();
        self
    }
}

/// Values applied when an asset record leaves a depreciation field empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DepreciationDefaults {
    pub salvage_value: f64,
    pub useful_life_years: i64,
    pub method: DepreciationMethod,
}

impl Default for DepreciationDefaults {
    fn default() -> Self {
        Self {
            salvage_value: DEFAULT_SALVAGE_VALUE,
            useful_life_years: DEFAULT_USEFUL_LIFE_YEARS,
            method: DepreciationMethod::StraightLine,
        }
    }
}

/// Depreciation figures shown on the asset detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepreciationInfo {
    /// Purchase price minus current value, per unit
    pub amount: f64,
    /// `amount` as a percentage of the purchase price
    pub percentage: f64,
    pub current_value: f64,
}

//! Asset valuation and report models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::depreciation::{DepreciationInfo, DepreciationMethod};

/// One asset valued as of a date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetValuation {
    pub name: String,
    pub category: String,
    pub department: Option<String>,
    pub quantity: i64,
    /// Purchase price per unit
    pub unit_price: f64,
    /// Depreciated value per unit
    pub unit_current_value: f64,
    /// `unit_price × quantity`
    pub purchase_value: f64,
    /// `unit_current_value × quantity`
    pub current_value: f64,
    pub depreciation_amount: f64,
    /// Depreciation as a percentage of purchase value, 0 when nothing was paid
    pub depreciation_percent: f64,
    pub method: DepreciationMethod,
    pub useful_life_years: i64,
    pub salvage_value: f64,
    /// Parsed purchase date, if the record has a valid one
    pub purchase_date: Option<NaiveDate>,
    /// Years since purchase, rounded to two decimals
    pub age_years: Option<f64>,
}

/// Single asset view with optional depreciation figures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetDetail {
    pub name: String,
    pub as_of: NaiveDate,
    /// Current value of one unit; the purchase price when depreciation is off
    pub current_value: f64,
    pub depreciation: Option<DepreciationInfo>,
}

/// All assets with their current total value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InventoryReport {
    pub as_of: NaiveDate,
    /// Sorted by asset name
    pub assets: Vec<AssetValuation>,
    pub total_items: usize,
    pub total_units: i64,
    pub total_value: f64,
}

/// Depreciation totals for one method.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MethodBreakdown {
    pub method: DepreciationMethod,
    pub count: usize,
    pub total_depreciation: f64,
    pub assets: Vec<String>,
}

/// Depreciation totals for one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDepreciation {
    pub category: String,
    pub count: usize,
    pub total_depreciation: f64,
    /// Mean of the assets' depreciation percentages, two decimals
    pub avg_depreciation_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DepreciationReport {
    pub as_of: NaiveDate,
    pub generated_at: DateTime<Utc>,
    /// Dated, depreciating assets sorted by depreciation amount, highest first
    pub assets: Vec<AssetValuation>,
    pub total_purchase_value: f64,
    pub total_current_value: f64,
    pub total_depreciation: f64,
    /// Total depreciation as a percentage of total purchase value
    pub depreciation_rate: f64,
    pub method_breakdown: Vec<MethodBreakdown>,
    pub category_breakdown: Vec<CategoryDepreciation>,
}

/// One funding report row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FundingItem {
    pub name: String,
    pub category: String,
    pub department: Option<String>,
    pub quantity: i64,
    pub purchase_value: f64,
    pub current_value: f64,
    pub purchase_date: Option<NaiveDate>,
}

/// Funding totals for one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub category: String,
    pub count: usize,
    pub purchase_value: f64,
    pub current_value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FundingReport {
    pub as_of: NaiveDate,
    /// Sorted by purchase value, highest first
    pub items: Vec<FundingItem>,
    pub category_summary: Vec<CategorySummary>,
    pub total_investment: f64,
    pub total_current_value: f64,
}

/// Dashboard and status page totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub as_of: NaiveDate,
    pub total_assets: usize,
    pub total_units: i64,
    pub total_purchase_value: f64,
    pub total_current_value: f64,
    pub low_stock_count: usize,
}

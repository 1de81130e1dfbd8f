//! Asset record model.

use serde::{Deserialize, Serialize};

use crate::constants::UNCATEGORIZED;
use crate::depreciation::{
    DepreciationDefaults, DepreciationInput, DepreciationMethod, PurchaseDate,
};

/// Asset as stored by the inventory application.
///
/// Field names follow the stored columns. Depreciation fields are optional
/// because records created before depreciation tracking never set them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Unique asset name, used as the record key
    pub name: String,
    pub category: Option<String>,
    pub department: Option<String>,
    pub supplier: Option<String>,
    #[serde(default)]
    pub quantity: i64,
    pub low_stock_threshold: Option<i64>,
    /// Purchase price per unit
    pub price: Option<f64>,
    pub purchase_date: Option<PurchaseDate>,
    pub salvage_value: Option<f64>,
    pub useful_life_years: Option<i64>,
    pub depreciation_method: Option<DepreciationMethod>,
}

impl Asset {
    pub fn new(name: impl Into<String>, quantity: i64, price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            price: Some(price),
            ..Self::default()
        }
    }

    pub fn category_name(&self) -> &str {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(UNCATEGORIZED)
    }

    pub fn unit_price(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    /// Price multiplied by quantity.
    pub fn purchase_value(&self) -> f64 {
        self.unit_price() * self.quantity as f64
    }

    pub fn has_purchase_date(&self) -> bool {
        self.purchase_date.as_ref().is_some_and(|d| !d.is_blank())
    }

    pub fn method(&self, defaults: &DepreciationDefaults) -> DepreciationMethod {
        self.depreciation_method
            .clone()
            .unwrap_or_else(|| defaults.method.clone())
    }

    /// Whether the record itself names a depreciation method other than `none`.
    ///
    /// Defaults never count here: a missing or empty column is not a recorded
    /// method.
    pub fn has_recorded_method(&self) -> bool {
        self.depreciation_method
            .as_ref()
            .is_some_and(|m| m.is_enabled() && !m.as_str().is_empty())
    }

    pub fn is_low_stock(&self, default_threshold: i64) -> bool {
        self.quantity < self.low_stock_threshold.unwrap_or(default_threshold)
    }

    /// Builds the calculator input, filling empty fields from `defaults`.
    pub fn depreciation_input(&self, defaults: &DepreciationDefaults) -> DepreciationInput {
        DepreciationInput {
            purchase_price: self.price,
            purchase_date: self.purchase_date.clone(),
            salvage_value: self.salvage_value.unwrap_or(defaults.salvage_value),
            useful_life_years: self.useful_life_years.unwrap_or(defaults.useful_life_years),
            method: self.method(defaults),
        }
    }
}

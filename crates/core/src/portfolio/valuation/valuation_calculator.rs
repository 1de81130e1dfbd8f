use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::assets::Asset;
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::depreciation::{compute_current_value_as_of, depreciation_info, DepreciationDefaults};
use crate::portfolio::valuation::valuation_model::{
    AssetDetail, AssetValuation, CategoryDepreciation, CategorySummary, DepreciationReport,
    FundingItem, FundingReport, InventoryReport, MethodBreakdown, PortfolioSummary,
};
use crate::utils::time_utils::years_between;

/// Values a single asset as of `as_of`.
///
/// The calculator works per unit; totals are scaled by the record's quantity.
pub fn value_asset(
    asset: &Asset,
    defaults: &DepreciationDefaults,
    as_of: NaiveDate,
) -> AssetValuation {
    let input = asset.depreciation_input(defaults);
    let unit_current_value = compute_current_value_as_of(&input, as_of);

    let quantity = asset.quantity as f64;
    let purchase_value = asset.purchase_value();
    let current_value = unit_current_value * quantity;
    let depreciation_amount = purchase_value - current_value;

    let purchase_date = asset
        .purchase_date
        .as_ref()
        .and_then(|d| d.resolve().ok());

    AssetValuation {
        name: asset.name.clone(),
        category: asset.category_name().to_string(),
        department: asset.department.clone(),
        quantity: asset.quantity,
        unit_price: asset.unit_price(),
        unit_current_value,
        purchase_value,
        current_value,
        depreciation_amount,
        depreciation_percent: percent_of(depreciation_amount, purchase_value),
        method: input.method,
        useful_life_years: input.useful_life_years,
        salvage_value: input.salvage_value,
        purchase_date,
        age_years: purchase_date
            .map(|d| round_dp(years_between(d, as_of), DISPLAY_DECIMAL_PRECISION)),
    }
}

/// Values every asset, sorted by name for the asset list.
pub fn value_assets(
    assets: &[Asset],
    defaults: &DepreciationDefaults,
    as_of: NaiveDate,
) -> Vec<AssetValuation> {
    let mut valuations: Vec<AssetValuation> = assets
        .iter()
        .map(|asset| value_asset(asset, defaults, as_of))
        .collect();
    valuations.sort_by(|a, b| a.name.cmp(&b.name));
    valuations
}

/// Builds the single-asset view.
///
/// Depreciation figures are shown only for records that name a method
/// themselves; otherwise the current value is the purchase price.
pub fn build_asset_detail(
    asset: &Asset,
    defaults: &DepreciationDefaults,
    as_of: NaiveDate,
) -> AssetDetail {
    let depreciation = if asset.has_recorded_method() {
        depreciation_info(&asset.depreciation_input(defaults), as_of)
    } else {
        None
    };
    let current_value = depreciation
        .as_ref()
        .map(|info| info.current_value)
        .unwrap_or_else(|| asset.unit_price());

    AssetDetail {
        name: asset.name.clone(),
        as_of,
        current_value,
        depreciation,
    }
}

pub fn build_inventory_report(
    assets: &[Asset],
    defaults: &DepreciationDefaults,
    as_of: NaiveDate,
) -> InventoryReport {
    let valuations = value_assets(assets, defaults, as_of);

    InventoryReport {
        as_of,
        total_items: valuations.len(),
        total_units: valuations.iter().map(|v| v.quantity).sum(),
        total_value: valuations.iter().map(|v| v.current_value).sum(),
        assets: valuations,
    }
}

/// Builds the depreciation report.
///
/// Only assets with a purchase date and depreciation enabled are listed.
pub fn build_depreciation_report(
    assets: &[Asset],
    defaults: &DepreciationDefaults,
    as_of: NaiveDate,
    generated_at: DateTime<Utc>,
) -> DepreciationReport {
    let mut rows: Vec<AssetValuation> = assets
        .iter()
        .filter(|asset| asset.has_purchase_date() && asset.method(defaults).is_enabled())
        .map(|asset| value_asset(asset, defaults, as_of))
        .collect();
    rows.sort_by(|a, b| b.depreciation_amount.total_cmp(&a.depreciation_amount));

    let total_purchase_value: f64 = rows.iter().map(|r| r.purchase_value).sum();
    let total_current_value: f64 = rows.iter().map(|r| r.current_value).sum();
    let total_depreciation: f64 = rows.iter().map(|r| r.depreciation_amount).sum();

    DepreciationReport {
        as_of,
        generated_at,
        total_purchase_value,
        total_current_value,
        total_depreciation,
        depreciation_rate: percent_of(total_depreciation, total_purchase_value),
        method_breakdown: method_breakdown(&rows),
        category_breakdown: category_depreciation(&rows),
        assets: rows,
    }
}

/// Builds the funding report.
///
/// Every asset is listed. Undated or non-depreciating assets keep their
/// purchase value as current value.
pub fn build_funding_report(
    assets: &[Asset],
    defaults: &DepreciationDefaults,
    as_of: NaiveDate,
) -> FundingReport {
    let mut items: Vec<FundingItem> = assets
        .iter()
        .map(|asset| {
            let valuation = value_asset(asset, defaults, as_of);
            let current_value =
                if asset.has_purchase_date() && asset.method(defaults).is_enabled() {
                    valuation.current_value
                } else {
                    valuation.purchase_value
                };
            FundingItem {
                name: valuation.name,
                category: valuation.category,
                department: valuation.department,
                quantity: valuation.quantity,
                purchase_value: valuation.purchase_value,
                current_value,
                purchase_date: valuation.purchase_date,
            }
        })
        .collect();

    let mut by_category: BTreeMap<String, CategorySummary> = BTreeMap::new();
    for item in &items {
        let summary = by_category
            .entry(item.category.clone())
            .or_insert_with(|| CategorySummary {
                category: item.category.clone(),
                count: 0,
                purchase_value: 0.0,
                current_value: 0.0,
            });
        summary.count += 1;
        summary.purchase_value += item.purchase_value;
        summary.current_value += item.current_value;
    }

    items.sort_by(|a, b| b.purchase_value.total_cmp(&a.purchase_value));

    FundingReport {
        as_of,
        total_investment: items.iter().map(|i| i.purchase_value).sum(),
        total_current_value: items.iter().map(|i| i.current_value).sum(),
        category_summary: by_category.into_values().collect(),
        items,
    }
}

pub fn build_portfolio_summary(
    assets: &[Asset],
    defaults: &DepreciationDefaults,
    low_stock_threshold: i64,
    as_of: NaiveDate,
) -> PortfolioSummary {
    let valuations: Vec<AssetValuation> = assets
        .iter()
        .map(|asset| value_asset(asset, defaults, as_of))
        .collect();

    PortfolioSummary {
        as_of,
        total_assets: assets.len(),
        total_units: assets.iter().map(|a| a.quantity).sum(),
        total_purchase_value: valuations.iter().map(|v| v.purchase_value).sum(),
        total_current_value: valuations.iter().map(|v| v.current_value).sum(),
        low_stock_count: assets
            .iter()
            .filter(|a| a.is_low_stock(low_stock_threshold))
            .count(),
    }
}

fn method_breakdown(rows: &[AssetValuation]) -> Vec<MethodBreakdown> {
    let mut breakdown: BTreeMap<String, MethodBreakdown> = BTreeMap::new();
    for row in rows {
        let entry = breakdown
            .entry(row.method.to_string())
            .or_insert_with(|| MethodBreakdown {
                method: row.method.clone(),
                count: 0,
                total_depreciation: 0.0,
                assets: Vec::new(),
            });
        entry.count += 1;
        entry.total_depreciation += row.depreciation_amount;
        entry.assets.push(row.name.clone());
    }
    breakdown.into_values().collect()
}

fn category_depreciation(rows: &[AssetValuation]) -> Vec<CategoryDepreciation> {
    // category -> (count, total depreciation, sum of depreciation percentages)
    let mut totals: BTreeMap<&str, (usize, f64, f64)> = BTreeMap::new();
    for row in rows {
        let entry = totals.entry(row.category.as_str()).or_insert((0, 0.0, 0.0));
        entry.0 += 1;
        entry.1 += row.depreciation_amount;
        entry.2 += row.depreciation_percent;
    }

    totals
        .into_iter()
        .map(|(category, (count, total_depreciation, percent_sum))| CategoryDepreciation {
            category: category.to_string(),
            count,
            total_depreciation,
            avg_depreciation_rate: round_dp(percent_sum / count as f64, DISPLAY_DECIMAL_PRECISION),
        })
        .collect()
}

fn percent_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

fn round_dp(value: f64, dp: i32) -> f64 {
    let factor = 10f64.powi(dp);
    (value * factor).round() / factor
}

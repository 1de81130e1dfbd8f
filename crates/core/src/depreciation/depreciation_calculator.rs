//! Current book value of an asset under straight-line or double-declining
//! balance depreciation.
//!
//! The public entry points are fail-soft: whatever goes wrong, the caller gets
//! a number back (the purchase price). `try_compute_current_value_as_of`
//! exposes the underlying error for callers that want it.

use chrono::NaiveDate;
use log::warn;

use super::depreciation_model::{DepreciationInfo, DepreciationInput, DepreciationMethod};
use crate::errors::DepreciationError;
use crate::utils::time_utils::{valuation_date_today, years_between};

/// Computes the current book value of one unit as of the system date.
///
/// Reads the clock once; see [`compute_current_value_as_of`] for the rules.
pub fn compute_current_value(input: &DepreciationInput) -> f64 {
    compute_current_value_as_of(input, valuation_date_today())
}

/// Computes the current book value of one unit as of `today`.
///
/// Never fails. Any error while computing (unparseable date, zero useful life
/// reached in a formula, non-finite intermediate value) is logged and the
/// purchase price is returned unchanged, or `0.0` when the price is absent.
pub fn compute_current_value_as_of(input: &DepreciationInput, today: NaiveDate) -> f64 {
    match try_compute_current_value_as_of(input, today) {
        Ok(value) => value,
        Err(err) => {
            let fallback = input.purchase_price.unwrap_or(0.0);
            warn!(
                "Depreciation failed, using purchase price {} as current value: {}",
                fallback, err
            );
            fallback
        }
    }
}

/// Fallible form of [`compute_current_value_as_of`].
///
/// A missing or zero price, or a missing date, is not an error: the price is
/// returned unchanged without touching the date.
pub fn try_compute_current_value_as_of(
    input: &DepreciationInput,
    today: NaiveDate,
) -> Result<f64, DepreciationError> {
    let purchase_price = match input.purchase_price {
        Some(price) if price != 0.0 => price,
        other => return Ok(other.unwrap_or(0.0)),
    };
    let purchase_date = match input.purchase_date.as_ref().filter(|d| !d.is_blank()) {
        Some(date) => date.resolve()?,
        None => return Ok(purchase_price),
    };

    let years_owned = years_between(purchase_date, today);
    let useful_life_years = input.useful_life_years;

    if years_owned >= useful_life_years as f64 {
        return Ok(input.salvage_value);
    }

    let current_value = match &input.method {
        DepreciationMethod::StraightLine => straight_line_value(
            purchase_price,
            input.salvage_value,
            useful_life_years,
            years_owned,
        )?,
        DepreciationMethod::DecliningBalance => {
            declining_balance_value(purchase_price, useful_life_years, years_owned)?
        }
        DepreciationMethod::None | DepreciationMethod::Other(_) => purchase_price,
    };

    if !current_value.is_finite() {
        return Err(DepreciationError::NonFiniteValue {
            method: input.method.to_string(),
            useful_life_years,
            years_owned,
        });
    }

    Ok(current_value.max(input.salvage_value))
}

/// Depreciation figures for the asset detail page, per unit.
///
/// Returns `None` when depreciation is disabled for the asset.
pub fn depreciation_info(input: &DepreciationInput, today: NaiveDate) -> Option<DepreciationInfo> {
    if !input.method.is_enabled() {
        return None;
    }

    let purchase_price = input.purchase_price.unwrap_or(0.0);
    let current_value = compute_current_value_as_of(input, today);
    let amount = purchase_price - current_value;
    let percentage = if purchase_price > 0.0 {
        amount / purchase_price * 100.0
    } else {
        0.0
    };

    Some(DepreciationInfo {
        amount,
        percentage,
        current_value,
    })
}

fn straight_line_value(
    purchase_price: f64,
    salvage_value: f64,
    useful_life_years: i64,
    years_owned: f64,
) -> Result<f64, DepreciationError> {
    if useful_life_years == 0 {
        return Err(DepreciationError::ZeroUsefulLife);
    }
    let depreciable_amount = purchase_price - salvage_value;
    let annual_depreciation = depreciable_amount / useful_life_years as f64;
    let accumulated_depreciation = annual_depreciation * years_owned;
    Ok(purchase_price - accumulated_depreciation)
}

fn declining_balance_value(
    purchase_price: f64,
    useful_life_years: i64,
    years_owned: f64,
) -> Result<f64, DepreciationError> {
    if useful_life_years == 0 {
        return Err(DepreciationError::ZeroUsefulLife);
    }
    // Lives under two years give a base <= 0; fractional powers of a negative
    // base come out NaN and are rejected by the caller.
    let rate = 2.0 / useful_life_years as f64;
    Ok(purchase_price * (1.0 - rate).powf(years_owned))
}

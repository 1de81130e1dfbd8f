//! Valuation service traits.

use super::valuation_model::{
    AssetDetail, AssetValuation, DepreciationReport, FundingReport, InventoryReport,
    PortfolioSummary,
};
use crate::errors::Result;

/// Trait defining the contract for valuation service operations.
///
/// Every operation values assets as of the service clock's "today", read
/// once per call.
pub trait ValuationServiceTrait: Send + Sync {
    /// Current value of every asset, sorted by name.
    fn list_asset_valuations(&self) -> Result<Vec<AssetValuation>>;

    /// Current value of one asset, with depreciation figures when enabled.
    ///
    /// Returns `Error::Repository` when no asset has that name.
    fn get_asset_detail(&self, name: &str) -> Result<AssetDetail>;

    fn get_inventory_report(&self) -> Result<InventoryReport>;

    fn get_depreciation_report(&self) -> Result<DepreciationReport>;

    fn get_funding_report(&self) -> Result<FundingReport>;

    /// Totals for the dashboard and the status page.
    fn get_portfolio_summary(&self) -> Result<PortfolioSummary>;
}

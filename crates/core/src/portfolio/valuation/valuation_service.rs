use std::sync::Arc;

use chrono::Utc;
use log::debug;

use super::valuation_calculator::{
    build_asset_detail, build_depreciation_report, build_funding_report, build_inventory_report,
    build_portfolio_summary, value_assets,
};
use super::valuation_model::{
    AssetDetail, AssetValuation, DepreciationReport, FundingReport, InventoryReport,
    PortfolioSummary,
};
use super::valuation_traits::ValuationServiceTrait;
use crate::assets::AssetRepositoryTrait;
use crate::errors::Result;
use crate::settings::Settings;
use crate::utils::time_utils::{Clock, SystemClock};

/// Service for valuing assets and building the valuation reports.
#[derive(Clone)]
pub struct ValuationService {
    asset_repository: Arc<dyn AssetRepositoryTrait>,
    clock: Arc<dyn Clock>,
    settings: Settings,
}

impl ValuationService {
    pub fn new(
        asset_repository: Arc<dyn AssetRepositoryTrait>,
        clock: Arc<dyn Clock>,
        settings: Settings,
    ) -> Self {
        Self {
            asset_repository,
            clock,
            settings,
        }
    }

    /// Creates a service on the system clock in the configured valuation timezone.
    pub fn from_settings(
        asset_repository: Arc<dyn AssetRepositoryTrait>,
        settings: Settings,
    ) -> Result<Self> {
        let clock = SystemClock::new(settings.timezone()?);
        Ok(Self::new(asset_repository, Arc::new(clock), settings))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

impl ValuationServiceTrait for ValuationService {
    fn list_asset_valuations(&self) -> Result<Vec<AssetValuation>> {
        let assets = self.asset_repository.list()?;
        let as_of = self.clock.today();
        debug!("Valuing {} assets as of {}", assets.len(), as_of);
        Ok(value_assets(&assets, &self.settings.depreciation, as_of))
    }

    fn get_asset_detail(&self, name: &str) -> Result<AssetDetail> {
        let asset = self.asset_repository.get_by_name(name)?;
        Ok(build_asset_detail(
            &asset,
            &self.settings.depreciation,
            self.clock.today(),
        ))
    }

    fn get_inventory_report(&self) -> Result<InventoryReport> {
        let assets = self.asset_repository.list()?;
        Ok(build_inventory_report(
            &assets,
            &self.settings.depreciation,
            self.clock.today(),
        ))
    }

    fn get_depreciation_report(&self) -> Result<DepreciationReport> {
        let assets = self.asset_repository.list()?;
        let as_of = self.clock.today();
        let report =
            build_depreciation_report(&assets, &self.settings.depreciation, as_of, Utc::now());
        debug!(
            "Depreciation report as of {}: {} of {} assets, total depreciation {:.2}",
            as_of,
            report.assets.len(),
            assets.len(),
            report.total_depreciation
        );
        Ok(report)
    }

    fn get_funding_report(&self) -> Result<FundingReport> {
        let assets = self.asset_repository.list()?;
        Ok(build_funding_report(
            &assets,
            &self.settings.depreciation,
            self.clock.today(),
        ))
    }

    fn get_portfolio_summary(&self) -> Result<PortfolioSummary> {
        let assets = self.asset_repository.list()?;
        Ok(build_portfolio_summary(
            &assets,
            &self.settings.depreciation,
            self.settings.low_stock_threshold,
            self.clock.today(),
        ))
    }
}

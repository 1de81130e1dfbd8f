//! Unit tests for the valuation service.

use super::*;
use crate::assets::{Asset, AssetRepositoryTrait};
use crate::depreciation::{DepreciationMethod, PurchaseDate};
use crate::errors::{Error, Result};
use crate::settings::Settings;
use crate::utils::time_utils::FixedClock;
use chrono::NaiveDate;
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock Implementations
// ============================================================================

struct MockAssetRepository {
    assets: Vec<Asset>,
    list_calls: Mutex<usize>,
}

impl MockAssetRepository {
    fn new(assets: Vec<Asset>) -> Self {
        Self {
            assets,
            list_calls: Mutex::new(0),
        }
    }
}

impl AssetRepositoryTrait for MockAssetRepository {
    fn get_by_name(&self, name: &str) -> Result<Asset> {
        self.assets
            .iter()
            .find(|a| a.name == name)
            .cloned()
            .ok_or_else(|| Error::Repository(format!("Asset {} not found", name)))
    }

    fn list(&self) -> Result<Vec<Asset>> {
        *self.list_calls.lock().unwrap() += 1;
        Ok(self.assets.clone())
    }
}

struct FailingAssetRepository;

impl AssetRepositoryTrait for FailingAssetRepository {
    fn get_by_name(&self, _name: &str) -> Result<Asset> {
        Err(Error::Repository("connection refused".to_string()))
    }

    fn list(&self) -> Result<Vec<Asset>> {
        Err(Error::Repository("connection refused".to_string()))
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn create_test_assets() -> Vec<Asset> {
    vec![
        Asset {
            category: Some("Vehicles".to_string()),
            purchase_date: Some(PurchaseDate::from("2020-01-01")),
            salvage_value: Some(3000.0),
            useful_life_years: Some(5),
            depreciation_method: Some(DepreciationMethod::StraightLine),
            ..Asset::new("Delivery Van", 1, 30000.0)
        },
        Asset {
            category: Some("IT".to_string()),
            purchase_date: Some(PurchaseDate::from("2023-01-01")),
            ..Asset::new("Switch", 4, 800.0)
        },
    ]
}

fn create_service(
    assets: Vec<Asset>,
    today: NaiveDate,
) -> (ValuationService, Arc<MockAssetRepository>) {
    let repository = Arc::new(MockAssetRepository::new(assets));
    let service = ValuationService::new(
        repository.clone(),
        Arc::new(FixedClock(today)),
        Settings::default(),
    );
    (service, repository)
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_values_are_taken_as_of_the_clock_date() {
    let (early, _) = create_service(create_test_assets(), date(2021, 1, 1));
    let (late, _) = create_service(create_test_assets(), date(2026, 1, 1));

    let van_early = early.get_asset_detail("Delivery Van").unwrap();
    let van_late = late.get_asset_detail("Delivery Van").unwrap();

    assert_eq!(van_early.as_of, date(2021, 1, 1));
    assert!(van_early.current_value > 3000.0 && van_early.current_value < 30000.0);
    // Six years after purchase the van sits at salvage
    assert_eq!(van_late.current_value, 3000.0);
}

#[test]
fn test_missing_asset_is_a_repository_error() {
    let (service, _) = create_service(create_test_assets(), date(2024, 1, 1));
    let err = service.get_asset_detail("Hovercraft").unwrap_err();
    assert!(matches!(err, Error::Repository(_)));
}

#[test]
fn test_list_asset_valuations_uses_settings_defaults() {
    let repository = Arc::new(MockAssetRepository::new(create_test_assets()));
    let mut settings = Settings::default();
    settings.depreciation.method = DepreciationMethod::DecliningBalance;
    settings.depreciation.useful_life_years = 4;
    let service =
        ValuationService::new(repository, Arc::new(FixedClock(date(2024, 1, 1))), settings);

    let valuations = service.list_asset_valuations().unwrap();
    let switch = valuations.iter().find(|v| v.name == "Switch").unwrap();

    assert_eq!(switch.method, DepreciationMethod::DecliningBalance);
    assert_eq!(switch.useful_life_years, 4);
    // One year at a 50% declining rate
    assert!((switch.unit_current_value - 400.0).abs() < 5.0);
    assert_eq!(valuations[0].name, "Delivery Van");
}

#[test]
fn test_reports_read_assets_from_repository() {
    let (service, repository) = create_service(create_test_assets(), date(2024, 1, 1));

    let inventory = service.get_inventory_report().unwrap();
    let depreciation = service.get_depreciation_report().unwrap();
    let funding = service.get_funding_report().unwrap();
    let summary = service.get_portfolio_summary().unwrap();

    assert_eq!(*repository.list_calls.lock().unwrap(), 4);
    assert_eq!(inventory.total_items, 2);
    assert_eq!(depreciation.assets.len(), 2);
    assert_eq!(funding.total_investment, 33200.0);
    assert_eq!(summary.total_purchase_value, 33200.0);
    assert!((summary.total_current_value - inventory.total_value).abs() < 1e-6);
    assert_eq!(summary.low_stock_count, 2);
}

#[test]
fn test_repository_errors_propagate() {
    let service = ValuationService::new(
        Arc::new(FailingAssetRepository),
        Arc::new(FixedClock(date(2024, 1, 1))),
        Settings::default(),
    );

    assert!(matches!(service.get_inventory_report(), Err(Error::Repository(_))));
    assert!(matches!(service.get_depreciation_report(), Err(Error::Repository(_))));
    assert!(matches!(service.get_funding_report(), Err(Error::Repository(_))));
    assert!(matches!(service.get_portfolio_summary(), Err(Error::Repository(_))));
    assert!(matches!(service.list_asset_valuations(), Err(Error::Repository(_))));
}

#[test]
fn test_from_settings_rejects_unknown_timezone() {
    let settings = Settings {
        valuation_timezone: "Atlantis/Capital".to_string(),
        ..Settings::default()
    };
    let result =
        ValuationService::from_settings(Arc::new(MockAssetRepository::new(vec![])), settings);
    assert!(matches!(result, Err(Error::InvalidConfigValue(_))));
}

#[test]
fn test_from_settings_uses_system_clock() {
    let settings = Settings {
        valuation_timezone: "Europe/Berlin".to_string(),
        ..Settings::default()
    };
    let service = ValuationService::from_settings(
        Arc::new(MockAssetRepository::new(create_test_assets())),
        settings,
    )
    .unwrap();

    assert_eq!(service.settings().valuation_timezone, "Europe/Berlin");
    let summary = service.get_portfolio_summary().unwrap();
    assert_eq!(summary.total_assets, 2);
}

use std::path::Path;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOW_STOCK_THRESHOLD;
use crate::depreciation::DepreciationDefaults;
use crate::errors::{Error, Result};
use crate::utils::time_utils::DEFAULT_VALUATION_TZ;

/// Valuation settings.
///
/// Every field has a default, so an empty JSON object is a valid settings
/// document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// IANA timezone name used to decide what "today" is
    pub valuation_timezone: String,
    /// Applied to asset records that leave depreciation fields empty
    pub depreciation: DepreciationDefaults,
    /// Applied to asset records without their own threshold
    pub low_stock_threshold: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            valuation_timezone: DEFAULT_VALUATION_TZ.name().to_string(),
            depreciation: DepreciationDefaults::default(),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl Settings {
    pub fn from_json(raw: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(raw)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigIO(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&raw)
    }

    pub fn timezone(&self) -> Result<Tz> {
        self.valuation_timezone.parse::<Tz>().map_err(|_| {
            Error::InvalidConfigValue(format!(
                "valuationTimezone '{}' is not a known timezone",
                self.valuation_timezone
            ))
        })
    }

    fn validate(&self) -> Result<()> {
        self.timezone()?;
        if self.depreciation.useful_life_years <= 0 {
            return Err(Error::InvalidConfigValue(format!(
                "depreciation.usefulLifeYears must be positive, got {}",
                self.depreciation.useful_life_years
            )));
        }
        if self.depreciation.salvage_value < 0.0 {
            return Err(Error::InvalidConfigValue(format!(
                "depreciation.salvageValue must not be negative, got {}",
                self.depreciation.salvage_value
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::depreciation::DepreciationMethod;

    #[test]
    fn test_empty_document_uses_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.depreciation.useful_life_years, 5);
        assert_eq!(settings.timezone().unwrap(), chrono_tz::UTC);
    }

    #[test]
    fn test_partial_document_overrides_fields() {
        let settings = Settings::from_json(
            r#"{
                "valuationTimezone": "Africa/Nairobi",
                "depreciation": { "method": "declining_balance" }
            }"#,
        )
        .unwrap();

        assert_eq!(settings.timezone().unwrap(), chrono_tz::Africa::Nairobi);
        assert_eq!(settings.depreciation.method, DepreciationMethod::DecliningBalance);
        assert_eq!(settings.depreciation.useful_life_years, 5);
        assert_eq!(settings.low_stock_threshold, 5);
    }

    #[test]
    fn test_unknown_timezone_is_rejected() {
        let err = Settings::from_json(r#"{ "valuationTimezone": "Mars/Olympus" }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue(_)));
    }

    #[test]
    fn test_non_positive_useful_life_is_rejected() {
        let err =
            Settings::from_json(r#"{ "depreciation": { "usefulLifeYears": 0 } }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue(_)));
    }

    #[test]
    fn test_malformed_json_is_a_validation_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_missing_file_is_config_io_error() {
        let err = Settings::from_file("/nonexistent/assetdesk/settings.json").unwrap_err();
        assert!(matches!(err, Error::ConfigIO(_)));
    }
}

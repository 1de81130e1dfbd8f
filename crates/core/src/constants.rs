/// Days per year used to turn elapsed days into fractional years owned.
/// Report totals depend on this exact approximation.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Format of purchase dates stored as text
pub const PURCHASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Useful life applied when an asset record has none
pub const DEFAULT_USEFUL_LIFE_YEARS: i64 = 5;

/// Salvage value applied when an asset record has none
pub const DEFAULT_SALVAGE_VALUE: f64 = 0.0;

/// Low stock threshold applied when an asset record has none
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Category assigned to assets without one
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Decimal places for percentage figures shown in reports
pub const DISPLAY_DECIMAL_PRECISION: i32 = 2;

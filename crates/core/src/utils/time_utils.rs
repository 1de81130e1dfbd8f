use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::constants::DAYS_PER_YEAR;

/// Default timezone for valuation dates.
/// "Today" for depreciation purposes is the calendar date in this zone.
pub const DEFAULT_VALUATION_TZ: Tz = chrono_tz::UTC;

/// Source of the current calendar date.
///
/// Depreciation is only deterministic "as of" a date, so services take a
/// clock instead of reading the wall clock themselves.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system time, converted to a valuation timezone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(DEFAULT_VALUATION_TZ)
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        valuation_date_from_utc(Utc::now(), self.tz)
    }
}

/// Clock frozen on a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Converts a UTC instant to a valuation date in the given timezone.
///
/// # Arguments
/// * `instant` - The UTC timestamp to convert
/// * `tz` - The timezone to use for the conversion
pub fn valuation_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Convenience function that uses the default valuation timezone.
pub fn valuation_date_today() -> NaiveDate {
    valuation_date_from_utc(Utc::now(), DEFAULT_VALUATION_TZ)
}

/// Elapsed calendar days from `start` to `end`. Negative when `start` is later.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days()
}

/// Elapsed time from `start` to `end` in fractional years of 365.25 days.
///
/// This is a day-count approximation, not calendar-exact year counting.
pub fn years_between(start: NaiveDate, end: NaiveDate) -> f64 {
    days_between(start, end) as f64 / DAYS_PER_YEAR
}

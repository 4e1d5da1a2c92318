//! Reduces the 3-hour forecast list to one entry per day.
//!
//! The sample is positional: every eighth entry starting at index 0. It does
//! not group by calendar date, so a list that starts mid-day yields days that
//! are offset by the same amount.

use super::models::{DailySample, ForecastEntry};

/// 24 hours in 3-hour steps
pub const ENTRIES_PER_DAY: usize = 8;

pub const FORECAST_DAYS: usize = 5;

/// Entries at indices 0, 8, 16, 24, 32, in their original order
pub fn sample_daily(entries: &[ForecastEntry]) -> Vec<&ForecastEntry> {
    entries
        .iter()
        .step_by(ENTRIES_PER_DAY)
        .take(FORECAST_DAYS)
        .collect()
}

pub fn daily_samples(entries: &[ForecastEntry]) -> Vec<DailySample> {
    sample_daily(entries)
        .into_iter()
        .map(DailySample::from_entry)
        .collect()
}

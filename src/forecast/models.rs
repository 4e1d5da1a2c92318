use chrono::DateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::weather::models::ConditionInfo;

// ============================================================================
// OpenWeatherMap /forecast Response (Internal)
// 5 days in 3-hour steps; only the fields the widget renders are read
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct FiveDayForecastResponse {
    pub list: Vec<ForecastItem>,
}

#[derive(Debug, Deserialize)]
pub struct ForecastItem {
    pub dt: i64,
    pub main: ForecastMain,
    #[serde(default)]
    pub weather: Vec<ConditionInfo>,
}

#[derive(Debug, Deserialize)]
pub struct ForecastMain {
    pub temp: f64,
}

// ============================================================================
// API Response Models (External)
// ============================================================================

/// One 3-hour forecast step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ForecastEntry {
    /// Unix seconds
    pub timestamp: i64,
    pub temperature: f64,
    pub condition: String,
    pub description: String,
    pub icon: String,
}

/// The full forecast list as delivered by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Forecast {
    pub entries: Vec<ForecastEntry>,
}

/// A forecast entry picked to represent one day
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DailySample {
    pub timestamp: i64,
    /// Short weekday name ("Mon") of the timestamp in UTC
    pub weekday: String,
    pub temperature: f64,
    pub condition: String,
    pub description: String,
    pub icon: String,
}

impl DailySample {
    pub fn from_entry(entry: &ForecastEntry) -> Self {
        Self {
            timestamp: entry.timestamp,
            weekday: weekday_name(entry.timestamp),
            temperature: entry.temperature,
            condition: entry.condition.clone(),
            description: entry.description.clone(),
            icon: entry.icon.clone(),
        }
    }
}

/// Short weekday for a unix timestamp; empty when out of chrono's range
pub fn weekday_name(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format("%a").to_string())
        .unwrap_or_default()
}

/// `GET /api/v1/forecast` body
#[derive(Debug, Serialize, ToSchema)]
pub struct ForecastResponse {
    pub entries: Vec<ForecastEntry>,
    pub daily: Vec<DailySample>,
}

impl From<Forecast> for ForecastResponse {
    fn from(forecast: Forecast) -> Self {
        let daily = crate::forecast::sampler::daily_samples(&forecast.entries);
        Self {
            entries: forecast.entries,
            daily,
        }
    }
}

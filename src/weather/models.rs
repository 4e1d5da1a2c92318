use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::background::Background;

// ============================================================================
// OpenWeatherMap /weather Response (Internal)
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct OpenWeatherMapResponse {
    pub name: String,
    pub sys: SysInfo,
    pub main: MainInfo,
    pub weather: Vec<ConditionInfo>,
    pub wind: WindInfo,
}

#[derive(Debug, Deserialize)]
pub struct SysInfo {
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Deserialize)]
pub struct MainInfo {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u32,
    pub pressure: u32,
}

/// One entry of the provider's `weather` array, shared with the forecast API
#[derive(Debug, Deserialize, Clone)]
pub struct ConditionInfo {
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Deserialize)]
pub struct WindInfo {
    pub speed: f64,
}

/// Error body OpenWeatherMap sends with non-2xx responses
#[derive(Debug, Deserialize)]
pub struct OpenWeatherMapError {
    pub message: String,
}

// ============================================================================
// API Response Models (External)
// ============================================================================

/// Current conditions for one location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CurrentWeather {
    pub city: String,
    pub country: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: u32,
    pub pressure: u32,
    pub wind_speed: f64,
    /// Condition label, e.g. "Rain"
    pub condition: String,
    pub description: String,
    pub icon: String,
}

impl CurrentWeather {
    pub fn background(&self) -> Background {
        Background::classify(self.temperature, &self.condition)
    }
}

/// `GET /api/v1/weather` body
#[derive(Debug, Serialize, ToSchema)]
pub struct WeatherResponse {
    #[serde(flatten)]
    pub weather: CurrentWeather,
    pub background: Background,
    pub background_url: String,
}

impl From<CurrentWeather> for WeatherResponse {
    fn from(weather: CurrentWeather) -> Self {
        let background = weather.background();
        Self {
            weather,
            background,
            background_url: background.image_url().to_string(),
        }
    }
}

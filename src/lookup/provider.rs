use std::sync::Arc;

use async_trait::async_trait;

use super::state::LookupData;
use crate::forecast::{Forecast, ForecastService};
use crate::weather::{CurrentWeather, WeatherError, WeatherService};

/// Source of current conditions and forecasts for a city
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, city: &str) -> Result<CurrentWeather, WeatherError>;

    async fn forecast(&self, city: &str) -> Result<Forecast, WeatherError>;
}

/// Provider backed by the OpenWeatherMap services
pub struct OpenWeatherMap {
    weather: Arc<WeatherService>,
    forecast: Arc<ForecastService>,
}

impl OpenWeatherMap {
    pub fn new(weather: Arc<WeatherService>, forecast: Arc<ForecastService>) -> Self {
        Self { weather, forecast }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherMap {
    async fn current(&self, city: &str) -> Result<CurrentWeather, WeatherError> {
        self.weather.get_weather(city).await
    }

    async fn forecast(&self, city: &str) -> Result<Forecast, WeatherError> {
        self.forecast.get_forecast(city).await
    }
}

/// Issue both requests concurrently. Either failure fails the whole lookup
/// and neither result is kept.
pub async fn fetch_both(
    provider: &dyn WeatherProvider,
    city: &str,
) -> Result<LookupData, WeatherError> {
    let (current, forecast) =
        tokio::try_join!(provider.current(city), provider.forecast(city))?;

    Ok(LookupData { current, forecast })
}

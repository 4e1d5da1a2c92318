use reqwest::Client;

use super::models::{FiveDayForecastResponse, Forecast, ForecastEntry};
use crate::weather::{check_status, WeatherError, UNITS};

/// Client for the 5-day / 3-hour forecast endpoint
pub struct ForecastService {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ForecastService {
    pub fn new(client: Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub async fn get_forecast(&self, city: &str) -> Result<Forecast, WeatherError> {
        tracing::debug!(city = %city, "Fetching forecast");

        let response = self
            .client
            .get(format!("{}/forecast", self.base_url))
            .query(&[("q", city), ("units", UNITS), ("appid", &self.api_key)])
            .send()
            .await?;

        let response = check_status(response, city).await?;
        let data: FiveDayForecastResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::InvalidResponse(e.to_string()))?;

        let forecast = transform_response(data);

        tracing::info!(
            city = %city,
            entries = forecast.entries.len(),
            "Forecast fetched successfully"
        );

        Ok(forecast)
    }
}

fn transform_response(data: FiveDayForecastResponse) -> Forecast {
    Forecast {
        entries: data
            .list
            .into_iter()
            .map(|item| {
                let condition = item.weather.into_iter().next();
                let (condition, description, icon) = condition
                    .map(|c| (c.main, c.description, c.icon))
                    .unwrap_or_default();
                ForecastEntry {
                    timestamp: item.dt,
                    temperature: item.main.temp,
                    condition,
                    description,
                    icon,
                }
            })
            .collect(),
    }
}

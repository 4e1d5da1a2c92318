use axum::http::StatusCode;
use reqwest::{Client, Response};
use thiserror::Error;

use super::models::{CurrentWeather, OpenWeatherMapError, OpenWeatherMapResponse};
use crate::error::HttpError;
use crate::impl_into_response;

pub const OPENWEATHERMAP_API_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Unit system requested from the provider. Fixed: all thresholds are °C.
pub const UNITS: &str = "metric";

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Failed to fetch weather data: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("City not found: {0}")]
    CityNotFound(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("OpenWeatherMap rejected the API key")]
    InvalidApiKey,

    #[error("OpenWeatherMap rate limit exceeded")]
    RateLimited,

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl HttpError for WeatherError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::CityNotFound(_) => StatusCode::NOT_FOUND,
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::RequestError(_)
            | Self::ApiError(_)
            | Self::InvalidApiKey
            | Self::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_code(&self) -> Option<&'static str> {
        match self {
            Self::CityNotFound(_) => Some("CITY_NOT_FOUND"),
            Self::RequestError(_) => Some("REQUEST_ERROR"),
            Self::ApiError(_) => Some("API_ERROR"),
            Self::InvalidApiKey => Some("INVALID_API_KEY"),
            Self::RateLimited => Some("RATE_LIMITED"),
            Self::InvalidResponse(_) => Some("INVALID_RESPONSE"),
        }
    }
}

impl_into_response!(WeatherError);

/// Map a provider status code to a [`WeatherError`], passing 2xx responses through
pub async fn check_status(response: Response, city: &str) -> Result<Response, WeatherError> {
    let status = response.status();
    tracing::debug!(city = %city, status = %status, "Received OpenWeatherMap response");

    if status.is_success() {
        return Ok(response);
    }

    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(WeatherError::CityNotFound(city.to_string()));
    }

    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(WeatherError::InvalidApiKey);
    }

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(WeatherError::RateLimited);
    }

    let error: OpenWeatherMapError = response.json().await.unwrap_or(OpenWeatherMapError {
        message: format!("HTTP {}", status),
    });
    Err(WeatherError::ApiError(error.message))
}

/// Client for the current-conditions endpoint
pub struct WeatherService {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherService {
    pub fn new(client: Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Fetch current conditions. The city is sent as typed; reqwest handles
    /// URL encoding of spaces and special characters.
    pub async fn get_weather(&self, city: &str) -> Result<CurrentWeather, WeatherError> {
        tracing::debug!(city = %city, "Fetching current weather");

        let response = self
            .client
            .get(format!("{}/weather", self.base_url))
            .query(&[("q", city), ("units", UNITS), ("appid", &self.api_key)])
            .send()
            .await?;

        let response = check_status(response, city).await?;
        let data: OpenWeatherMapResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::InvalidResponse(e.to_string()))?;

        let weather = transform_response(data)?;

        tracing::info!(
            city = %weather.city,
            temp = %weather.temperature,
            condition = %weather.condition,
            "Weather data fetched successfully"
        );

        Ok(weather)
    }
}

fn transform_response(data: OpenWeatherMapResponse) -> Result<CurrentWeather, WeatherError> {
    let condition = data.weather.into_iter().next().ok_or_else(|| {
        WeatherError::InvalidResponse("No weather information available".to_string())
    })?;

    Ok(CurrentWeather {
        city: data.name,
        country: data.sys.country,
        temperature: data.main.temp,
        feels_like: data.main.feels_like,
        humidity: data.main.humidity,
        pressure: data.main.pressure,
        wind_speed: data.wind.speed,
        condition: condition.main,
        description: condition.description,
        icon: condition.icon,
    })
}

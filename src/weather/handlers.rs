use axum::{extract::State, Json};
use serde::Serialize;

use super::models::WeatherResponse;
use super::service::WeatherError;
use crate::extractors::CityParam;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Current conditions plus the background they classify to
///
/// GET /api/v1/weather?city=London
/// GET /api/v1/weather/{city}
pub async fn get_weather(
    State(state): State<AppState>,
    city: CityParam,
) -> Result<Json<WeatherResponse>, WeatherError> {
    let city = city.or_default(state.config.default_city.as_str());

    let weather = state.weather_service.get_weather(&city).await?;
    Ok(Json(weather.into()))
}

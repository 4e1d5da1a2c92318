use axum::{extract::State, Json};

use super::models::ForecastResponse;
use crate::extractors::CityParam;
use crate::weather::WeatherError;
use crate::AppState;

/// Full 3-hour forecast plus the five daily samples
///
/// GET /api/v1/forecast?city=London
/// GET /api/v1/forecast/{city}
pub async fn get_forecast(
    State(state): State<AppState>,
    city: CityParam,
) -> Result<Json<ForecastResponse>, WeatherError> {
    let city = city.or_default(state.config.default_city.as_str());

    let forecast = state.forecast_service.get_forecast(&city).await?;
    Ok(Json(forecast.into()))
}

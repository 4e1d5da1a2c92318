use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::background::Background;
use crate::error::ErrorResponse;
use crate::forecast::{DailySample, ForecastEntry, ForecastResponse};
use crate::weather::{CurrentWeather, WeatherResponse};

/// Schema documentation for the JSON API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Skyview API",
        version = "0.1.0",
        description = "Weather lookup widget backed by OpenWeatherMap: current conditions, a 5-day forecast and a condition-based background.",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    tags(
        (name = "weather", description = "Current conditions"),
        (name = "forecast", description = "5-day / 3-hour forecast and daily samples"),
        (name = "lookup", description = "Widget session state")
    ),
    components(
        schemas(
            ErrorResponse,
            Background,
            CurrentWeather,
            WeatherResponse,
            ForecastEntry,
            DailySample,
            ForecastResponse,
        )
    )
)]
pub struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}

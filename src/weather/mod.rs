pub mod handlers;
pub mod models;
mod service;

pub use models::{CurrentWeather, WeatherResponse};
pub use service::{check_status, WeatherError, WeatherService, OPENWEATHERMAP_API_URL, UNITS};

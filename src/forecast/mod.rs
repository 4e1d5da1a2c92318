pub mod handlers;
pub mod models;
pub mod sampler;
mod service;

pub use models::{DailySample, Forecast, ForecastEntry, ForecastResponse};
pub use service::ForecastService;

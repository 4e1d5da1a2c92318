pub mod background;
pub mod config;
pub mod error;
pub mod extractors;
pub mod forecast;
pub mod lookup;
pub mod openapi;
pub mod routes;
pub mod view;
pub mod weather;

use std::{sync::Arc, time::Duration};

use reqwest::Client;
use tokio::task::JoinHandle;

use crate::config::{AppConfig, HttpClientConfig};
use crate::forecast::ForecastService;
use crate::lookup::{LookupSession, OpenWeatherMap, WidgetState};
use crate::view::{PageRenderer, ViewError};
use crate::weather::WeatherService;

#[derive(Clone)]
pub struct AppState {
    pub weather_service: Arc<WeatherService>,
    pub forecast_service: Arc<ForecastService>,
    pub session: Arc<LookupSession>,
    pub views: PageRenderer,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Wire services and the widget session around one shared HTTP client
    pub fn new(config: AppConfig, http_client: Client) -> Result<Self, ViewError> {
        let weather_service = Arc::new(WeatherService::new(
            http_client.clone(),
            &config.api_base_url,
            &config.openweathermap_api_key,
        ));
        let forecast_service = Arc::new(ForecastService::new(
            http_client,
            &config.api_base_url,
            &config.openweathermap_api_key,
        ));

        let provider = Arc::new(OpenWeatherMap::new(
            Arc::clone(&weather_service),
            Arc::clone(&forecast_service),
        ));
        let session = Arc::new(LookupSession::new(provider, &config.default_city));

        Ok(Self {
            weather_service,
            forecast_service,
            session,
            views: PageRenderer::new()?,
            config: Arc::new(config),
        })
    }

    /// Look up the default city in the background, as the widget does on
    /// first render. Returns `None` when `fetch_on_startup` is off.
    pub fn spawn_startup_lookup(&self) -> Option<JoinHandle<WidgetState>> {
        if !self.config.fetch_on_startup {
            tracing::debug!("Startup lookup disabled");
            return None;
        }

        let session = Arc::clone(&self.session);
        let city = self.config.default_city.clone();
        tracing::info!(city = %city, "Starting startup lookup");
        Some(tokio::spawn(async move { session.lookup(&city).await }))
    }
}

/// Create shared HTTP client with connection pooling
pub fn create_http_client(config: &HttpClientConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .pool_idle_timeout(Duration::from_secs(config.pool_idle_timeout_secs))
        .pool_max_idle_per_host(config.pool_max_idle_per_host)
        .build()
}

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use super::provider::WeatherProvider;
use super::state::LookupData;
use crate::forecast::{Forecast, ForecastEntry};
use crate::weather::{CurrentWeather, WeatherError};

const START: i64 = 1_705_276_800; // 2024-01-15 00:00:00 UTC
const STEP: i64 = 3 * 60 * 60;

pub fn sample_current(city: &str, temperature: f64, condition: &str) -> CurrentWeather {
    CurrentWeather {
        city: city.to_string(),
        country: "XX".to_string(),
        temperature,
        feels_like: temperature - 1.0,
        humidity: 60,
        pressure: 1012,
        wind_speed: 3.5,
        condition: condition.to_string(),
        description: format!("{} sky", condition.to_lowercase()),
        icon: "01d".to_string(),
    }
}

pub fn sample_forecast(temperature: f64) -> Forecast {
    Forecast {
        entries: (0..40)
            .map(|i| ForecastEntry {
                timestamp: START + i * STEP,
                temperature: temperature + i as f64 / 10.0,
                condition: "Clouds".to_string(),
                description: "scattered clouds".to_string(),
                icon: "03d".to_string(),
            })
            .collect(),
    }
}

pub fn sample_data(city: &str, temperature: f64, condition: &str) -> LookupData {
    LookupData {
        current: sample_current(city, temperature, condition),
        forecast: sample_forecast(temperature),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    Nothing,
    Current,
    Forecast,
}

/// Answers every city except "Qwxyz123", optionally after a per-city delay
pub struct StubProvider {
    fail_on: FailOn,
    delays: HashMap<String, Duration>,
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn new() -> Self {
        Self {
            fail_on: FailOn::Nothing,
            delays: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn fail_on(mut self, fail_on: FailOn) -> Self {
        self.fail_on = fail_on;
        self
    }

    pub fn delay(mut self, city: &str, delay: Duration) -> Self {
        self.delays.insert(city.to_string(), delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn wait(&self, city: &str) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(city) {
            tokio::time::sleep(*delay).await;
        }
    }
}

#[async_trait]
impl WeatherProvider for StubProvider {
    async fn current(&self, city: &str) -> Result<CurrentWeather, WeatherError> {
        self.wait(city).await;
        if city == "Qwxyz123" {
            return Err(WeatherError::CityNotFound(city.to_string()));
        }
        if self.fail_on == FailOn::Current {
            return Err(WeatherError::ApiError("boom".to_string()));
        }
        Ok(sample_current(city, 21.0, "Clear"))
    }

    async fn forecast(&self, city: &str) -> Result<Forecast, WeatherError> {
        self.wait(city).await;
        if city == "Qwxyz123" {
            return Err(WeatherError::CityNotFound(city.to_string()));
        }
        if self.fail_on == FailOn::Forecast {
            return Err(WeatherError::RateLimited);
        }
        Ok(sample_forecast(15.0))
    }
}

//! Shared fixtures for tests that run against a mock OpenWeatherMap.

#![allow(dead_code)]

use skyview::config::{AppConfig, HttpClientConfig};
use skyview::{create_http_client, AppState};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

pub const API_KEY: &str = "test-key";

/// 2024-01-15 00:00:00 UTC, a Monday
pub const START: i64 = 1_705_276_800;

pub fn current_weather_body(city: &str, country: &str, temp: f64, main: &str) -> serde_json::Value {
    serde_json::json!({
        "coord": { "lon": 2.3488, "lat": 48.8534 },
        "weather": [
            { "id": 500, "main": main, "description": format!("{} today", main.to_lowercase()), "icon": "10d" }
        ],
        "base": "stations",
        "main": {
            "temp": temp,
            "feels_like": temp - 0.6,
            "temp_min": temp - 2.0,
            "temp_max": temp + 2.0,
            "pressure": 1014,
            "humidity": 81
        },
        "visibility": 10000,
        "wind": { "speed": 4.63, "deg": 240 },
        "clouds": { "all": 75 },
        "dt": START,
        "sys": { "type": 2, "id": 2041230, "country": country, "sunrise": START + 27_000, "sunset": START + 58_000 },
        "timezone": 3600,
        "id": 2988507,
        "name": city,
        "cod": 200
    })
}

pub fn forecast_body(count: usize, base_temp: f64) -> serde_json::Value {
    let list: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            serde_json::json!({
                "dt": START + i as i64 * 3 * 60 * 60,
                "main": { "temp": base_temp + i as f64, "feels_like": base_temp, "humidity": 70 },
                "weather": [
                    { "id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d" }
                ],
                "dt_txt": "2024-01-15 00:00:00"
            })
        })
        .collect();

    serde_json::json!({
        "cod": "200",
        "message": 0,
        "cnt": count,
        "list": list,
        "city": { "id": 2988507, "name": "Paris", "country": "FR" }
    })
}

pub fn not_found_body() -> serde_json::Value {
    serde_json::json!({ "cod": "404", "message": "city not found" })
}

pub async fn mount_current(server: &MockServer, city: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", city))
        .and(query_param("units", "metric"))
        .and(query_param("appid", API_KEY))
        .respond_with(response)
        .mount(server)
        .await;
}

pub async fn mount_forecast(server: &MockServer, city: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("q", city))
        .and(query_param("units", "metric"))
        .and(query_param("appid", API_KEY))
        .respond_with(response)
        .mount(server)
        .await;
}

pub fn test_config(server: &MockServer) -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        openweathermap_api_key: API_KEY.to_string(),
        api_base_url: server.uri(),
        default_city: "London".to_string(),
        fetch_on_startup: false,
        http: HttpClientConfig {
            timeout_secs: 5,
            ..HttpClientConfig::default()
        },
    }
}

#[allow(clippy::expect_used)]
pub fn state_from_config(config: AppConfig) -> AppState {
    let client = create_http_client(&config.http).expect("Failed to create client");
    AppState::new(config, client).expect("Failed to compile page templates")
}

pub fn test_state(server: &MockServer) -> AppState {
    state_from_config(test_config(server))
}

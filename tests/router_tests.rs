//! End-to-end tests through the axum router.

mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use common::*;
use skyview::routes::build_app;
use tower::ServiceExt;
use wiremock::{MockServer, ResponseTemplate};

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn mock_paris(server: &MockServer) {
    mount_current(
        server,
        "Paris",
        ResponseTemplate::new(200).set_body_json(current_weather_body("Paris", "FR", 32.4, "Rain")),
    )
    .await;
    mount_forecast(
        server,
        "Paris",
        ResponseTemplate::new(200).set_body_json(forecast_body(40, 15.0)),
    )
    .await;
}

#[tokio::test]
async fn test_health() {
    let server = MockServer::start().await;
    let app = build_app(test_state(&server));

    let (status, _, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_weather_endpoint_includes_background() {
    let server = MockServer::start().await;
    mock_paris(&server).await;
    let app = build_app(test_state(&server));

    let (status, _, body) = send(&app, get("/api/v1/weather/Paris")).await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["city"], "Paris");
    assert_eq!(json["condition"], "Rain");
    // Rain beats 32°C
    assert_eq!(json["background"], "rainy");
}

#[tokio::test]
async fn test_weather_endpoint_query_param() {
    let server = MockServer::start().await;
    mock_paris(&server).await;
    let app = build_app(test_state(&server));

    let (status, _, body) = send(&app, get("/api/v1/weather?city=Paris")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("\"country\":\"FR\""));
}

#[tokio::test]
async fn test_weather_endpoint_not_found() {
    let server = MockServer::start().await;
    mount_current(
        &server,
        "Qwxyz123",
        ResponseTemplate::new(404).set_body_json(not_found_body()),
    )
    .await;
    let app = build_app(test_state(&server));

    let (status, _, body) = send(&app, get("/api/v1/weather/Qwxyz123")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["code"], "CITY_NOT_FOUND");
}

#[tokio::test]
async fn test_weather_endpoint_defaults_to_configured_city() {
    let server = MockServer::start().await;
    mount_current(
        &server,
        "London",
        ResponseTemplate::new(200).set_body_json(current_weather_body("London", "GB", 7.0, "Clear")),
    )
    .await;
    let app = build_app(test_state(&server));

    let (status, _, body) = send(&app, get("/api/v1/weather")).await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["city"], "London");
    assert_eq!(json["background"], "cold");
}

#[tokio::test]
async fn test_forecast_endpoint_samples_five_days() {
    let server = MockServer::start().await;
    mock_paris(&server).await;
    let app = build_app(test_state(&server));

    let (status, _, body) = send(&app, get("/api/v1/forecast/Paris")).await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["entries"].as_array().unwrap().len(), 40);

    let daily = json["daily"].as_array().unwrap();
    let weekdays: Vec<&str> = daily.iter().map(|d| d["weekday"].as_str().unwrap()).collect();
    assert_eq!(weekdays, vec!["Mon", "Tue", "Wed", "Thu", "Fri"]);
}

#[tokio::test]
async fn test_form_submit_then_page_renders_result() {
    let server = MockServer::start().await;
    mock_paris(&server).await;
    let app = build_app(test_state(&server));

    let submit = Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("city=Paris"))
        .unwrap();
    let (status, headers, _) = send(&app, submit).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(headers[header::LOCATION], "/");

    let (status, _, html) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<h1>Paris, FR</h1>"));
    assert!(html.contains("32°C"));
    assert!(html.contains("5-Day Forecast"));
    assert!(html.contains("photo-1519692933481-e162a57d6721"));
    assert!(!html.contains(API_KEY));
}

#[tokio::test]
async fn test_lookup_api_failure_keeps_stale_data() {
    let server = MockServer::start().await;
    mock_paris(&server).await;
    mount_current(
        &server,
        "Qwxyz123",
        ResponseTemplate::new(404).set_body_json(not_found_body()),
    )
    .await;
    mount_forecast(
        &server,
        "Qwxyz123",
        ResponseTemplate::new(404).set_body_json(not_found_body()),
    )
    .await;
    let app = build_app(test_state(&server));

    let lookup = |city: &str| {
        Request::builder()
            .method("POST")
            .uri("/api/v1/lookup")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::json!({ "city": city }).to_string()))
            .unwrap()
    };

    let (status, _, body) = send(&app, lookup("Paris")).await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "loaded");

    let (_, _, body) = send(&app, lookup("Qwxyz123")).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "failed");
    assert_eq!(json["message"], "City not found. Please try again.");
    assert_eq!(json["last"]["current"]["city"], "Paris");

    let (_, _, body) = send(&app, get("/api/v1/state")).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["city"], "Qwxyz123");
    assert_eq!(json["status"], "failed");

    let (_, _, html) = send(&app, get("/")).await;
    assert!(html.contains("City not found. Please try again."));
    assert!(html.contains("<h1>Paris, FR</h1>"));
}

#[tokio::test]
async fn test_initial_page_is_idle() {
    let server = MockServer::start().await;
    let app = build_app(test_state(&server));

    let (_, _, body) = send(&app, get("/api/v1/state")).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "idle");
    assert_eq!(json["city"], "London");

    let (status, _, html) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"value="London""#));
}

#[tokio::test]
async fn test_openapi_document_served() {
    let server = MockServer::start().await;
    let app = build_app(test_state(&server));

    let (status, _, body) = send(&app, get("/api-docs/openapi.json")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("WeatherResponse"));
}

//! Weather API integration tests
//!
//! Runs the protected weather route against a mock upstream so tests cover
//! the full chain: token gate, query validation, upstream call, and the
//! error mapping for unknown cities and outages.

mod common;

use axum::http::StatusCode;
use common::{body_json, issue_token, spawn_app, spawn_app_with};
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn london_report() -> serde_json::Value {
    json!({
        "name": "London",
        "sys": { "country": "GB" },
        "main": { "temp": 18.5, "humidity": 72, "pressure": 1012 },
        "wind": { "speed": 4.1, "deg": 250 },
        "weather": [{ "id": 802, "main": "Clouds", "description": "scattered clouds" }],
        "cod": 200
    })
}

#[tokio::test]
async fn test_weather_returns_report_for_known_city() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("q", "London"))
        .and(query_param("appid", "test-key"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_report()))
        .mount(&upstream)
        .await;

    let app = spawn_app_with(&upstream.uri()).await;
    let token = issue_token(Uuid::new_v4(), 3600);

    let response = app
        .get_with_auth("/api/weather?city=London", &format!("Bearer {token}"))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["name"], "London");
    assert_eq!(body["sys"]["country"], "GB");
    assert_eq!(body["main"]["temp"], 18.5);
    assert_eq!(body["main"]["humidity"], 72.0);
    assert_eq!(body["wind"]["speed"], 4.1);
    assert_eq!(body["weather"][0]["main"], "Clouds");
    assert_eq!(body["weather"][0]["description"], "scattered clouds");
}

#[tokio::test]
async fn test_weather_unknown_city_returns_404() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("q", "Narnia"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({ "cod": "404", "message": "city not found" })),
        )
        .mount(&upstream)
        .await;

    let app = spawn_app_with(&upstream.uri()).await;
    let token = issue_token(Uuid::new_v4(), 3600);

    let response = app
        .get_with_auth("/api/weather?city=Narnia", &format!("Bearer {token}"))
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({ "error": "City not found" }));
}

#[tokio::test]
async fn test_weather_missing_city_returns_400() {
    let app = spawn_app().await;
    let token = issue_token(Uuid::new_v4(), 3600);

    let response = app
        .get_with_auth("/api/weather", &format!("Bearer {token}"))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({ "error": "City is required" }));
}

#[tokio::test]
async fn test_weather_blank_city_returns_400() {
    let app = spawn_app().await;
    let token = issue_token(Uuid::new_v4(), 3600);

    let response = app
        .get_with_auth("/api/weather?city=%20%20", &format!("Bearer {token}"))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({ "error": "City is required" }));
}

#[tokio::test]
async fn test_weather_upstream_unreachable_returns_502() {
    // The default fixture points at a port that refuses connections.
    let app = spawn_app().await;
    let token = issue_token(Uuid::new_v4(), 3600);

    let response = app
        .get_with_auth("/api/weather?city=London", &format!("Bearer {token}"))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Failed to fetch weather data" })
    );
}

#[tokio::test]
async fn test_weather_upstream_error_status_returns_502() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "cod": 401, "message": "Invalid API key" })),
        )
        .mount(&upstream)
        .await;

    let app = spawn_app_with(&upstream.uri()).await;
    let token = issue_token(Uuid::new_v4(), 3600);

    let response = app
        .get_with_auth("/api/weather?city=London", &format!("Bearer {token}"))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Failed to fetch weather data" })
    );
}

#[tokio::test]
async fn test_weather_validates_token_before_upstream_call() {
    let upstream = MockServer::start().await;
    // No mock mounted: any upstream request would come back 404 and surface
    // as a city error, so a 401 here proves the gate ran first.
    let app = spawn_app_with(&upstream.uri()).await;

    let response = app
        .get_with_auth("/api/weather?city=London", "Bearer not.a.real.token")
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        json!({ "msg": "Invalid or expired token" })
    );
    assert!(upstream.received_requests().await.unwrap().is_empty());
}

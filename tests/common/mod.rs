//! Shared fixtures for integration tests
//!
//! Builds the full router against a throwaway in-memory SQLite database so
//! each test drives the API exactly as an HTTP client would. Responses come
//! back through `tower::ServiceExt::oneshot` without binding a socket.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use chrono::Duration;
use http_body_util::BodyExt;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::ServiceExt;
use uuid::Uuid;

use weathersnap::auth::TokenIssuer;
use weathersnap::routes::create_router;
use weathersnap::server::AppState;
use weathersnap::weather::WeatherClient;

/// Signing secret shared by every test issuer.
pub const TEST_SECRET: &str = "integration-test-secret";

/// Upstream address that refuses connections immediately.
pub const UNREACHABLE_UPSTREAM: &str = "http://127.0.0.1:9";

/// A fully wired router plus handles to the state behind it.
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub tokens: TokenIssuer,
}

/// Build an app with the default one-hour token lifetime and an unreachable
/// weather upstream. Tests that need a live upstream use [`spawn_app_with`].
pub async fn spawn_app() -> TestApp {
    spawn_app_with(UNREACHABLE_UPSTREAM).await
}

/// Build an app whose weather client points at the given base URL.
pub async fn spawn_app_with(weather_base_url: &str) -> TestApp {
    // A single connection keeps every query on the same in-memory database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let tokens = TokenIssuer::new(TEST_SECRET, Duration::seconds(3600));
    let weather = WeatherClient::new(weather_base_url.to_string(), "test-key".to_string());

    let state = AppState {
        pool: pool.clone(),
        tokens: tokens.clone(),
        weather,
    };

    TestApp {
        router: create_router(state),
        pool,
        tokens,
    }
}

impl TestApp {
    /// POST a JSON body and return the raw response.
    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> Response<Body> {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// GET without an Authorization header.
    pub async fn get(&self, uri: &str) -> Response<Body> {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// GET with the given Authorization header value, passed through verbatim.
    pub async fn get_with_auth(&self, uri: &str, auth_value: &str) -> Response<Body> {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .header(header::AUTHORIZATION, auth_value)
            .body(Body::empty())
            .unwrap();
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Register an account and log it in, returning the session token.
    pub async fn signup_and_login(&self, email: &str, password: &str) -> String {
        let response = self
            .post_json(
                "/api/auth/signup",
                serde_json::json!({ "email": email, "password": password }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = self
            .post_json(
                "/api/auth/login",
                serde_json::json!({ "email": email, "password": password }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);

        body_json(response).await["token"]
            .as_str()
            .expect("login response carried no token")
            .to_string()
    }
}

/// Sign a token for an arbitrary subject with a custom lifetime. Uses the
/// shared test secret, so the app under test accepts the signature.
pub fn issue_token(user_id: Uuid, ttl_secs: i64) -> String {
    TokenIssuer::new(TEST_SECRET, Duration::seconds(ttl_secs))
        .issue(user_id)
        .expect("failed to sign test token")
}

/// Fetch the stored id and password hash for an email.
pub async fn stored_user(pool: &SqlitePool, email: &str) -> (Uuid, String) {
    sqlx::query_as("SELECT id, password_hash FROM users WHERE email = ?")
        .bind(email)
        .fetch_one(pool)
        .await
        .expect("no user row for email")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body was not JSON")
}

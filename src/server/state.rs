/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct is the central state container, holding:
 * - The SQLite connection pool
 * - The session token issuer (keys built once at startup)
 * - The upstream weather client
 *
 * # Thread Safety
 *
 * Every field is cheap to clone and safe to share: the pool and the HTTP
 * client clone handles to shared internals, and the token issuer is
 * read-only after construction.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract just the part of the
 * state they need, e.g. `State(pool): State<SqlitePool>`, instead of the
 * whole `AppState`.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::auth::sessions::TokenIssuer;
use crate::weather::client::WeatherClient;

/// Application state shared across all request handlers
///
/// # Fields
///
/// * `pool` - SQLite connection pool for the credential store
/// * `tokens` - Session token issuer and verifier
/// * `weather` - Client for the upstream weather service
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: SqlitePool,

    /// Session token issuer, built once from configuration
    pub tokens: TokenIssuer,

    /// Upstream weather client
    pub weather: WeatherClient,
}

/// Allow handlers to extract the pool directly via `State(pool)`
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}

/// Allow the auth middleware and handlers to extract the token issuer
impl FromRef<AppState> for TokenIssuer {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

/// Allow the weather handler to extract the upstream client
impl FromRef<AppState> for WeatherClient {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.weather.clone()
    }
}

/**
 * Server Initialization
 *
 * This module handles the setup of the Axum HTTP server: database
 * connection, state creation, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Open the SQLite pool (creating the database file if needed)
 * 2. Run embedded migrations
 * 3. Build the application state from configuration
 * 4. Create and configure the router
 *
 * Unlike the health of individual requests, initialization is all-or-
 * nothing: a connection or migration failure aborts startup.
 */

use std::str::FromStr;

use axum::Router;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::auth::sessions::TokenIssuer;
use crate::routes::router::create_router;
use crate::server::config::Config;
use crate::server::state::AppState;
use crate::weather::client::WeatherClient;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Validated configuration loaded at startup
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Errors
///
/// Fails if the database cannot be opened or the migrations do not apply.
pub async fn create_app(config: &Config) -> Result<Router<()>, Box<dyn std::error::Error>> {
    tracing::info!("Initializing weathersnap backend server");

    let pool = connect_database(&config.database_url).await?;

    let app_state = AppState {
        pool,
        tokens: TokenIssuer::new(&config.jwt_secret, config.token_ttl),
        weather: WeatherClient::new(
            config.weather_base_url.clone(),
            config.weather_api_key.clone(),
        ),
    };

    Ok(create_router(app_state))
}

/// Open the connection pool and bring the schema up to date
async fn connect_database(database_url: &str) -> Result<SqlitePool, Box<dyn std::error::Error>> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database ready");

    Ok(pool)
}

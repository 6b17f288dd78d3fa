/**
 * Server Configuration
 *
 * This module loads and validates server configuration from environment
 * variables (a `.env` file is read at startup when present).
 *
 * # Variables
 *
 * | Variable | Required | Default |
 * |---|---|---|
 * | `JWT_SECRET` | yes | - |
 * | `DATABASE_URL` | yes | - |
 * | `WEATHER_API_KEY` | yes | - |
 * | `SERVER_PORT` | no | 5000 |
 * | `TOKEN_TTL_SECS` | no | 3600 |
 * | `WEATHER_BASE_URL` | no | the public weather endpoint |
 *
 * # Fail Fast
 *
 * Loading fails if a required variable is missing or empty. In particular
 * the server never starts with an undefined signing secret; tokens signed
 * with a fallback value would all be forgeable.
 */

use chrono::Duration;
use thiserror::Error;

/// Default listen port
const DEFAULT_PORT: u16 = 5000;

/// Default session token lifetime (one hour)
const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

/// Default upstream weather endpoint
const DEFAULT_WEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Configuration loading failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is not set
    #[error("{0} is not set")]
    Missing(&'static str),
    /// A required variable is set but empty
    #[error("{0} is empty")]
    Empty(&'static str),
    /// A variable is set but does not parse or is out of range
    #[error("{0} is invalid")]
    Invalid(&'static str),
}

/// Validated server configuration
///
/// Built once at startup; the rest of the application receives values from
/// here and never reads the environment again.
#[derive(Debug, Clone)]
pub struct Config {
    /// HS256 signing secret for session tokens
    pub jwt_secret: String,
    /// SQLite connection string, e.g. `sqlite:weathersnap.db`
    pub database_url: String,
    /// Listen port
    pub server_port: u16,
    /// Session token lifetime
    pub token_ttl: Duration,
    /// API key for the upstream weather service
    pub weather_api_key: String,
    /// Endpoint of the upstream weather service
    pub weather_base_url: String,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns the first problem found: a missing or empty required
    /// variable, or an optional variable that does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = require("JWT_SECRET")?;
        let database_url = require("DATABASE_URL")?;
        let weather_api_key = require("WEATHER_API_KEY")?;

        let server_port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid("SERVER_PORT"))?,
            Err(_) => DEFAULT_PORT,
        };

        let ttl_secs = match std::env::var("TOKEN_TTL_SECS") {
            Ok(raw) => {
                let secs = raw
                    .parse::<i64>()
                    .map_err(|_| ConfigError::Invalid("TOKEN_TTL_SECS"))?;
                if secs <= 0 {
                    return Err(ConfigError::Invalid("TOKEN_TTL_SECS"));
                }
                secs
            }
            Err(_) => DEFAULT_TOKEN_TTL_SECS,
        };

        let weather_base_url = std::env::var("WEATHER_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_WEATHER_BASE_URL.to_string());

        Ok(Self {
            jwt_secret,
            database_url,
            server_port,
            token_ttl: Duration::seconds(ttl_secs),
            weather_api_key,
            weather_base_url,
        })
    }
}

/// Read a required variable, rejecting missing or blank values
fn require(name: &'static str) -> Result<String, ConfigError> {
    let value = std::env::var(name).map_err(|_| ConfigError::Missing(name))?;
    if value.trim().is_empty() {
        return Err(ConfigError::Empty(name));
    }
    Ok(value)
}

/**
 * Backend Error Types
 *
 * This module defines the error types returned by the authentication and
 * weather features. Each error knows its HTTP status code and the message
 * that is safe to put on the wire.
 *
 * # Error Categories
 *
 * ## Auth Errors
 *
 * Auth errors occur while registering or authenticating users:
 * - Missing or empty request fields
 * - Duplicate email on signup
 * - Unknown email or wrong password on login (reported identically)
 * - Storage or hashing failures
 *
 * ## Weather Errors
 *
 * Weather errors occur while proxying the upstream weather service:
 * - Missing city query parameter
 * - Unknown city (upstream 404)
 * - Upstream transport or decoding failures
 *
 * # Message Policy
 *
 * Internal failures (storage, hashing, upstream transport) are logged with
 * full detail but surface only a generic message. Login failures never
 * reveal whether the email exists.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::auth::sessions::TokenError;

/// Errors produced by the signup/login flow
///
/// Each variant maps to a fixed HTTP status and wire message via
/// [`AuthError::status_code`] and [`AuthError::message`].
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required request field was missing or empty
    #[error("{field} is required")]
    Validation {
        /// Display name of the offending field
        field: &'static str,
    },

    /// Signup attempted with an email that already has an account
    #[error("email already registered")]
    DuplicateEmail,

    /// Unknown email or wrong password; the two cases are not distinguished
    /// on the wire
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The authenticated subject has no matching user record
    #[error("user not found")]
    UserNotFound,

    /// The credential store failed or is unreachable
    #[error("storage error: {0}")]
    Storage(#[source] sqlx::Error),

    /// Password hashing or verification failed internally
    #[error("password hash error: {0}")]
    Hash(#[source] bcrypt::BcryptError),

    /// Token issuance failed
    #[error(transparent)]
    Token(#[from] TokenError),
}

impl AuthError {
    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation`, `DuplicateEmail`, `InvalidCredentials` - 400 Bad Request
    /// - `UserNotFound` - 404 Not Found
    /// - `Storage` - 503 Service Unavailable
    /// - `Hash` - 500 Internal Server Error
    /// - `Token` - 401 for verification failures, 500 for issuance failures
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::DuplicateEmail => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::BAD_REQUEST,
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Hash(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Token(err) => match err {
                TokenError::Creation(_) => StatusCode::INTERNAL_SERVER_ERROR,
                _ => StatusCode::UNAUTHORIZED,
            },
        }
    }

    /// Get the message that is safe to return to clients
    ///
    /// Internal errors (`Storage`, `Hash`, failed issuance) surface a generic
    /// message; the underlying cause stays in the logs.
    pub fn message(&self) -> String {
        match self {
            Self::Validation { field } => format!("{} is required", field),
            Self::DuplicateEmail => "Email already registered".to_string(),
            Self::InvalidCredentials => "Invalid email or password".to_string(),
            Self::UserNotFound => "User not found".to_string(),
            Self::Storage(_) => "Service temporarily unavailable".to_string(),
            Self::Hash(_) => "Server error".to_string(),
            Self::Token(err) => match err {
                TokenError::Creation(_) => "Server error".to_string(),
                other => other.client_message().to_string(),
            },
        }
    }
}

/// Errors produced by the weather lookup feature
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The `city` query parameter was missing or empty
    #[error("city is required")]
    MissingCity,

    /// The upstream weather service does not know the requested city
    #[error("city not found")]
    CityNotFound,

    /// The upstream request failed (connect, timeout, non-404 error status)
    #[error("weather upstream error: {0}")]
    Upstream(#[source] reqwest::Error),

    /// The upstream answered with a body that does not match the expected shape
    #[error("weather response malformed")]
    Malformed,
}

impl WeatherError {
    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `MissingCity` - 400 Bad Request
    /// - `CityNotFound` - 404 Not Found
    /// - `Upstream`, `Malformed` - 502 Bad Gateway
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingCity => StatusCode::BAD_REQUEST,
            Self::CityNotFound => StatusCode::NOT_FOUND,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Malformed => StatusCode::BAD_GATEWAY,
        }
    }

    /// Get the message that is safe to return to clients
    pub fn message(&self) -> String {
        match self {
            Self::MissingCity => "City is required".to_string(),
            Self::CityNotFound => "City not found".to_string(),
            Self::Upstream(_) | Self::Malformed => "Failed to fetch weather data".to_string(),
        }
    }
}

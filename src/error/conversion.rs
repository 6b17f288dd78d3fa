/**
 * Error Conversion
 *
 * This module implements `IntoResponse` for the backend error types so
 * handlers can return them directly with `?`.
 *
 * # Response Formats
 *
 * Service errors (auth, weather) are returned as:
 * ```json
 * {
 *   "error": "Error message"
 * }
 * ```
 *
 * Token rejections from the auth middleware use the shape the frontend
 * expects:
 * ```json
 * {
 *   "msg": "No token provided"
 * }
 * ```
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::auth::sessions::TokenError;
use crate::error::types::{AuthError, WeatherError};

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl IntoResponse for WeatherError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl IntoResponse for TokenError {
    /// Convert a token error into the middleware's rejection response
    ///
    /// Verification failures answer 401 with a `msg` body that never says
    /// whether the token was malformed, forged, or expired. Issuance failures
    /// are server faults and answer 500 with an `error` body.
    fn into_response(self) -> Response {
        match self {
            TokenError::Creation(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": self.client_message() })),
            )
                .into_response(),
            _ => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "msg": self.client_message() })),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_response_status() {
        let response = AuthError::InvalidCredentials.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_missing_token_response_status() {
        let response = TokenError::Missing.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_weather_error_response_status() {
        let response = WeatherError::CityNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

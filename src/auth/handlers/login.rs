/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Issue session token
 * 4. Return the token
 *
 * # Security
 *
 * - Passwords are verified using bcrypt
 * - Unknown email and wrong password return the same response, so login
 *   cannot be used to probe which emails are registered
 * - Passwords are never logged or returned in responses
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::auth::service;
use crate::error::AuthError;
use crate::server::state::AppState;

/// Login handler
///
/// This handler processes user authentication requests. It verifies the
/// email and password and returns a session token if authentication
/// succeeds. The token expires after the configured lifetime (one hour by
/// default); nothing is stored server-side.
///
/// # Arguments
///
/// * `State(state)` - Application state (pool and token issuer)
/// * `Json(request)` - Login request containing email and password
///
/// # Returns
///
/// JSON response with the session token, or an error response
///
/// # Errors
///
/// * `400 Bad Request` - If the email is unknown or the password is wrong
///   (reported identically)
/// * `503 Service Unavailable` - If the database is unreachable
/// * `500 Internal Server Error` - If hash verification or token signing fails
///
/// # Example Request
///
/// ```http
/// POST /api/auth/login HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "securepassword123"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthError> {
    tracing::info!("Login request for email: {}", request.email);

    let token = service::login(&state.pool, &state.tokens, &request.email, &request.password).await?;

    tracing::info!("User logged in successfully: {}", request.email);

    Ok(Json(LoginResponse { token }))
}

/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /api/auth/signup.
 *
 * # Registration Process
 *
 * 1. Check that email and password are present
 * 2. Hash password using bcrypt
 * 3. Create user in database
 * 4. Return a confirmation message
 *
 * Signup does not issue a token. The client logs in afterwards to get one.
 *
 * # Validation
 *
 * - Email and password must be present and non-empty
 * - Email must be unique (enforced by the database)
 *
 * # Security
 *
 * - Passwords are hashed using bcrypt with DEFAULT_COST
 * - Passwords are never logged or returned in responses
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::auth::handlers::types::{SignupRequest, SignupResponse};
use crate::auth::service;
use crate::error::AuthError;

/// Sign up handler
///
/// This handler processes user registration requests. It validates the
/// input and creates a new user account. Unlike login, it does not return a
/// token.
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `Json(request)` - Signup request containing email and password
///
/// # Returns
///
/// JSON confirmation message, or an error response
///
/// # Errors
///
/// * `400 Bad Request` - If email or password is missing, or the email is
///   already registered
/// * `503 Service Unavailable` - If the database is unreachable
/// * `500 Internal Server Error` - If password hashing fails
///
/// # Example Request
///
/// ```http
/// POST /api/auth/signup HTTP/1.1
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
///   "message": "User created successfully"
/// }
/// ```
pub async fn signup(
    State(pool): State<SqlitePool>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<SignupResponse>, AuthError> {
    tracing::info!("Signup request for email: {}", request.email);

    let user = service::signup(&pool, &request.email, &request.password).await?;

    tracing::info!("User created successfully: {}", user.email);

    Ok(Json(SignupResponse {
        message: "User created successfully".to_string(),
    }))
}

/**
 * Authentication Service
 *
 * This module implements the signup and login flows as plain async
 * functions. HTTP concerns stay out: callers get a `Result` and map it to a
 * response at the boundary.
 *
 * # Signup
 *
 * 1. Check that email and password are present
 * 2. Hash the password with bcrypt
 * 3. Insert the user record
 *
 * No token is issued on signup; the client logs in afterwards.
 *
 * # Login
 *
 * 1. Look up the user by exact email
 * 2. Verify the password against the stored bcrypt hash
 * 3. Issue a session token carrying the user id
 *
 * Unknown email and wrong password produce the same `InvalidCredentials`
 * error so responses cannot be used to probe which emails are registered.
 * The logs keep the distinction.
 *
 * # Validation
 *
 * Presence is the only signup validation: no email-format or
 * password-strength rules are applied.
 */

use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::SqlitePool;

use crate::auth::sessions::TokenIssuer;
use crate::auth::users::{self, User};
use crate::error::AuthError;

/// Register a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - Email for the new account
/// * `password` - Plaintext password; hashed before storage, never logged
///
/// # Returns
/// The created user record
///
/// # Errors
/// * `Validation` - Email or password is empty
/// * `DuplicateEmail` - The email already has an account
/// * `Hash` - bcrypt failed internally
/// * `Storage` - The database failed or is unreachable
pub async fn signup(pool: &SqlitePool, email: &str, password: &str) -> Result<User, AuthError> {
    if email.is_empty() {
        tracing::warn!("Signup rejected: missing email");
        return Err(AuthError::Validation { field: "Email" });
    }
    if password.is_empty() {
        tracing::warn!("Signup rejected: missing password for {}", email);
        return Err(AuthError::Validation { field: "Password" });
    }

    let password_hash = hash(password, DEFAULT_COST).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        AuthError::Hash(e)
    })?;

    // The UNIQUE constraint on email decides duplicate races, not a
    // read-then-insert check
    let user = users::create_user(pool, email, &password_hash)
        .await
        .map_err(|e| {
            if users::is_unique_violation(&e) {
                tracing::warn!("Signup rejected: email already registered: {}", email);
                AuthError::DuplicateEmail
            } else {
                tracing::error!("Failed to create user: {:?}", e);
                AuthError::Storage(e)
            }
        })?;

    Ok(user)
}

/// Authenticate a user and issue a session token
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `tokens` - Token issuer holding the signing keys and lifetime
/// * `email` - Email to look up (matched exactly)
/// * `password` - Plaintext password to verify
///
/// # Returns
/// A signed session token whose subject is the user's id
///
/// # Errors
/// * `InvalidCredentials` - Unknown email or wrong password
/// * `Hash` - The stored hash is unreadable
/// * `Storage` - The database failed or is unreachable
/// * `Token` - Signing failed
pub async fn login(
    pool: &SqlitePool,
    tokens: &TokenIssuer,
    email: &str,
    password: &str,
) -> Result<String, AuthError> {
    let user = users::get_user_by_email(pool, email)
        .await
        .map_err(|e| {
            tracing::error!("Database error during login: {:?}", e);
            AuthError::Storage(e)
        })?
        .ok_or_else(|| {
            tracing::warn!("Login failed: unknown email: {}", email);
            AuthError::InvalidCredentials
        })?;

    let valid = verify(password, &user.password_hash).map_err(|e| {
        tracing::error!("Password verification error for {}: {:?}", email, e);
        AuthError::Hash(e)
    })?;

    if !valid {
        tracing::warn!("Login failed: wrong password for {}", email);
        return Err(AuthError::InvalidCredentials);
    }

    let token = tokens.issue(user.id).map_err(|e| {
        tracing::error!("Failed to issue token for {}: {:?}", email, e);
        AuthError::Token(e)
    })?;

    Ok(token)
}

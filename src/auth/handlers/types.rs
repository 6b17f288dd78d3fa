/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by authentication
 * handlers. These types are shared across the signup, login, and get_me
 * handlers.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sign up request
///
/// Contains the email and password for user registration. Fields default to
/// empty strings when absent so a missing key is reported as a validation
/// error instead of a deserialization failure.
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    /// User's email address
    #[serde(default)]
    pub email: String,
    /// User's password (hashed before storage)
    #[serde(default)]
    pub password: String,
}

/// Login request
///
/// Contains the email and password for user authentication.
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// User's email address
    #[serde(default)]
    pub email: String,
    /// User's password (verified against the stored hash)
    #[serde(default)]
    pub password: String,
}

/// Signup response
///
/// Signup confirms creation only; no token is issued. The client is
/// expected to log in afterwards.
#[derive(Serialize, Deserialize, Debug)]
pub struct SignupResponse {
    /// Human-readable confirmation
    pub message: String,
}

/// Login response
///
/// Contains the session token the client attaches to later requests.
#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    /// Signed JWT whose subject is the user's id
    pub token: String,
}

/// User response (without sensitive data)
///
/// Contains user information that is safe to return to clients. Does not
/// include the password hash.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    /// User's email address
    pub email: String,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}

/**
 * Session Tokens
 *
 * This module handles JWT issuance and verification for user sessions.
 *
 * # Token Model
 *
 * Sessions are stateless bearer tokens signed with HS256. Claims carry the
 * user id (`sub`), issue time (`iat`), and expiry (`exp`); nothing is
 * persisted server-side and there is no revocation. A token is valid iff
 * its signature checks out against the configured secret and `exp` has not
 * passed. Expiry is exact: zero clock leeway.
 *
 * # Key Handling
 *
 * The signing keys are derived once from configuration at startup and held
 * by [`TokenIssuer`] inside the application state. The secret is never read
 * from the environment after boot.
 */

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Token failures, kept distinct for logging
///
/// The wire response collapses `Invalid` and `Expired` into one generic
/// message so callers cannot probe why a token was rejected; the variant
/// itself still reaches the logs.
#[derive(Debug, Error)]
pub enum TokenError {
    /// No token was presented
    #[error("no token provided")]
    Missing,
    /// Malformed token, bad signature, or a subject that is not a UUID
    #[error("token invalid")]
    Invalid,
    /// Signature checks out but `exp` has passed
    #[error("token expired")]
    Expired,
    /// Signing failed while issuing a token
    #[error("token creation failed: {0}")]
    Creation(#[source] jsonwebtoken::errors::Error),
}

impl TokenError {
    /// The message that is safe to return to clients
    pub fn client_message(&self) -> &'static str {
        match self {
            Self::Missing => "No token provided",
            Self::Invalid | Self::Expired => "Invalid or expired token",
            Self::Creation(_) => "Server error",
        }
    }
}

/// Issues and verifies session tokens
///
/// Built once from configuration and shared through the application state.
/// Cloning is cheap; the keys are plain byte buffers.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenIssuer {
    /// Create an issuer from the signing secret and token lifetime
    ///
    /// # Arguments
    /// * `secret` - HS256 signing secret (validated non-empty at config load)
    /// * `ttl` - Token lifetime; issued tokens expire `ttl` after issuance
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact: a token is rejected the moment `exp` passes
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    /// Issue a signed token for a user
    ///
    /// # Arguments
    /// * `user_id` - The subject the token acts for
    ///
    /// # Returns
    /// Signed JWT string, or `TokenError::Creation` if signing fails
    pub fn issue(&self, user_id: Uuid) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(TokenError::Creation)
    }

    /// Verify a token and extract its subject
    ///
    /// # Arguments
    /// * `token` - JWT string as presented by the client
    ///
    /// # Returns
    /// The user id the token was issued for
    ///
    /// # Errors
    /// * `TokenError::Expired` - Signature is fine but `exp` has passed
    /// * `TokenError::Invalid` - Anything else: malformed token, wrong
    ///   signature, or a `sub` that is not a UUID
    pub fn verify(&self, token: &str) -> Result<Uuid, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            }
        })?;

        Uuid::parse_str(&data.claims.sub).map_err(|_| TokenError::Invalid)
    }
}

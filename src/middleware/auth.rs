/**
 * Authentication Middleware
 *
 * This module provides the middleware protecting routes that require a
 * logged-in user. It extracts the session token from the Authorization
 * header, verifies it, and attaches the subject id to the request for
 * handlers to use.
 *
 * # Header Forms
 *
 * Both forms are accepted and treated identically:
 *
 * ```http
 * Authorization: Bearer <token>
 * Authorization: <token>
 * ```
 *
 * # Rejections
 *
 * - Missing header, empty value, or nothing after the `Bearer ` prefix:
 *   401 `{"msg": "No token provided"}`
 * - Any verification failure (malformed, bad signature, expired):
 *   401 `{"msg": "Invalid or expired token"}`
 *
 * The middleware never touches the database: a token that verifies and has
 * not expired is honored unconditionally.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::sessions::{TokenError, TokenIssuer};

/// Authenticated user data extracted from the session token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Reads the Authorization header (raw token or `Bearer <token>`)
/// 2. Verifies the token against the issuer's keys
/// 3. Attaches an [`AuthenticatedUser`] to the request extensions
///
/// Requests that fail verification are answered directly and never reach
/// the protected handler.
pub async fn require_auth(
    State(tokens): State<TokenIssuer>,
    mut request: Request,
    next: Next,
) -> Result<Response, TokenError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("");

    // "Bearer <token>" or the bare token
    let token = match header.strip_prefix("Bearer ") {
        Some(rest) => rest.trim(),
        None => header,
    };

    if token.is_empty() {
        tracing::warn!("Missing token on {}", request.uri().path());
        return Err(TokenError::Missing);
    }

    let user_id = tokens.verify(token).map_err(|e| {
        tracing::warn!("Rejected token on {}: {}", request.uri().path(), e);
        e
    })?;

    request.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Use as a handler parameter on routes behind [`require_auth`] to get the
/// verified subject id. Rejects with the middleware's 401 shape if the
/// middleware did not run.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = TokenError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                TokenError::Missing
            })?;

        Ok(AuthUser(user))
    }
}

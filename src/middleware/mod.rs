//! Middleware Module
//!
//! Request middleware for the HTTP server. Currently this is the
//! authentication layer that gates the protected routes.

/// Token-verification middleware and the authenticated-user extractor
pub mod auth;

pub use auth::{require_auth, AuthUser, AuthenticatedUser};

//! Authentication HTTP Handlers
//!
//! Handlers for the authentication endpoints. Each handler lives in its own
//! file; shared request/response types live in `types`.
//!
//! - `POST /api/auth/signup` - [`signup`]
//! - `POST /api/auth/login` - [`login`]
//! - `GET /api/auth/me` - [`get_me`] (requires authentication)

/// Request/response types
pub mod types;

/// User registration handler
pub mod signup;

/// User authentication handler
pub mod login;

/// Get current user handler
pub mod me;

// Re-export the handler functions for route configuration
pub use login::login;
pub use me::get_me;
pub use signup::signup;

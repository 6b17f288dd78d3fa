//! Weather Snap Backend
//!
//! Backend server for Weather Snap: username/password authentication with
//! stateless session tokens, gating a weather-lookup endpoint.
//!
//! # Overview
//!
//! The server exposes a small JSON API:
//!
//! - `POST /api/auth/signup` - Create an account (bcrypt-hashed password)
//! - `POST /api/auth/login` - Verify credentials and issue a session token
//! - `GET /api/auth/me` - Current user info (requires authentication)
//! - `GET /api/weather?city=` - Current conditions via the upstream
//!   weather service (requires authentication)
//! - `GET /health` - Liveness probe
//!
//! # Module Structure
//!
//! - **`auth`** - Users, signup/login flows, session tokens, HTTP handlers
//! - **`middleware`** - Token-verification layer for protected routes
//! - **`weather`** - Upstream weather client and lookup handler
//! - **`routes`** - Router assembly
//! - **`server`** - Configuration, application state, initialization
//! - **`error`** - Error taxonomy and HTTP conversions
//!
//! # Session Model
//!
//! Sessions are stateless HS256 JWTs carrying the user id. There is no
//! revocation list: a token that verifies against the signing secret and
//! has not expired is honored, and logout is purely a client-side matter.
//! Tokens expire one hour after issuance by default.
//!
//! # Usage
//!
//! ```rust,no_run
//! use weathersnap::server::{Config, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Fallible operations return `Result` with the error types in
//! [`error`]; handlers convert them to JSON responses at the boundary.
//! Only missing startup configuration is fatal to the process.

/// Authentication: users, sessions, service flows, HTTP handlers
pub mod auth;

/// Error taxonomy and HTTP conversions
pub mod error;

/// Request middleware (token verification)
pub mod middleware;

/// Router assembly
pub mod routes;

/// Configuration, state, and server initialization
pub mod server;

/// Weather lookup feature
pub mod weather;

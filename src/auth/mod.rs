//! Authentication Module
//!
//! This module handles user registration, authentication, and session
//! tokens. It provides the HTTP handlers for the auth endpoints plus the
//! service functions and storage operations behind them.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - Session token issuance and verification
//! ├── service.rs      - Signup/login flows (no HTTP types)
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── signup.rs   - User registration handler
//!     ├── login.rs    - User authentication handler
//!     └── me.rs       - Get current user handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: Email and password → password hashed → user created.
//!    No token; the client logs in afterwards.
//! 2. **Login**: Email and password → credentials verified → session token
//!    returned (one-hour lifetime by default).
//! 3. **Protected request**: Client sends the token in the `Authorization`
//!    header → middleware verifies it → handler runs with the subject id.
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Session tokens are stateless JWTs; a valid, unexpired token is always
//!   honored (no revocation list)
//! - Login failures never reveal whether the email exists

/// User data model and database operations
pub mod users;

/// Session token issuance and verification
pub mod sessions;

/// Signup and login flows
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{LoginRequest, LoginResponse, SignupRequest, SignupResponse, UserResponse};
pub use handlers::{get_me, login, signup};
pub use sessions::{Claims, TokenError, TokenIssuer};
pub use users::User;

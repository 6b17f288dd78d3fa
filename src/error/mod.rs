//! Error Module
//!
//! This module defines the backend error taxonomy and the conversions that
//! turn errors into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs          - Module exports
//! ├── types.rs        - Error enums with status/message mapping
//! └── conversion.rs   - IntoResponse implementations
//! ```
//!
//! Token errors live with the issuer in [`crate::auth::sessions`]; their
//! HTTP conversion is implemented here alongside the others.

/// Error enums with status code and message mapping
pub mod types;

/// Conversions from errors to HTTP responses
pub mod conversion;

// Re-export commonly used types
pub use types::{AuthError, WeatherError};

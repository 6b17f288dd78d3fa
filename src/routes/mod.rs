//! Routes Module
//!
//! Router assembly for the HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports
//! ├── router.rs       - Top-level router creation
//! ├── api_routes.rs   - API endpoint wiring (public and protected)
//! └── health.rs       - Liveness probe
//! ```

/// API endpoint wiring
pub mod api_routes;

/// Liveness probe handler
pub mod health;

/// Top-level router creation
pub mod router;

pub use router::create_router;

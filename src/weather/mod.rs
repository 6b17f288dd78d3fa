//! Weather Module
//!
//! The weather-lookup feature: a typed client for the upstream weather
//! service and the protected HTTP handler in front of it.
//!
//! # Module Structure
//!
//! ```text
//! weather/
//! ├── mod.rs          - Module exports
//! ├── client.rs       - Upstream client and report types
//! └── handlers.rs     - GET /api/weather handler
//! ```

/// Upstream weather client and report types
pub mod client;

/// HTTP handler for the weather lookup
pub mod handlers;

pub use client::{WeatherClient, WeatherReport};
pub use handlers::get_weather;

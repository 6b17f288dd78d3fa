//! Server Module
//!
//! Configuration loading, application state, and server initialization.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports
//! ├── config.rs       - Environment configuration with fail-fast validation
//! ├── state.rs        - AppState and FromRef implementations
//! └── init.rs         - Pool setup, migrations, router assembly
//! ```

/// Environment configuration
pub mod config;

/// Server and database initialization
pub mod init;

/// Application state
pub mod state;

pub use config::{Config, ConfigError};
pub use init::create_app;
pub use state::AppState;

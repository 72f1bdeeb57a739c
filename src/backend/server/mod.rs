//! Server Module
//!
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`config`** - Opening the configured document store
//! - **`init`** - App creation and the serve loop
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `AppConfig::from_env` in the binary
//! 2. **Store**: PostgreSQL pool (migrated, pinged) or the in-memory store
//! 3. **State Creation**: store handle, token service, cookie policy
//! 4. **Router Creation**: routes, auth gate, CORS and tracing layers
//! 5. **Serve**: until Ctrl-C/SIGTERM, then close the pool

/// Application state management
pub mod state;

/// Document store opening
pub mod config;

/// Server initialization
pub mod init;

pub use init::{create_app, serve, App};
pub use state::AppState;

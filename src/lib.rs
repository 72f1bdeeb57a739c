//! MetaBlog - Main Library
//!
//! A small blogging backend: CRUD endpoints over three collections (blog
//! posts, wishlist entries, comments) and cookie-based authentication with
//! signed identity tokens.
//!
//! # Module Structure
//!
//! - **`shared`** - Record schemas, request bodies, acknowledgments,
//!   validation errors and configuration
//! - **`backend`** - Axum server, auth gate, route handlers, document store
//!
//! # Usage
//!
//! ```rust,no_run
//! use metablog::backend::server::{create_app, serve};
//! use metablog::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for boundary validation
//! - `backend::store::StoreError` for storage failures
//! - `backend::BackendError` for everything a handler can return; it
//!   converts into a JSON HTTP response

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;

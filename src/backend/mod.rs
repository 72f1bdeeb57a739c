//! Backend Module
//!
//! All server-side code: the Axum router, the auth gate, the route
//! handlers for each collection and the document store they call.
//!
//! # Architecture
//!
//! - **`server`** - Store opening, application state, app creation, serve loop
//! - **`routes`** - Router assembly and layers
//! - **`auth`** - Identity tokens, cookie policy, session handlers
//! - **`middleware`** - The auth gate and the `AuthUser` extractor
//! - **`blogs`**, **`wishlist`**, **`comments`** - Resource handlers
//! - **`store`** - `DocumentStore` trait with PostgreSQL and in-memory backends
//! - **`error`** - `BackendError` and its HTTP mapping
//!
//! # Request Flow
//!
//! ```text
//! request → [auth gate, protected routes only] → handler → store call → JSON
//! ```
//!
//! # Thread Safety
//!
//! Handlers share only `AppState`: an `Arc<dyn DocumentStore>` (a pooled
//! connection handle), the token service and the cookie policy. None of it
//! is mutated after startup.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and session cookies
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Blog post handlers
pub mod blogs;

/// Wishlist handlers
pub mod wishlist;

/// Comment handlers
pub mod comments;

/// Document store
pub mod store;

/// Backend error types
pub mod error;

pub use error::BackendError;
pub use server::{create_app, AppState};
pub use store::{DocumentStore, MemoryStore, PgStore};

//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs               - Module exports and documentation
//! ├── router.rs            - Main router creation, layers, fallback
//! ├── public_routes.rs     - Unauthenticated endpoints
//! └── protected_routes.rs  - Endpoints behind the auth gate
//! ```
//!
//! # Routes
//!
//! ## Public
//!
//! - `GET /` - Liveness text
//! - `POST /jwt`, `GET /logout` - Session cookie
//! - `GET /blogs`, `GET /blogs/{email}`, `GET /single-blog/{id}`
//! - `GET /recent-blogs`, `GET /featured`
//! - `POST /add-wishlist`
//! - `POST /post-comment`, `GET /comment/{id}`
//!
//! ## Protected
//!
//! - `POST /post-blog/{email}`
//! - `PATCH /update-blog/{id}/{email}`
//! - `DELETE /delete-blog/{id}`
//! - `GET /wishlist/{email}`
//! - `DELETE /delete-wishlist/{id}`

/// Main router creation
pub mod router;

/// Unauthenticated endpoints
pub mod public_routes;

/// Endpoints behind the auth gate
pub mod protected_routes;

pub use router::create_router;

//! Middleware Module
//!
//! - **`auth`** - The auth gate protecting owner-tied routes

pub mod auth;

pub use auth::{auth_middleware, extract_authenticated_user, AuthUser, AuthenticatedUser};

//! Session Handlers
//!
//! - **`issue_token`** - POST /jwt - Issue an identity cookie for an email
//! - **`logout`** - GET /logout - Expire the identity cookie
//!
//! Neither endpoint requires authentication.

/// Request and response types
pub mod types;

/// Token issuance handler
pub mod token;

/// Logout handler
pub mod logout;

pub use logout::logout;
pub use token::issue_token;
pub use types::{SessionResponse, TokenRequest};

//! Authentication Module
//!
//! Stateless cookie authentication. A client exchanges its email for a
//! signed identity token (`POST /jwt`), which is stored in an HTTP-only
//! cookie and checked by the auth gate in `backend::middleware` on every
//! protected route.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── sessions.rs     - Token issuance and verification
//! ├── cookies.rs      - Identity cookie attributes
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── token.rs    - POST /jwt
//!     └── logout.rs   - GET /logout
//! ```
//!
//! # Security
//!
//! - Tokens are HS256 JWTs carrying only the email claim
//! - Tokens expire after 365 days by default
//! - The cookie is HTTP-only; `Secure; SameSite=None` in production

/// Token issuance and verification
pub mod sessions;

/// Identity cookie attributes
pub mod cookies;

/// HTTP handlers for session endpoints
pub mod handlers;

pub use cookies::{CookiePolicy, TOKEN_COOKIE};
pub use handlers::{issue_token, logout};
pub use sessions::{Claims, TokenError, TokenService};

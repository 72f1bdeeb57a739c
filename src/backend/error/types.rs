/**
 * Backend Error Types
 *
 * Every route handler returns `Result<_, BackendError>`, so any failure,
 * storage failures included, becomes an HTTP response through
 * `IntoResponse` (see `conversion`).
 *
 * # Status Mapping
 *
 * | Variant        | Status |
 * |----------------|--------|
 * | `Unauthorized` | 401    |
 * | `Forbidden`    | 403    |
 * | `Conflict`     | 400    |
 * | `Validation`   | 400    |
 * | `NotFound`     | 404    |
 * | `Store`        | 500    |
 * | `Token`        | 500    |
 */

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::sessions::TokenError;
use crate::backend::store::StoreError;
use crate::shared::SharedError;

/// Message sent to clients in place of internal failure details
pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// No identity token was presented
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// The token is invalid or expired, or the caller is not the named owner
    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    /// The record already exists
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// No route matched
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// Request body or path failed boundary validation
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// The document store failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Token issuance failed
    #[error(transparent)]
    Token(#[from] TokenError),
}

impl BackendError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::Conflict { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Store(StoreError::Duplicate { .. }) => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Token(TokenError::Encoding(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Token(_) => StatusCode::FORBIDDEN,
        }
    }

    /// Client-facing message; internal failures never leak details
    pub fn message(&self) -> String {
        match self {
            Self::Unauthorized { message }
            | Self::Forbidden { message }
            | Self::Conflict { message }
            | Self::NotFound { message } => message.clone(),
            Self::Validation(err) => err.to_string(),
            Self::Store(StoreError::Duplicate { collection }) => {
                format!("Record already exists in {}", collection)
            }
            Self::Store(_) | Self::Token(TokenError::Encoding(_)) => INTERNAL_MESSAGE.to_string(),
            Self::Token(err) => err.to_string(),
        }
    }
}

/// Undecodable request bodies are validation failures
impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(SharedError::serialization(rejection.body_text()))
    }
}

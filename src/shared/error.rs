//! Shared Error Types
//!
//! This module defines error types raised while validating request bodies
//! and path parameters, before any storage call is made.
//!
//! # Error Categories
//!
//! - `SerializationError` - A request body could not be decoded
//! - `ValidationError` - A field failed boundary validation
//!
//! # Usage
//!
//! ```rust
//! use metablog::shared::error::SharedError;
//!
//! let error = SharedError::validation("title", "must not be blank");
//! ```
use thiserror::Error;

/// Errors produced by the shared model layer
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// The request body could not be decoded into the expected schema
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

//! Shared Module
//!
//! Types shared by the HTTP layer and the storage layer: record schemas,
//! request bodies, acknowledgments, validation errors and configuration.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Record and request schemas
pub mod models;

pub use config::{AppConfig, AppConfigBuilder, ConfigError, Environment};
pub use error::SharedError;
pub use models::{
    BlogFilter, BlogPost, BlogUpdate, Comment, DeleteAck, InsertAck, NewBlogPost, NewComment,
    NewWishlistEntry, UpdateAck, WishlistEntry,
};

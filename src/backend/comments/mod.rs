//! Comment Routes

pub mod handlers;

pub use handlers::{list_comments, post_comment};

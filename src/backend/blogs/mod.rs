//! Blog Post Routes
//!
//! Handlers for the `blogs` collection, including the two ranked listings
//! (recent and featured).

pub mod handlers;

pub use handlers::{
    create_blog, delete_blog, featured_blogs, get_blog, list_blogs, list_blogs_by_owner,
    recent_blogs, update_blog,
};

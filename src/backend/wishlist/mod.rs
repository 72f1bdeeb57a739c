//! Wishlist Routes

pub mod handlers;

pub use handlers::{add_wishlist, delete_wishlist, list_wishlist};

//! Document Store
//!
//! The storage seam of the backend. Each collection (blogs, wishlist,
//! comments) gets one trait whose methods map one-to-one onto the storage
//! calls the route handlers make; `DocumentStore` bundles the three so the
//! application state holds a single `Arc<dyn DocumentStore>`.
//!
//! # Implementations
//!
//! - **`PgStore`** - PostgreSQL through an `sqlx` connection pool
//! - **`MemoryStore`** - in-process collections, used when no database is
//!   configured and by the test suites
//!
//! Both implementations enforce the wishlist uniqueness invariant at the
//! storage level and report a violation as [`StoreError::Duplicate`].

use async_trait::async_trait;
use thiserror::Error;

use crate::shared::models::{
    BlogFilter, BlogPost, BlogUpdate, Comment, DeleteAck, InsertAck, NewBlogPost, NewComment,
    NewWishlistEntry, UpdateAck, WishlistEntry,
};

/// In-process implementation
pub mod memory;

/// PostgreSQL implementation
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Number of posts returned by the recent listing
pub const RECENT_LIMIT: i64 = 6;

/// Number of posts returned by the featured listing
pub const FEATURED_LIMIT: i64 = 10;

/// Storage failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database driver reported an error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A uniqueness constraint rejected the write
    #[error("duplicate record in {collection}")]
    Duplicate {
        /// Collection that rejected the write
        collection: &'static str,
    },

    /// Schema migrations could not be applied
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Operations on the `blogs` collection
#[async_trait]
pub trait BlogStore: Send + Sync {
    /// Insert a post owned by `owner`
    async fn insert_blog(&self, owner: &str, post: &NewBlogPost) -> StoreResult<InsertAck>;

    /// Find one post by identifier
    async fn find_blog(&self, id: i64) -> StoreResult<Option<BlogPost>>;

    /// Posts passing a normalized filter, identifier ascending
    async fn find_blogs(&self, filter: &BlogFilter) -> StoreResult<Vec<BlogPost>>;

    /// Posts owned by `owner`, identifier ascending
    async fn find_blogs_by_owner(&self, owner: &str) -> StoreResult<Vec<BlogPost>>;

    /// Update the post matching both `id` and `owner`
    async fn update_blog(&self, id: i64, owner: &str, update: &BlogUpdate)
        -> StoreResult<UpdateAck>;

    /// Delete the post matching both `id` and `owner`
    async fn delete_blog(&self, id: i64, owner: &str) -> StoreResult<DeleteAck>;

    /// The `limit` newest posts, identifier descending
    async fn recent_blogs(&self, limit: i64) -> StoreResult<Vec<BlogPost>>;

    /// The `limit` posts with the longest description, computed per call
    async fn featured_blogs(&self, limit: i64) -> StoreResult<Vec<BlogPost>>;
}

/// Operations on the `wishlist` collection
#[async_trait]
pub trait WishlistStore: Send + Sync {
    /// Entry for an (owner, post) pair, if any
    async fn find_wishlist_entry(&self, owner: &str, blog_id: i64)
        -> StoreResult<Option<WishlistEntry>>;

    /// Entry by identifier
    async fn find_wishlist_by_id(&self, id: i64) -> StoreResult<Option<WishlistEntry>>;

    /// Insert an entry; fails with `Duplicate` if the pair already exists
    async fn insert_wishlist(&self, entry: &NewWishlistEntry) -> StoreResult<InsertAck>;

    /// Entries owned by `owner`, identifier ascending
    async fn find_wishlist(&self, owner: &str) -> StoreResult<Vec<WishlistEntry>>;

    /// Delete the entry matching both `id` and `owner`
    async fn delete_wishlist(&self, id: i64, owner: &str) -> StoreResult<DeleteAck>;
}

/// Operations on the `comments` collection
#[async_trait]
pub trait CommentStore: Send + Sync {
    async fn insert_comment(&self, comment: &NewComment) -> StoreResult<InsertAck>;

    /// Comments on one post, identifier ascending
    async fn find_comments(&self, blog_id: i64) -> StoreResult<Vec<Comment>>;
}

/// The full store handed to route handlers
#[async_trait]
pub trait DocumentStore: BlogStore + WishlistStore + CommentStore {
    /// Round-trip to the backing store
    async fn ping(&self) -> StoreResult<()>;
}

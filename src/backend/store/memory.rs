//! In-process document store.
//!
//! Holds the three collections behind one `RwLock`. Every operation runs
//! under a single lock acquisition, so the wishlist uniqueness check and the
//! insert that follows it are atomic here.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{
    BlogStore, CommentStore, DocumentStore, StoreError, StoreResult, WishlistStore,
};
use crate::shared::models::{
    BlogFilter, BlogPost, BlogUpdate, Comment, DeleteAck, InsertAck, NewBlogPost, NewComment,
    NewWishlistEntry, UpdateAck, WishlistEntry,
};

#[derive(Debug, Default)]
struct Collections {
    next_id: i64,
    blogs: Vec<BlogPost>,
    wishlist: Vec<WishlistEntry>,
    comments: Vec<Comment>,
}

impl Collections {
    /// Identifiers are shared across collections and strictly increasing
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Document store kept in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlogStore for MemoryStore {
    async fn insert_blog(&self, owner: &str, post: &NewBlogPost) -> StoreResult<InsertAck> {
        let mut inner = self.inner.write().await;
        let id = inner.allocate_id();
        inner.blogs.push(BlogPost {
            id,
            title: post.title.clone(),
            category: post.category.clone(),
            short_description: post.short_description.clone(),
            long_description: post.long_description.clone(),
            image: post.image.clone(),
            email: owner.to_string(),
            owner_name: post.owner_name.clone(),
            owner_photo: post.owner_photo.clone(),
            created_at: Utc::now(),
        });
        Ok(InsertAck::new(id))
    }

    async fn find_blog(&self, id: i64) -> StoreResult<Option<BlogPost>> {
        let inner = self.inner.read().await;
        Ok(inner.blogs.iter().find(|post| post.id == id).cloned())
    }

    async fn find_blogs(&self, filter: &BlogFilter) -> StoreResult<Vec<BlogPost>> {
        let inner = self.inner.read().await;
        Ok(inner
            .blogs
            .iter()
            .filter(|post| filter.matches(post))
            .cloned()
            .collect())
    }

    async fn find_blogs_by_owner(&self, owner: &str) -> StoreResult<Vec<BlogPost>> {
        let inner = self.inner.read().await;
        Ok(inner
            .blogs
            .iter()
            .filter(|post| post.email == owner)
            .cloned()
            .collect())
    }

    async fn update_blog(
        &self,
        id: i64,
        owner: &str,
        update: &BlogUpdate,
    ) -> StoreResult<UpdateAck> {
        let mut inner = self.inner.write().await;
        let ack = match inner
            .blogs
            .iter_mut()
            .find(|post| post.id == id && post.email == owner)
        {
            Some(post) => UpdateAck::new(1, u64::from(update.apply_to(post))),
            None => UpdateAck::new(0, 0),
        };
        Ok(ack)
    }

    async fn delete_blog(&self, id: i64, owner: &str) -> StoreResult<DeleteAck> {
        let mut inner = self.inner.write().await;
        let before = inner.blogs.len();
        inner.blogs.retain(|post| !(post.id == id && post.email == owner));
        Ok(DeleteAck::new((before - inner.blogs.len()) as u64))
    }

    async fn recent_blogs(&self, limit: i64) -> StoreResult<Vec<BlogPost>> {
        let inner = self.inner.read().await;
        // Blogs are stored in insertion order, which is identifier order.
        Ok(inner
            .blogs
            .iter()
            .rev()
            .take(usize::try_from(limit).unwrap_or(0))
            .cloned()
            .collect())
    }

    async fn featured_blogs(&self, limit: i64) -> StoreResult<Vec<BlogPost>> {
        let inner = self.inner.read().await;
        let mut posts = inner.blogs.clone();
        // Stable sort keeps identifier order among equal lengths.
        posts.sort_by(|a, b| b.description_len().cmp(&a.description_len()));
        posts.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(posts)
    }
}

#[async_trait]
impl WishlistStore for MemoryStore {
    async fn find_wishlist_entry(
        &self,
        owner: &str,
        blog_id: i64,
    ) -> StoreResult<Option<WishlistEntry>> {
        let inner = self.inner.read().await;
        Ok(inner
            .wishlist
            .iter()
            .find(|entry| entry.email == owner && entry.blog_id == blog_id)
            .cloned())
    }

    async fn find_wishlist_by_id(&self, id: i64) -> StoreResult<Option<WishlistEntry>> {
        let inner = self.inner.read().await;
        Ok(inner.wishlist.iter().find(|entry| entry.id == id).cloned())
    }

    async fn insert_wishlist(&self, entry: &NewWishlistEntry) -> StoreResult<InsertAck> {
        let mut inner = self.inner.write().await;
        if inner
            .wishlist
            .iter()
            .any(|existing| existing.email == entry.email && existing.blog_id == entry.blog_id)
        {
            return Err(StoreError::Duplicate { collection: "wishlist" });
        }

        let id = inner.allocate_id();
        inner.wishlist.push(WishlistEntry {
            id,
            blog_id: entry.blog_id,
            email: entry.email.clone(),
            title: entry.title.clone(),
            category: entry.category.clone(),
            short_description: entry.short_description.clone(),
            image: entry.image.clone(),
            created_at: Utc::now(),
        });
        Ok(InsertAck::new(id))
    }

    async fn find_wishlist(&self, owner: &str) -> StoreResult<Vec<WishlistEntry>> {
        let inner = self.inner.read().await;
        Ok(inner
            .wishlist
            .iter()
            .filter(|entry| entry.email == owner)
            .cloned()
            .collect())
    }

    async fn delete_wishlist(&self, id: i64, owner: &str) -> StoreResult<DeleteAck> {
        let mut inner = self.inner.write().await;
        let before = inner.wishlist.len();
        inner
            .wishlist
            .retain(|entry| !(entry.id == id && entry.email == owner));
        Ok(DeleteAck::new((before - inner.wishlist.len()) as u64))
    }
}

#[async_trait]
impl CommentStore for MemoryStore {
    async fn insert_comment(&self, comment: &NewComment) -> StoreResult<InsertAck> {
        let mut inner = self.inner.write().await;
        let id = inner.allocate_id();
        inner.comments.push(Comment {
            id,
            blog_id: comment.blog_id,
            comment: comment.comment.clone(),
            name: comment.name.clone(),
            email: comment.email.clone(),
            photo: comment.photo.clone(),
            created_at: Utc::now(),
        });
        Ok(InsertAck::new(id))
    }

    async fn find_comments(&self, blog_id: i64) -> StoreResult<Vec<Comment>> {
        let inner = self.inner.read().await;
        Ok(inner
            .comments
            .iter()
            .filter(|comment| comment.blog_id == blog_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

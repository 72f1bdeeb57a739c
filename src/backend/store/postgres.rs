/**
 * PostgreSQL Document Store
 *
 * Each collection is a table created by the migrations under `migrations/`.
 * Every trait method issues exactly one statement against the pool.
 *
 * # Wishlist uniqueness
 *
 * `wishlist (email, blog_id)` carries a unique index; a violation surfaces
 * as SQLSTATE 23505 and is mapped to `StoreError::Duplicate`.
 */

use async_trait::async_trait;
use sqlx::PgPool;

use super::{
    BlogStore, CommentStore, DocumentStore, StoreError, StoreResult, WishlistStore,
};
use crate::shared::models::{
    BlogFilter, BlogPost, BlogUpdate, Comment, DeleteAck, InsertAck, NewBlogPost, NewComment,
    NewWishlistEntry, UpdateAck, WishlistEntry,
};

const UNIQUE_VIOLATION: &str = "23505";

const BLOG_COLUMNS: &str = "id, title, category, short_description, long_description, image, \
     email, owner_name, owner_photo, created_at";

/// Document store backed by a PostgreSQL pool
#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Apply pending migrations from `migrations/`
    pub async fn migrate(&self) -> StoreResult<()> {
        sqlx::migrate!().run(&self.pool).await?;
        Ok(())
    }
}

/// Escape `LIKE` metacharacters so the search term matches literally
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .and_then(|db_err| db_err.code())
        .is_some_and(|code| code == UNIQUE_VIOLATION)
}

#[async_trait]
impl BlogStore for PgStore {
    async fn insert_blog(&self, owner: &str, post: &NewBlogPost) -> StoreResult<InsertAck> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO blogs (title, category, short_description, long_description, image, email, owner_name, owner_photo, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW())
            RETURNING id
            "#,
        )
        .bind(&post.title)
        .bind(&post.category)
        .bind(&post.short_description)
        .bind(&post.long_description)
        .bind(&post.image)
        .bind(owner)
        .bind(&post.owner_name)
        .bind(&post.owner_photo)
        .fetch_one(&self.pool)
        .await?;

        Ok(InsertAck::new(id))
    }

    async fn find_blog(&self, id: i64) -> StoreResult<Option<BlogPost>> {
        let post = sqlx::query_as::<_, BlogPost>(&format!(
            "SELECT {BLOG_COLUMNS} FROM blogs WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn find_blogs(&self, filter: &BlogFilter) -> StoreResult<Vec<BlogPost>> {
        let pattern = filter
            .search
            .as_deref()
            .map(|search| format!("%{}%", escape_like(search)));

        let posts = sqlx::query_as::<_, BlogPost>(&format!(
            r#"
            SELECT {BLOG_COLUMNS}
            FROM blogs
            WHERE ($1::TEXT IS NULL OR LOWER(category) = $1)
              AND ($2::TEXT IS NULL OR title ILIKE $2 ESCAPE '\')
            ORDER BY id ASC
            "#
        ))
        .bind(&filter.category)
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn find_blogs_by_owner(&self, owner: &str) -> StoreResult<Vec<BlogPost>> {
        let posts = sqlx::query_as::<_, BlogPost>(&format!(
            "SELECT {BLOG_COLUMNS} FROM blogs WHERE email = $1 ORDER BY id ASC"
        ))
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn update_blog(
        &self,
        id: i64,
        owner: &str,
        update: &BlogUpdate,
    ) -> StoreResult<UpdateAck> {
        // Rows are only touched when a supplied value differs from the stored
        // one, so the second count is the modified count.
        let (matched, modified): (i64, i64) = sqlx::query_as(
            r#"
            WITH target AS (
                SELECT id FROM blogs WHERE id = $1 AND email = $2
            ),
            updated AS (
                UPDATE blogs SET
                    title = COALESCE($3, title),
                    category = COALESCE($4, category),
                    short_description = COALESCE($5, short_description),
                    long_description = COALESCE($6, long_description),
                    image = COALESCE($7, image),
                    owner_name = COALESCE($8, owner_name),
                    owner_photo = COALESCE($9, owner_photo)
                WHERE id = $1 AND email = $2 AND (
                       ($3::TEXT IS NOT NULL AND title IS DISTINCT FROM $3)
                    OR ($4::TEXT IS NOT NULL AND category IS DISTINCT FROM $4)
                    OR ($5::TEXT IS NOT NULL AND short_description IS DISTINCT FROM $5)
                    OR ($6::TEXT IS NOT NULL AND long_description IS DISTINCT FROM $6)
                    OR ($7::TEXT IS NOT NULL AND image IS DISTINCT FROM $7)
                    OR ($8::TEXT IS NOT NULL AND owner_name IS DISTINCT FROM $8)
                    OR ($9::TEXT IS NOT NULL AND owner_photo IS DISTINCT FROM $9)
                )
                RETURNING id
            )
            SELECT (SELECT COUNT(*) FROM target), (SELECT COUNT(*) FROM updated)
            "#,
        )
        .bind(id)
        .bind(owner)
        .bind(&update.title)
        .bind(&update.category)
        .bind(&update.short_description)
        .bind(&update.long_description)
        .bind(&update.image)
        .bind(&update.owner_name)
        .bind(&update.owner_photo)
        .fetch_one(&self.pool)
        .await?;

        Ok(UpdateAck::new(matched as u64, modified as u64))
    }

    async fn delete_blog(&self, id: i64, owner: &str) -> StoreResult<DeleteAck> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1 AND email = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await?;

        Ok(DeleteAck::new(result.rows_affected()))
    }

    async fn recent_blogs(&self, limit: i64) -> StoreResult<Vec<BlogPost>> {
        let posts = sqlx::query_as::<_, BlogPost>(&format!(
            "SELECT {BLOG_COLUMNS} FROM blogs ORDER BY id DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn featured_blogs(&self, limit: i64) -> StoreResult<Vec<BlogPost>> {
        let posts = sqlx::query_as::<_, BlogPost>(&format!(
            r#"
            SELECT {BLOG_COLUMNS}
            FROM blogs
            ORDER BY CHAR_LENGTH(long_description) DESC, id ASC
            LIMIT $1
            "#
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }
}

#[async_trait]
impl WishlistStore for PgStore {
    async fn find_wishlist_entry(
        &self,
        owner: &str,
        blog_id: i64,
    ) -> StoreResult<Option<WishlistEntry>> {
        let entry = sqlx::query_as::<_, WishlistEntry>(
            r#"
            SELECT id, blog_id, email, title, category, short_description, image, created_at
            FROM wishlist
            WHERE email = $1 AND blog_id = $2
            "#,
        )
        .bind(owner)
        .bind(blog_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entry)
    }

    async fn find_wishlist_by_id(&self, id: i64) -> StoreResult<Option<WishlistEntry>> {
        let entry = sqlx::query_as::<_, WishlistEntry>(
            r#"
            SELECT id, blog_id, email, title, category, short_description, image, created_at
            FROM wishlist
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entry)
    }

    async fn insert_wishlist(&self, entry: &NewWishlistEntry) -> StoreResult<InsertAck> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO wishlist (blog_id, email, title, category, short_description, image, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, NOW())
            RETURNING id
            "#,
        )
        .bind(entry.blog_id)
        .bind(&entry.email)
        .bind(&entry.title)
        .bind(&entry.category)
        .bind(&entry.short_description)
        .bind(&entry.image)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                StoreError::Duplicate { collection: "wishlist" }
            } else {
                StoreError::Database(e)
            }
        })?;

        Ok(InsertAck::new(id))
    }

    async fn find_wishlist(&self, owner: &str) -> StoreResult<Vec<WishlistEntry>> {
        let entries = sqlx::query_as::<_, WishlistEntry>(
            r#"
            SELECT id, blog_id, email, title, category, short_description, image, created_at
            FROM wishlist
            WHERE email = $1
            ORDER BY id ASC
            "#,
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    async fn delete_wishlist(&self, id: i64, owner: &str) -> StoreResult<DeleteAck> {
        let result = sqlx::query("DELETE FROM wishlist WHERE id = $1 AND email = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await?;

        Ok(DeleteAck::new(result.rows_affected()))
    }
}

#[async_trait]
impl CommentStore for PgStore {
    async fn insert_comment(&self, comment: &NewComment) -> StoreResult<InsertAck> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO comments (blog_id, comment, name, email, photo, created_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            RETURNING id
            "#,
        )
        .bind(comment.blog_id)
        .bind(&comment.comment)
        .bind(&comment.name)
        .bind(&comment.email)
        .bind(&comment.photo)
        .fetch_one(&self.pool)
        .await?;

        Ok(InsertAck::new(id))
    }

    async fn find_comments(&self, blog_id: i64) -> StoreResult<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, blog_id, comment, name, email, photo, created_at
            FROM comments
            WHERE blog_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(blog_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }
}

#[async_trait]
impl DocumentStore for PgStore {
    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

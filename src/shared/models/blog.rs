//! Blog Post Data Structures
//!
//! A blog post is owned by the email address that created it. Only the
//! owner may update or delete it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{require_email, require_text};
use crate::shared::error::SharedError;

/// A stored blog post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Database-assigned identifier; newer posts have larger identifiers
    #[serde(rename = "_id")]
    pub id: i64,
    pub title: String,
    pub category: String,
    pub short_description: Option<String>,
    pub long_description: String,
    /// Cover image URL
    pub image: Option<String>,
    /// Owner email
    pub email: String,
    pub owner_name: Option<String>,
    pub owner_photo: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl BlogPost {
    /// Length of the long description in characters, used for the featured ranking
    pub fn description_len(&self) -> usize {
        self.long_description.chars().count()
    }
}

/// Body of `POST /post-blog/{email}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewBlogPost {
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub short_description: Option<String>,
    pub long_description: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Optional owner email; when present it must match the path email
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub owner_photo: Option<String>,
}

impl NewBlogPost {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_text("title", &self.title)?;
        require_text("category", &self.category)?;
        require_text("longDescription", &self.long_description)?;
        if let Some(email) = &self.email {
            require_email("email", email)?;
        }
        Ok(())
    }
}

/// Body of `PATCH /update-blog/{id}/{email}`; absent fields keep their value
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BlogUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub long_description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub owner_photo: Option<String>,
}

impl BlogUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.category.is_none()
            && self.short_description.is_none()
            && self.long_description.is_none()
            && self.image.is_none()
            && self.owner_name.is_none()
            && self.owner_photo.is_none()
    }

    pub fn validate(&self) -> Result<(), SharedError> {
        if self.is_empty() {
            return Err(SharedError::validation("body", "update must set at least one field"));
        }
        if let Some(title) = &self.title {
            require_text("title", title)?;
        }
        if let Some(category) = &self.category {
            require_text("category", category)?;
        }
        if let Some(description) = &self.long_description {
            require_text("longDescription", description)?;
        }
        Ok(())
    }

    /// Apply the update to a post, returning whether any stored value changed
    pub fn apply_to(&self, post: &mut BlogPost) -> bool {
        fn set(target: &mut String, value: &Option<String>) -> bool {
            match value {
                Some(value) if target != value => {
                    *target = value.clone();
                    true
                }
                _ => false,
            }
        }

        fn set_opt(target: &mut Option<String>, value: &Option<String>) -> bool {
            match value {
                Some(value) if target.as_ref() != Some(value) => {
                    *target = Some(value.clone());
                    true
                }
                _ => false,
            }
        }

        // Non-short-circuiting so every field is applied.
        set(&mut post.title, &self.title)
            | set(&mut post.category, &self.category)
            | set_opt(&mut post.short_description, &self.short_description)
            | set(&mut post.long_description, &self.long_description)
            | set_opt(&mut post.image, &self.image)
            | set_opt(&mut post.owner_name, &self.owner_name)
            | set_opt(&mut post.owner_photo, &self.owner_photo)
    }
}

/// Query parameters of `GET /blogs`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogFilter {
    /// Case-insensitive title substring
    #[serde(default)]
    pub search: Option<String>,
    /// Category, compared case-folded
    #[serde(default)]
    pub category: Option<String>,
}

impl BlogFilter {
    /// Drop blank parameters and case-fold the category
    pub fn normalized(self) -> Self {
        let search = self
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let category = self
            .category
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty());
        Self { search, category }
    }

    /// Whether a post passes this (normalized) filter
    pub fn matches(&self, post: &BlogPost) -> bool {
        let category_ok = self
            .category
            .as_ref()
            .map_or(true, |category| post.category.to_lowercase() == *category);
        let search_ok = self.search.as_ref().map_or(true, |search| {
            post.title.to_lowercase().contains(&search.to_lowercase())
        });
        category_ok && search_ok
    }
}

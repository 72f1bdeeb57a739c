//! Comment Data Structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{require_positive, require_text};
use crate::shared::error::SharedError;

/// A stored comment on a blog post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: i64,
    pub blog_id: i64,
    /// Comment body
    pub comment: String,
    /// Author display name
    pub name: Option<String>,
    pub email: Option<String>,
    /// Author avatar URL
    pub photo: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /post-comment`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub blog_id: i64,
    pub comment: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
}

impl NewComment {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_positive("blogId", self.blog_id)?;
        require_text("comment", &self.comment)
    }
}

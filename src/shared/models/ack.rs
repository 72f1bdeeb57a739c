//! Storage acknowledgments.
//!
//! These mirror the summaries a document database driver returns for a
//! write, and are echoed to the client as-is.

use serde::{Deserialize, Serialize};

/// Result of inserting one record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub acknowledged: bool,
    pub inserted_id: i64,
}

impl InsertAck {
    pub fn new(inserted_id: i64) -> Self {
        Self {
            acknowledged: true,
            inserted_id,
        }
    }
}

/// Result of updating at most one record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAck {
    pub acknowledged: bool,
    /// Records that matched the filter
    pub matched_count: u64,
    /// Records whose stored values actually changed
    pub modified_count: u64,
}

impl UpdateAck {
    pub fn new(matched_count: u64, modified_count: u64) -> Self {
        Self {
            acknowledged: true,
            matched_count,
            modified_count,
        }
    }
}

/// Result of deleting at most one record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteAck {
    pub fn new(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }

    /// Acknowledgment for a filter that matched nothing
    pub fn no_match() -> Self {
        Self::new(0)
    }
}

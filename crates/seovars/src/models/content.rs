//! Content record model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A content record, the unit the content classifier inspects.
///
/// This is the projection of a CMS content item the resolver needs: the
/// record's identity (for the front-page check) and its content type machine
/// name. The remaining fields travel along so hosts can hand the same record
/// to other services without re-fetching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Unique identifier (UUIDv7).
    pub id: Uuid,

    /// Content type machine name.
    #[serde(rename = "type")]
    pub content_type: String,

    /// Content title.
    pub title: String,

    /// Publication status (0 = unpublished, 1 = published).
    pub status: i16,

    /// Unix timestamp when created.
    pub created: i64,

    /// Unix timestamp when last changed.
    pub changed: i64,

    /// Dynamic field storage.
    pub fields: serde_json::Value,
}

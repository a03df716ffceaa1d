//! Community board models.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{EntityId, Timestamp};

/// Maximum length for a post title.
pub const MAX_POST_TITLE_LEN: u64 = 120;

/// Maximum length for a post body.
pub const MAX_POST_CONTENT_LEN: u64 = 5_000;

/// A post on the community board, listed by `GET /tenant/community`.
///
/// `category` is a server-defined label (e.g. `"GENERAL"`, `"EVENTS"`);
/// the set is managed by the property and kept opaque here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityPost {
    pub id: EntityId,
    pub title: String,
    pub content: String,
    pub category: String,
    /// Display name of the posting tenant.
    pub author: String,
    pub created_at: Timestamp,
}

/// Payload for `POST /tenant/community`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewCommunityPost {
    #[validate(length(min = 1, max = MAX_POST_TITLE_LEN, message = "Title must be 1-120 characters"))]
    pub title: String,
    #[validate(length(
        min = 1,
        max = MAX_POST_CONTENT_LEN,
        message = "Content must be 1-5000 characters"
    ))]
    pub content: String,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
}

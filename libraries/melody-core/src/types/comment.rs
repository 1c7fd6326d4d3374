/// Comment domain type
use crate::types::{CommentId, TrackId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Comment left on a track's detail view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment identifier
    pub id: CommentId,

    /// Track the comment belongs to
    pub track_id: TrackId,

    /// Authoring user
    pub user_id: UserId,

    /// Author display name, as resolved by the backend
    pub author: String,

    /// Comment body
    pub content: String,

    /// Server-side creation timestamp
    pub created_at: DateTime<Utc>,
}

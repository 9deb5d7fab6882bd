//! Comment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A comment left by a user on a catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    /// Unique comment identifier.
    pub id: i64,
    /// Author; removed together with the user by the deletion cascade.
    pub user_id: i64,
    /// The catalog entry this comment belongs to.
    pub anime_id: i64,
    /// Comment body.
    pub content: String,
    /// When the comment was created.
    pub created_at: DateTime<Utc>,
}

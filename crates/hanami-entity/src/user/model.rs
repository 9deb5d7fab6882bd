//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::permission;

/// A registered user account.
///
/// Identifiers are dense integers: deletions leave gaps that the next
/// registration reuses, so `id` is not monotonically increasing.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// Unique email address.
    pub email: String,
    /// One-way credential digest. Never the plaintext, never serialized.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Human-readable display name.
    pub display_name: Option<String>,
    /// Free-form remarks.
    pub remarks: Option<String>,
    /// Permission level; lower is more privileged, 0 is administrator.
    pub permission: i32,
    /// Stored avatar filename, if one was uploaded.
    pub avatar: Option<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if this user holds the reserved administrator level.
    pub fn is_admin(&self) -> bool {
        permission::is_admin(self.permission)
    }
}

/// Data required to create a new user. The credential arrives pre-digested;
/// the plaintext never crosses this boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Desired username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Pre-computed credential digest.
    pub password_hash: String,
    /// Display name (optional).
    pub display_name: Option<String>,
    /// Remarks (optional).
    pub remarks: Option<String>,
    /// Assigned permission level.
    pub permission: i32,
}

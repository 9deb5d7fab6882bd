//! Comment repository — the collaborator boundary of the deletion cascade.
//!
//! The comment subsystem proper lives elsewhere; the account core only
//! needs to remove a user's comments inside the same transaction that
//! removes the user row.

use sqlx::{PgConnection, PgPool};

use hanami_core::error::{AppError, ErrorKind};
use hanami_core::result::AppResult;
use hanami_entity::comment::Comment;

/// Repository for comment records.
#[derive(Debug, Clone)]
pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    /// Create a new comment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a comment.
    pub async fn create(&self, user_id: i64, anime_id: i64, content: &str) -> AppResult<Comment> {
        sqlx::query_as::<_, Comment>(
            "INSERT INTO comments (user_id, anime_id, content) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(user_id)
        .bind(anime_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create comment", e))
    }

    /// Count comments authored by the given user.
    pub async fn count_by_user(&self, user_id: i64) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count comments", e))
    }

    /// Remove all comments authored by the given user, on the caller's
    /// connection. Runs inside the user-deletion transaction so the
    /// cascade is all-or-nothing.
    pub async fn delete_by_user(conn: &mut PgConnection, user_id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM comments WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete user comments", e)
            })?;

        Ok(result.rows_affected())
    }
}

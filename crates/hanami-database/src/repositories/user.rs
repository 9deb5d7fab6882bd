//! User repository — the persistence boundary for user records.
//!
//! Identifiers are dense integers with gap reuse: `find_gap_id` scans for
//! the lowest unused value below the current maximum, and `insert` accepts
//! that value explicitly. Two concurrent registrations can observe the same
//! gap; the primary-key constraint makes the loser fail with a conflict the
//! caller resolves by rescanning, not by cross-request locking.

use sqlx::PgPool;
use tracing::debug;

use hanami_core::error::{AppError, ErrorKind};
use hanami_core::result::AppResult;
use hanami_entity::user::{NewUser, User};

use super::comment::CommentRepository;

/// Conflict message used when an explicitly-chosen identifier lost the
/// gap race. Callers match on this to distinguish a retryable identifier
/// collision from a duplicate username/email.
pub const IDENTIFIER_CONFLICT: &str = "User identifier was claimed concurrently";

/// Repository for user CRUD and query operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by exact username, credential digest included.
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by username", e)
            })
    }

    /// Find the lowest unused identifier strictly below the current
    /// maximum, if any. Identifiers freed by deletions are reused instead
    /// of growing the key space without bound.
    pub async fn find_gap_id(&self) -> AppResult<Option<i64>> {
        sqlx::query_scalar::<_, i64>(
            "SELECT candidate FROM ( \
                 SELECT 1::BIGINT AS candidate \
                 UNION ALL \
                 SELECT id + 1 FROM users \
             ) AS gaps \
             WHERE candidate NOT IN (SELECT id FROM users) \
               AND candidate < (SELECT COALESCE(MAX(id), 0) FROM users) \
             ORDER BY candidate \
             LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to scan for gap id", e))
    }

    /// Insert a new user, with the given identifier if a gap was found,
    /// otherwise with an identity-assigned one.
    ///
    /// The id column is `GENERATED BY DEFAULT AS IDENTITY`: explicit ids
    /// only ever fill gaps below the current maximum, so the sequence
    /// backing identity assignment never collides with them.
    pub async fn insert(&self, data: &NewUser, explicit_id: Option<i64>) -> AppResult<User> {
        let query = match explicit_id {
            Some(id) => sqlx::query_as::<_, User>(
                "INSERT INTO users (id, username, email, password_hash, display_name, remarks, permission) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7) \
                 RETURNING *",
            )
            .bind(id),
            None => sqlx::query_as::<_, User>(
                "INSERT INTO users (username, email, password_hash, display_name, remarks, permission) \
                 VALUES ($1, $2, $3, $4, $5, $6) \
                 RETURNING *",
            ),
        };

        query
            .bind(&data.username)
            .bind(&data.email)
            .bind(&data.password_hash)
            .bind(&data.display_name)
            .bind(&data.remarks)
            .bind(data.permission)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err)
                    if db_err.constraint() == Some("users_username_key") =>
                {
                    AppError::conflict(format!("Username '{}' already exists", data.username))
                }
                sqlx::Error::Database(ref db_err)
                    if db_err.constraint() == Some("users_email_key") =>
                {
                    AppError::conflict("Email already in use".to_string())
                }
                sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_pkey") => {
                    AppError::conflict(IDENTIFIER_CONFLICT)
                }
                _ => AppError::with_source(ErrorKind::Database, "Failed to insert user", e),
            })
    }

    /// Remove a user together with their comments, atomically.
    ///
    /// Both deletes run in one transaction: if the comment delete fails,
    /// the user row stays. Returns whether the user row was actually
    /// removed; zero rows affected is reported as `false`, not an error.
    pub async fn delete_cascade(&self, user_id: i64) -> AppResult<bool> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let removed_comments = CommentRepository::delete_by_user(&mut tx, user_id).await?;

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete user", e))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit cascade delete", e)
        })?;

        debug!(
            user_id,
            removed_comments,
            removed_user = result.rows_affected() > 0,
            "Cascade delete committed"
        );

        Ok(result.rows_affected() > 0)
    }

    /// Update a user's stored avatar filename.
    pub async fn update_avatar(&self, user_id: i64, filename: &str) -> AppResult<()> {
        let result =
            sqlx::query("UPDATE users SET avatar = $2, updated_at = NOW() WHERE id = $1")
                .bind(user_id)
                .bind(filename)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to update avatar", e)
                })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("User {user_id} not found")));
        }
        Ok(())
    }

    /// Update a user's permission level.
    pub async fn update_permission(&self, user_id: i64, permission: i32) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET permission = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(user_id)
        .bind(permission)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update permission", e))?
        .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))
    }

    /// List users ordered by identifier.
    pub async fn find_all(&self, limit: i64, offset: i64) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id ASC LIMIT $1 OFFSET $2")
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }

    /// Count total users.
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count users", e))?;
        Ok(count as u64)
    }
}

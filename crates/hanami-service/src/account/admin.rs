//! Administrative account management — listing, permission changes,
//! account removal.
//!
//! Route-level permission gating happens in the API layer; these methods
//! assume the caller has already been authorized.

use std::sync::Arc;

use tracing::info;

use hanami_core::error::AppError;
use hanami_core::result::AppResult;
use hanami_database::repositories::user::UserRepository;
use hanami_entity::user::User;

/// Largest page size an administrator can request.
const MAX_PAGE_SIZE: i64 = 100;
/// Page size used when the request does not specify one.
const DEFAULT_PAGE_SIZE: i64 = 20;

/// Handles administrative account operations.
#[derive(Debug, Clone)]
pub struct AdminAccountService {
    /// User repository.
    user_repo: Arc<UserRepository>,
}

/// One page of the user directory.
#[derive(Debug, Clone, serde::Serialize)]
pub struct UserPage {
    /// The users on this page, ordered by identifier.
    pub users: Vec<User>,
    /// Total user count across all pages.
    pub total: u64,
    /// 1-based page number.
    pub page: i64,
    /// Page size after clamping.
    pub size: i64,
}

impl AdminAccountService {
    /// Creates a new admin account service.
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Lists users with pagination. Out-of-range page parameters are
    /// clamped rather than rejected.
    pub async fn list_users(&self, page: Option<i64>, size: Option<i64>) -> AppResult<UserPage> {
        let (page, size) = clamp_page(page, size);
        let offset = (page - 1) * size;

        let users = self.user_repo.find_all(size, offset).await?;
        let total = self.user_repo.count().await?;

        Ok(UserPage {
            users,
            total,
            page,
            size,
        })
    }

    /// Sets a user's permission level. Negative levels are rejected;
    /// zero grants administrator rights.
    pub async fn change_permission(&self, user_id: i64, permission: i32) -> AppResult<User> {
        if permission < 0 {
            return Err(AppError::validation("Permission level cannot be negative"));
        }

        let user = self.user_repo.update_permission(user_id, permission).await?;

        info!(user_id, permission, "Permission level changed");

        Ok(user)
    }

    /// Removes a user account together with all their comments.
    pub async fn delete_account(&self, user_id: i64) -> AppResult<()> {
        let removed = self.user_repo.delete_cascade(user_id).await?;
        if !removed {
            return Err(AppError::not_found(format!("User {user_id} not found")));
        }

        info!(user_id, "Account deleted");

        Ok(())
    }
}

/// Clamp pagination parameters to sane bounds.
fn clamp_page(page: Option<i64>, size: Option<i64>) -> (i64, i64) {
    let page = page.unwrap_or(1).max(1);
    let size = size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    (page, size)
}

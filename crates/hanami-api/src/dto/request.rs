//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Username (unique).
    #[validate(length(min = 3, max = 100))]
    pub username: String,
    /// Email (unique).
    #[validate(email)]
    pub email: String,
    /// Password. Only non-emptiness is checked; there is no strength policy.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Display name.
    pub display_name: Option<String>,
    /// Free-form remarks.
    pub remarks: Option<String>,
}

/// Avatar update request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateAvatarRequest {
    /// Stored avatar filename.
    #[validate(length(min = 1, max = 255))]
    pub filename: String,
}

/// Permission change request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangePermissionRequest {
    /// New permission level. Zero grants administrator rights.
    #[validate(range(min = 0))]
    pub permission: i32,
}

/// Pagination query parameters for user listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListUsersQuery {
    /// 1-based page number.
    pub page: Option<i64>,
    /// Page size.
    pub size: Option<i64>,
}

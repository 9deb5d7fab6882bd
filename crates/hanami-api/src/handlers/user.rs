//! User management handlers — avatar, directory listing, permission
//! changes, account removal.

use axum::Json;
use axum::extract::{Path, Query, State};
use validator::Validate;

use hanami_core::error::AppError;

use crate::dto::request::{ChangePermissionRequest, ListUsersQuery, UpdateAvatarRequest};
use crate::dto::response::{ApiResponse, MessageResponse, PaginatedResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// PUT /api/users/me/avatar
pub async fn update_avatar(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(req): Json<UpdateAvatarRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state
        .accounts
        .update_avatar(current.user_id(), &req.filename)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Avatar updated".to_string(),
    })))
}

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> Result<Json<ApiResponse<PaginatedResponse<UserResponse>>>, ApiError> {
    let page = state
        .admin_accounts
        .list_users(query.page, query.size)
        .await?;

    Ok(Json(ApiResponse::ok(PaginatedResponse {
        items: page.users.into_iter().map(UserResponse::from).collect(),
        total: page.total,
        page: page.page,
        per_page: page.size,
    })))
}

/// PUT /api/users/{id}/permission
pub async fn change_permission(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<ChangePermissionRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .admin_accounts
        .change_permission(id, req.permission)
        .await?;

    Ok(Json(ApiResponse::ok(user.into())))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.admin_accounts.delete_account(id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "User deleted".to_string(),
    })))
}

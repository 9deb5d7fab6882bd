//! Auth handlers — login, register, me.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use hanami_core::error::AppError;
use hanami_service::account::service::RegisterAccount;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, LoginResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let outcome = state.accounts.login(&req.username, &req.password).await?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        token: outcome.token,
        user_id: outcome.user.id,
        user: outcome.user.into(),
    })))
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .accounts
        .register(RegisterAccount {
            username: req.username,
            email: req.email,
            password: req.password,
            display_name: req.display_name,
            remarks: req.remarks,
        })
        .await?;

    Ok(Json(ApiResponse::ok(user.into())))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.accounts.profile(current.user_id()).await?;

    Ok(Json(ApiResponse::ok(user.into())))
}

//! Permission-gating middleware.
//!
//! Each protected route group is layered with a [`PermissionGate`] that
//! names the least-privileged level allowed through. The gate validates
//! the bearer token, checks the embedded permission level, and injects
//! the verified [`hanami_auth::token::Claims`] into request extensions
//! for handlers.
//!
//! Failure modes are strictly ordered: a missing or invalid token is a
//! 401 regardless of what the route requires; an insufficient level on a
//! valid token is a 403.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;
use tracing::debug;

use hanami_auth::token::TokenService;
use hanami_core::error::AppError;

use crate::error::ApiError;

/// A route-group gate requiring `caller level <= required_level`.
#[derive(Debug, Clone)]
pub struct PermissionGate {
    /// Token validator.
    tokens: Arc<TokenService>,
    /// Most permissive level allowed through this gate.
    required_level: i32,
}

impl PermissionGate {
    /// Creates a gate for the given maximum permitted level.
    pub fn new(tokens: Arc<TokenService>, required_level: i32) -> Self {
        Self {
            tokens,
            required_level,
        }
    }
}

/// Middleware that enforces a [`PermissionGate`] on every request that
/// passes through it.
pub async fn require_permission(
    State(gate): State<PermissionGate>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(&request)
        .ok_or_else(|| AppError::authentication("Missing or malformed Authorization header"))?;

    let claims = gate.tokens.validate(token).map_err(|rejection| {
        debug!(%rejection, "Token rejected");
        AppError::authentication("Invalid or expired token")
    })?;

    if !claims.permits(gate.required_level) {
        debug!(
            user_id = claims.user_id(),
            level = claims.permission,
            required = gate.required_level,
            "Insufficient permission level"
        );
        return Err(AppError::authorization("Insufficient permission level").into());
    }

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

/// Pulls the token out of a `Bearer` Authorization header.
fn bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

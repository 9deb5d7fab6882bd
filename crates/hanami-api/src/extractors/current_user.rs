//! `CurrentUser` extractor — the verified claims behind a request.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use hanami_auth::token::Claims;
use hanami_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated caller.
///
/// Behind a [`crate::middleware::guard::PermissionGate`] this reads the
/// claims the gate already validated and injected; on an ungated route it
/// validates the bearer header itself, so asking for a `CurrentUser` is
/// always backed by a verified signature.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Claims);

impl std::ops::Deref for CurrentUser {
    type Target = Claims;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(claims) = parts.extensions.get::<Claims>() {
            return Ok(CurrentUser(claims.clone()));
        }

        let token = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or_else(|| {
                ApiError::from(AppError::authentication(
                    "Missing or malformed Authorization header",
                ))
            })?;

        let claims = state
            .tokens
            .validate(token)
            .map_err(|_| AppError::authentication("Invalid or expired token"))?;

        Ok(CurrentUser(claims))
    }
}

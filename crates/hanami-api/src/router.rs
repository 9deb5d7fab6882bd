//! Route definitions for the Hanami HTTP API.
//!
//! All routes are mounted under `/api`. Route groups are layered with the
//! permission gate they require; login, registration, and health stay
//! public.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use hanami_entity::user::permission;

use crate::handlers;
use crate::middleware;
use crate::middleware::guard::PermissionGate;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(public_routes())
        .merge(member_routes(&state))
        .merge(admin_routes(&state));

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Endpoints that require no token: login, registration, health.
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/register", post(handlers::auth::register))
        .route("/health", get(handlers::health::health))
}

/// Endpoints open to any authenticated member.
fn member_routes(state: &AppState) -> Router<AppState> {
    let gate = PermissionGate::new(state.tokens.clone(), permission::MEMBER);

    Router::new()
        .route("/auth/me", get(handlers::auth::me))
        .route("/users/me/avatar", put(handlers::user::update_avatar))
        .layer(axum_middleware::from_fn_with_state(
            gate,
            middleware::guard::require_permission,
        ))
}

/// Administrator-only endpoints.
fn admin_routes(state: &AppState) -> Router<AppState> {
    let gate = PermissionGate::new(state.tokens.clone(), permission::ADMIN);

    Router::new()
        .route("/users", get(handlers::user::list_users))
        .route(
            "/users/{id}/permission",
            put(handlers::user::change_permission),
        )
        .route("/users/{id}", delete(handlers::user::delete_user))
        .layer(axum_middleware::from_fn_with_state(
            gate,
            middleware::guard::require_permission,
        ))
}

/// Build CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::{HeaderValue, Method};
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any).allow_headers(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors
            .allow_origin(origins)
            .allow_headers([axum::http::header::AUTHORIZATION, axum::http::header::CONTENT_TYPE]);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds))
}

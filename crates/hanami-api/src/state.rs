//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use hanami_auth::password::CredentialHasher;
use hanami_auth::token::TokenService;
use hanami_core::config::AppConfig;
use hanami_database::connection::DatabasePool;
use hanami_database::repositories::user::UserRepository;
use hanami_service::account::admin::AdminAccountService;
use hanami_service::account::service::AccountService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool
    pub db_pool: DatabasePool,
    /// Token issuer and validator
    pub tokens: Arc<TokenService>,
    /// User repository
    pub user_repo: Arc<UserRepository>,
    /// Account self-service
    pub accounts: Arc<AccountService>,
    /// Administrative account management
    pub admin_accounts: Arc<AdminAccountService>,
}

impl AppState {
    /// Wires up repositories and services around a connection pool.
    pub fn build(config: AppConfig, db_pool: DatabasePool) -> Self {
        let tokens = Arc::new(TokenService::new(&config.auth));
        let hasher = Arc::new(CredentialHasher::new());
        let user_repo = Arc::new(UserRepository::new(db_pool.pool().clone()));

        let accounts = Arc::new(AccountService::new(
            user_repo.clone(),
            hasher,
            tokens.clone(),
        ));
        let admin_accounts = Arc::new(AdminAccountService::new(user_repo.clone()));

        Self {
            config: Arc::new(config),
            db_pool,
            tokens,
            user_repo,
            accounts,
            admin_accounts,
        }
    }
}

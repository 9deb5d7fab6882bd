//! Account self-service operations — login, registration, profile, avatar.

use std::sync::Arc;

use tracing::{debug, info};

use hanami_auth::password::CredentialHasher;
use hanami_auth::token::TokenService;
use hanami_core::error::{AppError, ErrorKind};
use hanami_core::result::AppResult;
use hanami_database::repositories::user::{IDENTIFIER_CONFLICT, UserRepository};
use hanami_entity::user::{NewUser, User, permission};

/// How many times a registration retries after losing a gap-id race
/// before falling back to identity assignment.
const MAX_GAP_RETRIES: u32 = 3;

/// Handles account self-service operations.
#[derive(Debug, Clone)]
pub struct AccountService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Credential hasher.
    hasher: Arc<CredentialHasher>,
    /// Token service.
    tokens: Arc<TokenService>,
}

/// Data for registering a new account.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterAccount {
    /// Username (unique).
    pub username: String,
    /// Email (unique).
    pub email: String,
    /// Plaintext password, digested before storage.
    pub password: String,
    /// Display name.
    pub display_name: Option<String>,
    /// Free-form remarks.
    pub remarks: Option<String>,
}

/// A successful login: the signed token plus the authenticated user.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// Signed identity token.
    pub token: String,
    /// The authenticated user.
    pub user: User,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<CredentialHasher>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            tokens,
        }
    }

    /// Authenticates a username/password pair and issues a token.
    ///
    /// Unknown usernames and wrong passwords produce the same error so
    /// responses cannot be used to probe which accounts exist.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<LoginOutcome> {
        let user = match self.user_repo.find_by_username(username).await? {
            Some(user) => user,
            None => {
                debug!(username, "Login failed: unknown username");
                return Err(invalid_credentials());
            }
        };

        if !self.hasher.verify(password, &user.password_hash) {
            debug!(username, user_id = user.id, "Login failed: bad password");
            return Err(invalid_credentials());
        }

        let token = self
            .tokens
            .issue(user.id, &user.username, user.permission)?;

        info!(user_id = user.id, username, "User logged in");

        Ok(LoginOutcome { token, user })
    }

    /// Registers a new member account.
    ///
    /// Identifiers freed by deletions are reused: the lowest gap below
    /// the current maximum is claimed explicitly. Losing a concurrent
    /// claim is retried with a fresh scan; after `MAX_GAP_RETRIES`
    /// losses the insert falls back to identity assignment, which never
    /// collides.
    pub async fn register(&self, req: RegisterAccount) -> AppResult<User> {
        let data = NewUser {
            username: req.username,
            email: req.email,
            password_hash: self.hasher.digest(&req.password),
            display_name: req.display_name,
            remarks: req.remarks,
            permission: permission::MEMBER,
        };

        let mut attempts = 0;
        let user = loop {
            let explicit_id = if attempts < MAX_GAP_RETRIES {
                self.user_repo.find_gap_id().await?
            } else {
                None
            };

            match self.user_repo.insert(&data, explicit_id).await {
                Ok(user) => break user,
                Err(e) if is_identifier_conflict(&e) => {
                    attempts += 1;
                    debug!(
                        attempts,
                        lost_id = explicit_id,
                        "Gap id claimed concurrently, rescanning"
                    );
                }
                Err(e) => return Err(e),
            }
        };

        info!(user_id = user.id, username = %user.username, "User registered");

        Ok(user)
    }

    /// Gets a user's full profile.
    pub async fn profile(&self, user_id: i64) -> AppResult<User> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Updates a user's stored avatar filename.
    pub async fn update_avatar(&self, user_id: i64, filename: &str) -> AppResult<()> {
        if filename.trim().is_empty() {
            return Err(AppError::validation("Avatar filename cannot be empty"));
        }

        self.user_repo.update_avatar(user_id, filename).await?;

        info!(user_id, filename, "Avatar updated");

        Ok(())
    }
}

/// The single error both unknown-user and bad-password collapse into.
fn invalid_credentials() -> AppError {
    AppError::authentication("Invalid username or password")
}

/// Whether an insert failure is a retryable identifier collision, as
/// opposed to a duplicate username or email.
fn is_identifier_conflict(e: &AppError) -> bool {
    e.kind == ErrorKind::Conflict && e.message == IDENTIFIER_CONFLICT
}

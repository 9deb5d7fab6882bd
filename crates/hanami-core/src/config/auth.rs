//! Authentication configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Authentication and token configuration.
///
/// The signing secret is process-wide, loaded once at startup, and passed
/// into the token service constructor — there is no global lookup.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing (HMAC-SHA256). Environment-provided in
    /// production; never logged.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Token validity window in hours.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_hours: u64,
}

// Hand-written so the signing secret cannot leak through debug logging.
impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"****")
            .field("token_ttl_hours", &self.token_ttl_hours)
            .finish()
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl() -> u64 {
    24
}

//! Claims embedded in and protected by a token's signature.

use serde::{Deserialize, Serialize};

use hanami_entity::user::permission;

/// The identity and permission data carried by every token.
///
/// Claims are only ever handed out by [`super::TokenService::validate`]
/// after the signature check, so holding a `Claims` value means the token
/// was genuine at validation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user identifier.
    pub sub: i64,
    /// Username at the time of issuance.
    pub username: String,
    /// Permission level at the time of issuance. Embedded here so that
    /// authorized calls need no directory lookup; a permission change
    /// takes effect at the holder's next login.
    pub permission: i32,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the user identifier from the subject claim.
    pub fn user_id(&self) -> i64 {
        self.sub
    }

    /// Whether this caller qualifies for an operation that declares
    /// `required_level` as its maximum permitted level.
    pub fn permits(&self, required_level: i32) -> bool {
        permission::permits(self.permission, required_level)
    }
}

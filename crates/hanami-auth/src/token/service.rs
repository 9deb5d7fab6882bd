//! Token issuance and validation with a process-wide signing key.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;

use hanami_core::config::auth::AuthConfig;
use hanami_core::error::AppError;

use super::claims::Claims;

/// Why a presented token was rejected.
///
/// All three variants collapse to a single 401 at the HTTP boundary; the
/// distinction exists for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenRejection {
    /// The token could not be parsed at all.
    #[error("token is malformed")]
    Malformed,
    /// The signature does not match the claims under the current key.
    #[error("token signature is invalid")]
    BadSignature,
    /// The token parsed and verified, but its expiry has passed.
    #[error("token has expired")]
    Expired,
}

/// Issues and validates signed identity tokens.
///
/// Stateless apart from the immutable key material, so a single instance is
/// shared across all requests without synchronization. Rotating the key
/// invalidates every outstanding token; there is no revocation store.
#[derive(Clone)]
pub struct TokenService {
    /// HMAC key for signing.
    encoding_key: EncodingKey,
    /// HMAC key for verification.
    decoding_key: DecodingKey,
    /// Validation settings (HS256, expiry checked with zero leeway).
    validation: Validation,
    /// Validity window applied at issuance.
    ttl: Duration,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl TokenService {
    /// Creates a token service from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self::with_ttl(
            &config.jwt_secret,
            Duration::hours(config.token_ttl_hours as i64),
        )
    }

    /// Creates a token service with an explicit validity window.
    pub fn with_ttl(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // Zero leeway: a token is rejected the moment now >= exp.
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    /// Issues a signed token embedding the given identity and permission
    /// level, valid from now until now + ttl.
    pub fn issue(&self, user_id: i64, username: &str, permission: i32) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            username: username.to_string(),
            permission,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }

    /// Validates a presented token and returns its claims.
    ///
    /// The signature is verified before any claim value is deserialized or
    /// inspected; claims from an unverified token are never returned.
    pub fn validate(&self, token: &str) -> Result<Claims, TokenRejection> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenRejection::Expired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature
                | jsonwebtoken::errors::ErrorKind::InvalidAlgorithm => TokenRejection::BadSignature,
                _ => TokenRejection::Malformed,
            })
    }
}

//! SHA-256 credential hashing and verification.
//!
//! The digest is deterministic: the same secret always produces the same
//! stored value, so login-time comparison is a recompute-and-compare. The
//! comparison itself is constant-time.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Computes and verifies one-way credential digests.
#[derive(Debug, Clone, Default)]
pub struct CredentialHasher;

impl CredentialHasher {
    /// Creates a new credential hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Digests a plaintext secret into its stored form: lowercase hex of
    /// the SHA-256 of the UTF-8 bytes.
    pub fn digest(&self, secret: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(secret.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Verifies a plaintext secret against a stored digest.
    ///
    /// Recomputes the digest and compares in constant time. A stored value
    /// of the wrong length can only be corrupt data, not a near-miss, so
    /// the early length check leaks nothing useful.
    pub fn verify(&self, secret: &str, stored_digest: &str) -> bool {
        let computed = self.digest(secret);
        if computed.len() != stored_digest.len() {
            return false;
        }
        computed
            .as_bytes()
            .ct_eq(stored_digest.as_bytes())
            .into()
    }
}

//! # hanami-auth
//!
//! Authentication primitives for Hanami.
//!
//! ## Modules
//!
//! - `password` — deterministic one-way credential digests and verification
//! - `token` — signed, time-bounded identity tokens (issue + validate)
//!
//! Both components are pure, stateless computations: the only state is the
//! immutable signing key, owned by [`token::TokenService`] and loaded once
//! at startup.

pub mod password;
pub mod token;

pub use password::CredentialHasher;
pub use token::{Claims, TokenRejection, TokenService};

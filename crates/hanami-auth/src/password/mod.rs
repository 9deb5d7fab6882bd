//! Credential digest computation and verification.

pub mod hasher;

pub use hasher::CredentialHasher;

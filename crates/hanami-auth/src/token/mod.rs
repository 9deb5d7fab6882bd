//! Signed, time-bounded identity tokens.

pub mod claims;
pub mod service;

pub use claims::Claims;
pub use service::{TokenRejection, TokenService};

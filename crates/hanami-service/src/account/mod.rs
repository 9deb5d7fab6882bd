//! Account lifecycle services.

pub mod admin;
pub mod service;

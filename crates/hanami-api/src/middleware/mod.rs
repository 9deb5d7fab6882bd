//! HTTP middleware.

pub mod guard;
pub mod logging;

//! User entity and permission level definitions.

pub mod model;
pub mod permission;

pub use model::{NewUser, User};

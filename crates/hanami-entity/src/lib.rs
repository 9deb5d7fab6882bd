//! # hanami-entity
//!
//! Domain entity models for Hanami: user accounts with integer permission
//! levels, and the comment records that hang off them.

pub mod comment;
pub mod user;

pub use comment::Comment;
pub use user::{NewUser, User, permission};

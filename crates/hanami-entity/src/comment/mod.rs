//! Comment entity.
//!
//! The comment subsystem is an external collaborator of the account core;
//! this model exists because comments are the dependent records of the
//! user-deletion cascade.

pub mod model;

pub use model::Comment;

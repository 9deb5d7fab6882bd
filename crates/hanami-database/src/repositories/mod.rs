//! Repository implementations.

pub mod comment;
pub mod user;

pub use comment::CommentRepository;
pub use user::UserRepository;

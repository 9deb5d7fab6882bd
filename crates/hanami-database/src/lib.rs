//! # hanami-database
//!
//! PostgreSQL connection management, migrations, and repository
//! implementations for Hanami. The user repository is the persistence
//! boundary of the account core; the comment repository is the collaborator
//! boundary that the deletion cascade crosses.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;

//! Business logic services for Hanami.
//!
//! Services orchestrate repositories, credential hashing, and token
//! issuance. They own the account lifecycle rules; HTTP concerns stay
//! in the API layer and SQL stays in the repositories.

pub mod account;

pub use account::admin::AdminAccountService;
pub use account::service::AccountService;

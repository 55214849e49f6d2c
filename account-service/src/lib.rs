//! Account service for managing user accounts and credentials

pub mod auth;
pub mod repository;
pub mod service;

pub use auth::{IdentityResolver, PlaceholderIdentityResolver, PLACEHOLDER_IDENTITY};
pub use repository::{AccountRepository, InMemoryAccountRepository};
pub use service::AccountService;

//! Error types for the account service
//!
//! This module provides a unified error handling system for the account
//! platform. It defines standard error types that can be used across service
//! boundaries and provides consistent error conversion.

use std::fmt::Display;
use thiserror::Error;

/// Account service error type
#[derive(Debug, Error)]
pub enum Error {
    /// Error when signup is attempted with an empty user id or password
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    /// Error when signup is attempted with a user id that is already taken
    #[error("Duplicate account: {0}")]
    DuplicateAccount(String),

    /// Error when an account cannot be found
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// Error when account deletion is requested without confirmation
    #[error("Deletion not confirmed: {0}")]
    ConfirmationRequired(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait to add context to error results
pub trait ErrorExt<T> {
    /// Add context information to an error
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display;
}

impl<T> ErrorExt<T> for Result<T> {
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display,
    {
        self.map_err(|e| {
            let context = context_fn().to_string();
            match e {
                Error::MissingCredentials(msg) => {
                    Error::MissingCredentials(format!("{}: {}", context, msg))
                }
                Error::DuplicateAccount(msg) => {
                    Error::DuplicateAccount(format!("{}: {}", context, msg))
                }
                Error::AccountNotFound(msg) => {
                    Error::AccountNotFound(format!("{}: {}", context, msg))
                }
                Error::ConfirmationRequired(msg) => {
                    Error::ConfirmationRequired(format!("{}: {}", context, msg))
                }
                Error::Configuration(msg) => Error::Configuration(format!("{}: {}", context, msg)),
                Error::Internal(msg) => Error::Internal(format!("{}: {}", context, msg)),
            }
        })
    }
}

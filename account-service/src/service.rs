//! Account service implementation

use std::sync::Arc;

use common::error::{Error, ErrorExt, Result};
use common::model::account::{Account, UserSummary};
use tracing::{debug, info};

use crate::repository::{AccountRepository, InMemoryAccountRepository};

/// Account service for managing user accounts and credentials
pub struct AccountService {
    /// Repository for account data
    repo: Arc<dyn AccountRepository>,
}

impl AccountService {
    /// Create a new account service backed by an in-memory repository
    pub fn new() -> Self {
        Self {
            repo: Arc::new(InMemoryAccountRepository::new()),
        }
    }

    /// Create a new account service with a specific repository
    pub fn with_repository(repo: Arc<dyn AccountRepository>) -> Self {
        Self { repo }
    }

    /// Create a new account, rejecting empty credentials
    pub async fn signup(&self, user_id: &str, password: &str) -> Result<UserSummary> {
        info!("Creating account for user {}", user_id);

        if user_id.is_empty() || password.is_empty() {
            return Err(Error::MissingCredentials(
                "user_id and password are required".to_string(),
            ));
        }

        let account = self
            .repo
            .insert(Account::new(user_id, password))
            .await
            .with_context(|| format!("Failed to create account for user {}", user_id))?;

        Ok(account.summary())
    }

    /// Get the public profile for a user id
    pub async fn get_user(&self, user_id: &str) -> Result<UserSummary> {
        let account = self
            .repo
            .find(user_id)
            .await
            .with_context(|| format!("Failed to retrieve account for user {}", user_id))?
            .ok_or_else(|| Error::AccountNotFound(format!("no account for user {}", user_id)))?;

        Ok(account.summary())
    }

    /// Update the stored password for an account
    ///
    /// An absent or empty password leaves the record untouched; the call
    /// still succeeds as long as the account exists.
    pub async fn update_user(&self, user_id: &str, password: Option<&str>) -> Result<()> {
        match password {
            Some(password) if !password.is_empty() => {
                info!("Updating password for user {}", user_id);

                self.repo
                    .update_password(user_id, password)
                    .await
                    .with_context(|| format!("Failed to update password for user {}", user_id))?
                    .ok_or_else(|| {
                        Error::AccountNotFound(format!("no account for user {}", user_id))
                    })?;
            }
            _ => {
                debug!("No password supplied for user {}, leaving record as-is", user_id);

                self.repo
                    .find(user_id)
                    .await
                    .with_context(|| format!("Failed to retrieve account for user {}", user_id))?
                    .ok_or_else(|| {
                        Error::AccountNotFound(format!("no account for user {}", user_id))
                    })?;
            }
        }

        Ok(())
    }

    /// Close the account of an already-resolved caller identity
    ///
    /// `user_id` must come from the identity resolution layer, never from
    /// the request body or path. The confirmation check runs before any
    /// table access; an unconfirmed request fails the same way whether or
    /// not the account exists.
    pub async fn close_account(&self, user_id: &str, confirm: bool) -> Result<()> {
        if !confirm {
            return Err(Error::ConfirmationRequired(format!(
                "deletion of account {} was not confirmed",
                user_id
            )));
        }

        info!("Closing account for user {}", user_id);

        self.repo
            .remove(user_id)
            .await
            .with_context(|| format!("Failed to remove account for user {}", user_id))?
            .ok_or_else(|| Error::AccountNotFound(format!("no account for user {}", user_id)))?;

        Ok(())
    }
}

//! Repository for account data

use async_trait::async_trait;
use common::error::{Error, Result};
use common::model::account::Account;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// Account repository trait defining the interface for account data storage
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Insert a new account, failing when the user id is already taken
    async fn insert(&self, account: Account) -> Result<Account>;

    /// Get an account by user id
    async fn find(&self, user_id: &str) -> Result<Option<Account>>;

    /// Overwrite the stored password for an account
    ///
    /// Returns the updated account, or `None` when no account exists for
    /// the user id.
    async fn update_password(&self, user_id: &str, password: &str) -> Result<Option<Account>>;

    /// Remove an account, returning the removed record if one existed
    async fn remove(&self, user_id: &str) -> Result<Option<Account>>;
}

/// In-memory repository for account data
pub struct InMemoryAccountRepository {
    /// Accounts by user id
    pub accounts: DashMap<String, Account>,
}

impl InMemoryAccountRepository {
    /// Create a new in-memory account repository
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
        }
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    /// Insert a new account, failing when the user id is already taken
    ///
    /// The occupancy check and the write happen inside one `entry` guard;
    /// two concurrent inserts for the same user id cannot both succeed.
    async fn insert(&self, account: Account) -> Result<Account> {
        match self.accounts.entry(account.user_id.clone()) {
            Entry::Occupied(_) => Err(Error::DuplicateAccount(format!(
                "user id already taken: {}",
                account.user_id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(account.clone());
                Ok(account)
            }
        }
    }

    /// Get an account by user id
    async fn find(&self, user_id: &str) -> Result<Option<Account>> {
        Ok(self.accounts.get(user_id).map(|a| a.clone()))
    }

    /// Overwrite the stored password for an account
    async fn update_password(&self, user_id: &str, password: &str) -> Result<Option<Account>> {
        match self.accounts.get_mut(user_id) {
            Some(mut account) => {
                account.password = password.to_string();
                Ok(Some(account.clone()))
            }
            None => Ok(None),
        }
    }

    /// Remove an account, returning the removed record if one existed
    async fn remove(&self, user_id: &str) -> Result<Option<Account>> {
        Ok(self.accounts.remove(user_id).map(|(_, account)| account))
    }
}

//! Account models and related types

use serde::{Deserialize, Serialize};

#[cfg(feature = "utoipa")]
use crate::utoipa::ToSchema;

/// Account model
///
/// The stored identity and credential pair for one user. The record holds no
/// independent nickname; it is derived from the user id on every read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct Account {
    /// User id, unique across the account table and immutable once created
    pub user_id: String,
    /// Password, mutable after creation
    pub password: String,
}

/// Public projection of an account
///
/// The shape returned by the signup and profile endpoints. Passwords never
/// leave the account table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct UserSummary {
    /// User id
    pub user_id: String,
    /// Nickname, always equal to the user id
    pub nickname: String,
}

impl Account {
    /// Create a new account record
    pub fn new(user_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            password: password.into(),
        }
    }

    /// Nickname for the account, recomputed from the user id
    pub fn nickname(&self) -> &str {
        &self.user_id
    }

    /// Build the public projection of this account
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            user_id: self.user_id.clone(),
            nickname: self.nickname().to_string(),
        }
    }
}

//! Caller identity resolution
//!
//! Account closure acts on the caller's own account; which account that is
//! comes from the resolver, never from the request. Until a real
//! authentication layer exists, the placeholder resolver below supplies a
//! fixed identity.

use async_trait::async_trait;

use common::error::Result;

/// Identity the placeholder resolver yields for every request
pub const PLACEHOLDER_IDENTITY: &str = "test_user";

/// Resolves the caller identity for a request
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Resolve the caller's user id
    async fn resolve(&self) -> Result<String>;
}

/// Stand-in resolver that always yields the same identity
pub struct PlaceholderIdentityResolver {
    identity: String,
}

impl PlaceholderIdentityResolver {
    /// Create a resolver yielding the placeholder identity
    pub fn new() -> Self {
        Self {
            identity: PLACEHOLDER_IDENTITY.to_string(),
        }
    }

    /// Create a resolver yielding a specific identity
    pub fn with_identity(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
        }
    }
}

#[async_trait]
impl IdentityResolver for PlaceholderIdentityResolver {
    async fn resolve(&self) -> Result<String> {
        Ok(self.identity.clone())
    }
}

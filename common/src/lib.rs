//! Common types and utilities for the account service
//!
//! This library contains the shared vocabulary used across the account
//! platform crates. It provides a unified approach to error handling, the
//! account domain model, and boundary field validation.

pub mod error;
pub mod model;
pub mod validate;

/// Re-export important types
pub use error::{Error, Result, ErrorExt};
pub use validate::{FieldViolation, ViolationKind};

// Re-export utoipa for use in model ToSchema derives
#[cfg(feature = "utoipa")]
pub use utoipa;

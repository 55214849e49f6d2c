//! API handlers
//!
//! This module contains all the API endpoint handlers organized by resource.
//! Each handler follows a consistent pattern:
//! - Extract state and parameters using Axum extractors
//! - Validate input fields against the account boundary rules
//! - Call the appropriate service methods
//! - Map the result to the fixed wire format

pub mod account;
pub mod response;

// Re-export the response module for easy access
pub use response::{MessageResponse, SignupResponse};

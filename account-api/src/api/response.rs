//! Standardized API response formats
//!
//! This module provides the response types used by all API endpoints.
//! The bodies are part of the public wire contract; field names and
//! confirmation messages must stay stable for clients.

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use common::model::account::UserSummary;

/// Response body for a successful signup
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SignupResponse {
    /// Confirmation message
    pub message: String,
    /// Public projection of the created account
    pub user: UserSummary,
}

/// Response body carrying a bare confirmation message
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Confirmation message
    pub message: String,
}

// Implementation to convert SignupResponse to axum Response
impl IntoResponse for SignupResponse {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

// Implementation to convert MessageResponse to axum Response
impl IntoResponse for MessageResponse {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

// Utility methods for creating responses

impl SignupResponse {
    /// Create the confirmation response for a freshly created account
    pub fn created(user: UserSummary) -> Self {
        Self {
            message: "Account successfully created".to_string(),
            user,
        }
    }
}

impl MessageResponse {
    /// Confirmation for a successful profile update
    pub fn updated() -> Self {
        Self {
            message: "User information updated successfully".to_string(),
        }
    }

    /// Confirmation for a successful account deletion
    pub fn deleted() -> Self {
        Self {
            message: "Account successfully deleted".to_string(),
        }
    }
}

//! Error handling for the account API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use common::validate::{FieldViolation, ViolationKind};

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message, a list when several fields fail validation
    pub message: ErrorMessage,
    /// Failure cause, present on account creation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

/// Message payload of an error response
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    /// Single message
    One(String),
    /// One message per failing field
    Many(Vec<String>),
}

/// API errors
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request validation failed")]
    Validation(Vec<FieldViolation>),

    #[error("Common error: {0}")]
    Common(#[from] common::error::Error),
}

/// Render one field violation into its user-facing message
fn violation_message(violation: &FieldViolation) -> String {
    let reason = match violation.kind {
        ViolationKind::Missing => "required field missing",
        ViolationKind::Length => "length mismatch",
        ViolationKind::CharacterClass => "disallowed character class",
    };
    format!("{}: {}", violation.field, reason)
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Generate a request ID for tracking errors
        let request_id = Uuid::new_v4().to_string();

        // Log the error with request ID for backend tracing
        tracing::error!("API Error [{}]: {:?}", request_id, &self);

        let (status, message, cause) = match &self {
            ApiError::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                ErrorMessage::Many(violations.iter().map(violation_message).collect()),
                None,
            ),
            ApiError::Common(e) => match e {
                // Client errors (4xx)
                common::error::Error::MissingCredentials(_) => (
                    StatusCode::BAD_REQUEST,
                    ErrorMessage::One("Account creation failed".to_string()),
                    Some("Required user_id and password".to_string()),
                ),
                common::error::Error::DuplicateAccount(_) => (
                    StatusCode::BAD_REQUEST,
                    ErrorMessage::One("Account creation failed".to_string()),
                    Some("Already same user_id is used".to_string()),
                ),
                common::error::Error::AccountNotFound(_) => (
                    StatusCode::NOT_FOUND,
                    ErrorMessage::One("User not found".to_string()),
                    None,
                ),
                common::error::Error::ConfirmationRequired(_) => (
                    StatusCode::BAD_REQUEST,
                    ErrorMessage::One("Account deletion confirmation required".to_string()),
                    None,
                ),

                // Server errors (5xx)
                common::error::Error::Configuration(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorMessage::One("Internal server error".to_string()),
                    None,
                ),
                common::error::Error::Internal(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorMessage::One("Internal server error".to_string()),
                    None,
                ),
            },
        };

        // Return the response with appropriate status code
        (status, Json(ErrorBody { message, cause })).into_response()
    }
}

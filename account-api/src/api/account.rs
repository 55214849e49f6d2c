//! Account API handlers
//!
//! Handles endpoints related to account management:
//! - Sign up a new account
//! - Get a user's public profile
//! - Update a user's password
//! - Close the caller's account

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use common::model::account::UserSummary;
use common::validate::{self, FieldViolation};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::response::{MessageResponse, SignupResponse};
use crate::error::ApiError;
use crate::AppState;

/// Signup request
#[derive(Debug, Deserialize, ToSchema)]
pub struct SignupRequest {
    /// User id, 6 to 20 alphanumeric characters
    pub user_id: Option<String>,
    /// Password, 8 to 20 characters from the allowed class
    pub password: Option<String>,
}

/// Create a new account
#[utoipa::path(
    post,
    path = "/signup",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Account successfully created"),
        (status = 400, description = "Validation failed or user id already taken"),
        (status = 500, description = "Internal server error")
    ),
    tag = "account"
)]
pub async fn signup(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SignupRequest>,
) -> Result<SignupResponse, ApiError> {
    // Check field boundaries before touching the service
    let violations: Vec<FieldViolation> = [
        validate::user_id(request.user_id.as_deref()),
        validate::password(request.password.as_deref()),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !violations.is_empty() {
        return Err(ApiError::Validation(violations));
    }

    let user = state
        .account_service
        .signup(
            request.user_id.as_deref().unwrap_or_default(),
            request.password.as_deref().unwrap_or_default(),
        )
        .await
        .map_err(ApiError::Common)?;

    // Return the confirmation with the public projection of the account
    Ok(SignupResponse::created(user))
}

/// Get a user's public profile
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    params(
        ("user_id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User profile retrieved successfully"),
        (status = 400, description = "User id fails the length check"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "account"
)]
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<UserSummary>, ApiError> {
    // The path parameter only gets the length check
    if let Some(violation) = validate::path_user_id(&user_id) {
        return Err(ApiError::Validation(vec![violation]));
    }

    // Request the profile from the service
    let user = state
        .account_service
        .get_user(&user_id)
        .await
        .map_err(ApiError::Common)?;

    Ok(Json(user))
}

/// Update user request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    /// New password, omit to leave the stored password unchanged
    pub password: Option<String>,
}

/// Update a user's password
#[utoipa::path(
    patch,
    path = "/users/{user_id}",
    params(
        ("user_id" = String, Path, description = "User id")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User information updated successfully"),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "account"
)]
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<MessageResponse, ApiError> {
    // Path violations come before body violations in the message list
    let violations: Vec<FieldViolation> = [
        validate::path_user_id(&user_id),
        validate::optional_password(request.password.as_deref()),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !violations.is_empty() {
        return Err(ApiError::Validation(violations));
    }

    state
        .account_service
        .update_user(&user_id, request.password.as_deref())
        .await
        .map_err(ApiError::Common)?;

    Ok(MessageResponse::updated())
}

/// Close account request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CloseAccountRequest {
    /// Explicit confirmation that the account should be deleted
    pub confirm: Option<bool>,
}

/// Close the caller's account
#[utoipa::path(
    post,
    path = "/close",
    request_body = CloseAccountRequest,
    responses(
        (status = 200, description = "Account successfully deleted"),
        (status = 400, description = "Confirmation missing or not given"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "account"
)]
pub async fn close_account(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CloseAccountRequest>,
) -> Result<MessageResponse, ApiError> {
    if let Some(violation) = validate::confirm(request.confirm) {
        return Err(ApiError::Validation(vec![violation]));
    }

    // The account to close is the caller's own, never taken from the request
    let user_id = state
        .identity_resolver
        .resolve()
        .await
        .map_err(ApiError::Common)?;

    state
        .account_service
        .close_account(&user_id, request.confirm.unwrap_or(false))
        .await
        .map_err(ApiError::Common)?;

    Ok(MessageResponse::deleted())
}

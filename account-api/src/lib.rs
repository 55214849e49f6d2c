// account-api/src/lib.rs
pub mod api;
pub mod config;
pub mod error;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;

use account_service::{AccountService, IdentityResolver};

use crate::api::account::{close_account, get_user, signup, update_user};

/// App state shared across handlers
pub struct AppState {
    /// Account service
    pub account_service: Arc<AccountService>,
    /// Caller identity resolution, a placeholder until real authentication lands
    pub identity_resolver: Arc<dyn IdentityResolver>,
}

/// Build the account API router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Account routes
        .route("/signup", post(signup))
        .route("/users/:user_id", get(get_user).patch(update_user))
        .route("/close", post(close_account))
        .with_state(state)
}

/// API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Account routes
        api::account::signup,
        api::account::get_user,
        api::account::update_user,
        api::account::close_account,
    ),
    components(
        schemas(
            // Account API
            api::account::SignupRequest,
            api::account::UpdateUserRequest,
            api::account::CloseAccountRequest,
            common::model::account::UserSummary,

            // Response models
            api::response::SignupResponse,
            api::response::MessageResponse,
        )
    ),
    tags(
        (name = "account", description = "Account management endpoints")
    ),
    info(
        title = "Account Service API",
        version = "1.0.0",
        description = "API for creating, reading, updating, and closing user accounts"
    )
)]
pub struct ApiDoc;

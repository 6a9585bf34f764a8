//! Authentication routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{error, info};

use crate::{AppState, error::error_response};
use tourdesk_core::auth::{verify_against_dummy, verify_password};
use tourdesk_db::{UserRepository, repositories::user::role_from_db};
use tourdesk_shared::{
    auth::{LoginRequest, LoginResponse},
    types::UserId,
};

/// Creates the auth router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(login))
}

fn invalid_credentials() -> Response {
    error_response(
        StatusCode::UNAUTHORIZED,
        "invalid_credentials",
        "Invalid email or password",
    )
}

fn login_failed() -> Response {
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal_error",
        "An error occurred during login",
    )
}

/// POST /auth/login - Authenticate user and return an access token.
async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> impl IntoResponse {
    let user_repo = UserRepository::new((*state.db).clone());

    let user = match user_repo.find_by_email(&payload.email).await {
        Ok(Some(u)) => u,
        Ok(None) => {
            verify_against_dummy(&payload.password);
            info!(email = %payload.email, "Login attempt for non-existent user");
            return invalid_credentials();
        }
        Err(e) => {
            error!(error = %e, "Database error during login");
            return login_failed();
        }
    };

    if !user.is_active {
        return error_response(
            StatusCode::UNAUTHORIZED,
            "account_disabled",
            "This account has been disabled",
        );
    }

    match verify_password(&payload.password, &user.password_hash) {
        Ok(true) => {}
        Ok(false) => {
            info!(user_id = %user.id, "Failed login attempt - invalid password");
            return invalid_credentials();
        }
        Err(e) => {
            error!(error = %e, "Password verification error");
            return login_failed();
        }
    }

    let role = role_from_db(user.role);
    let access_token = match state
        .jwt_service
        .generate_access_token(UserId::from_uuid(user.id), role)
    {
        Ok(t) => t,
        Err(e) => {
            error!(error = %e, "Failed to generate access token");
            return login_failed();
        }
    };

    info!(user_id = %user.id, role = %role, "User logged in successfully");

    let response = LoginResponse {
        access_token,
        token_type: "Bearer",
        expires_in: state.jwt_service.access_token_expires_in(),
        role,
    };

    (StatusCode::OK, Json(response)).into_response()
}

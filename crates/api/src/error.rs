//! JSON rendering of application errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tourdesk_shared::AppError;
use tracing::error;

/// Builds a `{ "error", "message" }` response.
pub fn error_response(status: StatusCode, code: &str, message: &str) -> Response {
    (status, Json(json!({ "error": code, "message": message }))).into_response()
}

/// Error returned from handlers, rendered as JSON.
///
/// Server errors are logged with their details and answered with a generic
/// message.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.0.is_server_error() {
            error!(error = %self.0, "Request failed");
        }

        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        error_response(status, self.0.error_code(), &self.0.public_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AppError::NotFound("Agency profile not found".into()), StatusCode::NOT_FOUND)]
    #[case(AppError::Forbidden("no".into()), StatusCode::FORBIDDEN)]
    #[case(AppError::Database("connection reset".into()), StatusCode::INTERNAL_SERVER_ERROR)]
    fn test_status_follows_app_error(#[case] err: AppError, #[case] expected: StatusCode) {
        let response = ApiError(err).into_response();
        assert_eq!(response.status(), expected);
    }
}

//! Authentication middleware for protected routes.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{StatusCode, header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use std::convert::Infallible;
use tracing::debug;

use crate::{AppState, error::error_response};
use tourdesk_shared::{Claims, JwtError};

/// Extracts the bearer token from the Authorization header.
fn extract_bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))
}

fn bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(extract_bearer_token)
}

/// Authentication middleware that validates JWT tokens.
///
/// Valid claims are stored in request extensions for handlers and later
/// layers to read.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = bearer_token(&request) else {
        return error_response(
            StatusCode::UNAUTHORIZED,
            "missing_token",
            "Authorization header with Bearer token is required",
        );
    };

    match state.jwt_service.validate_token(token) {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        Err(JwtError::Expired) => {
            error_response(StatusCode::UNAUTHORIZED, "token_expired", "Token has expired")
        }
        Err(_) => error_response(
            StatusCode::UNAUTHORIZED,
            "invalid_token",
            "Invalid or malformed token",
        ),
    }
}

/// Like [`auth_middleware`] but never rejects.
///
/// Claims are attached only when a valid token is present; anonymous and
/// invalid-token requests continue without them.
pub async fn optional_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let claims = bearer_token(&request).and_then(|token| {
        state
            .jwt_service
            .validate_token(token)
            .inspect_err(|e| debug!(error = %e, "Ignoring invalid token on public route"))
            .ok()
    });

    if let Some(claims) = claims {
        request.extensions_mut().insert(claims);
    }
    next.run(request).await
}

/// Extractor for routes behind [`optional_auth_middleware`].
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<Claims>);

impl<S> FromRequestParts<S> for MaybeAuthUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(parts.extensions.get::<Claims>().cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Bearer abc.def", Some("abc.def"))]
    #[case("bearer abc.def", Some("abc.def"))]
    #[case("Basic dXNlcg==", None)]
    #[case("abc.def", None)]
    fn test_extract_bearer_token(#[case] header: &str, #[case] expected: Option<&str>) {
        assert_eq!(extract_bearer_token(header), expected);
    }
}

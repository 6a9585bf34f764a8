//! Agency authorization layer.
//!
//! Runs after [`auth_middleware`](super::auth::auth_middleware) and turns the
//! caller's claims into an [`AgencyAccess`] capability. Handlers that need
//! agency rights take `AgencyAccess` as an extractor and never look at roles.

use axum::{
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::error::ApiError;
use tourdesk_shared::{AgencyAccess, AppError, Claims};

/// Grants [`AgencyAccess`] to agency callers and rejects everyone else.
pub async fn require_agency(mut request: Request, next: Next) -> Response {
    let Some(claims) = request.extensions().get::<Claims>().cloned() else {
        return ApiError(AppError::Unauthorized("Authentication required".to_string()))
            .into_response();
    };

    match AgencyAccess::grant(&claims) {
        Ok(access) => {
            request.extensions_mut().insert(access);
            next.run(request).await
        }
        Err(err) => {
            info!(user_id = %claims.user_id(), role = %claims.role, "Agency access denied");
            ApiError(err).into_response()
        }
    }
}

/// Extractor for the capability inserted by [`require_agency`].
#[derive(Debug, Clone, Copy)]
pub struct Agency(pub AgencyAccess);

impl<S> FromRequestParts<S> for Agency
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AgencyAccess>()
            .copied()
            .map(Agency)
            .ok_or_else(|| {
                ApiError(AppError::Forbidden(
                    "Agency role required for this resource".to_string(),
                ))
            })
    }
}

//! API route definitions.

use axum::{Router, middleware};

use crate::{
    AppState,
    middleware::{auth_middleware, optional_auth_middleware, require_agency},
};

pub mod auth;
pub mod dashboard;
pub mod health;
pub mod home;

/// Creates the API router with protected routes that need state for middleware.
#[allow(clippy::needless_pass_by_value)]
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    // Layers run bottom-up: authenticate first, then demand the agency role
    let agency_routes = Router::new()
        .merge(dashboard::routes())
        .layer(middleware::from_fn(require_agency))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let public_routes = Router::new()
        .merge(home::routes())
        .layer(middleware::from_fn_with_state(
            state,
            optional_auth_middleware,
        ));

    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(public_routes)
        .merge(agency_routes)
}

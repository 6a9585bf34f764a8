//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes
//! - Authentication and agency authorization middleware
//! - JSON error responses

pub mod error;
pub mod middleware;
pub mod routes;

use axum::{Router, http::header::AUTHORIZATION};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tourdesk_core::catalog::TourCatalog;
use tourdesk_shared::JwtService;
use tower_http::cors::{Any, CorsLayer};
use tower_http::sensitive_headers::SetSensitiveRequestHeadersLayer;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// Tour catalogue backing the dashboard and landing page.
    pub catalog: Arc<dyn TourCatalog>,
    /// JWT service for token operations.
    pub jwt_service: Arc<JwtService>,
    /// Number of packages on the landing page.
    pub featured_limit: u64,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes_with_state(state.clone()))
        .layer(TraceLayer::new_for_http())
        // Keep bearer tokens out of request logs
        .layer(SetSensitiveRequestHeadersLayer::new([AUTHORIZATION]))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

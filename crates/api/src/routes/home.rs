//! Public landing page.
//!
//! Signed-in agencies are sent to their dashboard; everyone else gets the
//! newest tour packages.

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::{AppState, error::ApiError, middleware::MaybeAuthUser};
use tourdesk_core::catalog::{CatalogService, FeaturedTour};
use tourdesk_shared::{AgencyAccess, AppError};

/// Where agency callers are redirected.
pub const AGENCY_DASHBOARD_PATH: &str = "/api/v1/agency/dashboard";

/// Creates the landing routes (optional auth middleware is applied externally).
pub fn routes() -> Router<AppState> {
    Router::new().route("/home", get(home))
}

/// Landing page response.
#[derive(Debug, Serialize)]
pub struct HomeResponse {
    /// Newest tour packages.
    pub featured_tours: Vec<FeaturedTourResponse>,
}

/// Featured tour package.
#[derive(Debug, Serialize)]
pub struct FeaturedTourResponse {
    /// Package ID.
    pub id: Uuid,
    /// Package title.
    pub title: String,
    /// Price per participant.
    pub price: String,
    /// Offering agency.
    pub agency_name: String,
}

impl From<FeaturedTour> for FeaturedTourResponse {
    fn from(tour: FeaturedTour) -> Self {
        Self {
            id: tour.package.id.into_inner(),
            title: tour.package.title,
            price: format!("{:.4}", tour.package.price),
            agency_name: tour.agency_name,
        }
    }
}

/// GET /home
async fn home(State(state): State<AppState>, MaybeAuthUser(claims): MaybeAuthUser) -> Response {
    if let Some(access) = claims.as_ref().and_then(|c| AgencyAccess::grant(c).ok()) {
        debug!(user_id = %access.owner(), "Redirecting agency to dashboard");
        return Redirect::to(AGENCY_DASHBOARD_PATH).into_response();
    }

    match CatalogService::featured_tours(state.catalog.as_ref(), state.featured_limit).await {
        Ok(tours) => Json(HomeResponse {
            featured_tours: tours.into_iter().map(Into::into).collect(),
        })
        .into_response(),
        Err(e) => ApiError(AppError::Database(format!("featured tours: {e}"))).into_response(),
    }
}

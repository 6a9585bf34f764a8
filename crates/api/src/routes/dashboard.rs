//! Agency dashboard routes.

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{AppState, error::ApiError, middleware::Agency};
use tourdesk_core::dashboard::{
    AgencyDashboard, DashboardError, DashboardService, RecentBooking,
};
use tourdesk_shared::AppError;

/// Creates the dashboard routes (auth and agency layers are applied externally).
pub fn routes() -> Router<AppState> {
    Router::new().route("/agency/dashboard", get(get_agency_dashboard))
}

// ============================================================================
// Response Types
// ============================================================================

/// Response for the agency dashboard.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    /// Agency display name.
    pub agency_name: String,
    /// Agency description, empty when unset.
    pub agency_description: String,
    /// Number of tour packages.
    pub total_tours: usize,
    /// Bookings that are not cancelled.
    pub active_bookings: usize,
    /// Revenue from paid bookings.
    pub total_revenue: String,
    /// Completed bookings without feedback.
    pub pending_reviews: usize,
    /// Newest bookings, at most five.
    pub recent_bookings: Vec<RecentBookingResponse>,
}

/// Recent booking entry.
#[derive(Debug, Serialize)]
pub struct RecentBookingResponse {
    /// Booking ID.
    pub id: Uuid,
    /// Booked package title.
    pub package_title: String,
    /// Booking creation time (RFC 3339).
    pub booking_date: String,
    /// Number of participants.
    pub participants: u32,
    /// Status label.
    pub status: &'static str,
    /// Participants × price.
    pub revenue: String,
}

/// Formats a Decimal as a string with 4 decimal places.
fn format_money(amount: Decimal) -> String {
    format!("{amount:.4}")
}

impl From<RecentBooking> for RecentBookingResponse {
    fn from(b: RecentBooking) -> Self {
        Self {
            id: b.booking_id.into_inner(),
            package_title: b.package_title,
            booking_date: b.booking_date.to_rfc3339(),
            participants: b.participants,
            status: b.status.label(),
            revenue: format_money(b.revenue),
        }
    }
}

impl From<AgencyDashboard> for DashboardResponse {
    fn from(d: AgencyDashboard) -> Self {
        Self {
            agency_name: d.agency_name,
            agency_description: d.agency_description,
            total_tours: d.summary.total_tours,
            active_bookings: d.summary.active_bookings,
            total_revenue: format_money(d.summary.total_revenue),
            pending_reviews: d.summary.pending_reviews,
            recent_bookings: d
                .summary
                .recent_bookings
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /agency/dashboard
async fn get_agency_dashboard(
    State(state): State<AppState>,
    Agency(access): Agency,
) -> Response {
    match DashboardService::agency_dashboard(state.catalog.as_ref(), &access).await {
        Ok(dashboard) => {
            info!(
                user_id = %access.owner(),
                total_tours = dashboard.summary.total_tours,
                active_bookings = dashboard.summary.active_bookings,
                "Dashboard computed"
            );
            Json(DashboardResponse::from(dashboard)).into_response()
        }
        Err(e) => {
            if let DashboardError::AgencyNotFound(user_id) = &e {
                warn!(user_id = %user_id, "Agency user has no profile");
            }
            ApiError(AppError::from(e)).into_response()
        }
    }
}

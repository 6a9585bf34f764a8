//! Dashboard data types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use tourdesk_shared::types::BookingId;

use crate::catalog::BookingStatus;

/// Summary statistics for one agency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    /// Number of packages the agency publishes.
    pub total_tours: usize,
    /// Bookings that are not cancelled.
    pub active_bookings: usize,
    /// Sum of participants × price over paid bookings.
    pub total_revenue: Decimal,
    /// Completed bookings still missing feedback.
    pub pending_reviews: usize,
    /// Newest bookings first, at most five.
    pub recent_bookings: Vec<RecentBooking>,
}

/// Lightweight view of a recent booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentBooking {
    /// Booking ID.
    pub booking_id: BookingId,
    /// Title of the booked package.
    pub package_title: String,
    /// When the booking was made.
    pub booking_date: DateTime<Utc>,
    /// Number of travellers.
    pub participants: u32,
    /// Booking status.
    pub status: BookingStatus,
    /// Participants × price, regardless of payment.
    pub revenue: Decimal,
}

/// Dashboard for the signed-in agency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgencyDashboard {
    /// Agency display name.
    pub agency_name: String,
    /// Agency description, empty when unset.
    pub agency_description: String,
    /// Computed statistics.
    #[serde(flatten)]
    pub summary: DashboardSummary,
}

//! Agency dashboard statistics and recent-activity feed.
//!
//! This module provides:
//! - The pure aggregation over an agency's packages and bookings
//! - The async entry points that fetch through `TourCatalog`

pub mod error;
pub mod service;
pub mod types;


pub use error::DashboardError;
pub use service::{DashboardService, RECENT_BOOKINGS_LIMIT};
pub use types::{AgencyDashboard, DashboardSummary, RecentBooking};

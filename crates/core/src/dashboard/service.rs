//! Dashboard aggregation.

use std::collections::HashSet;

use rust_decimal::Decimal;
use tourdesk_shared::{
    AgencyAccess,
    types::{AgencyId, TourPackageId},
};

use super::error::DashboardError;
use super::types::{AgencyDashboard, DashboardSummary, RecentBooking};
use crate::catalog::{BookingRecord, TourCatalog, TourPackage};

/// Maximum number of entries in the recent-bookings feed.
pub const RECENT_BOOKINGS_LIMIT: usize = 5;

/// Dashboard service for agency statistics.
pub struct DashboardService;

impl DashboardService {
    /// Aggregates already-fetched packages and bookings into a summary.
    ///
    /// Bookings whose package is not in `packages` are ignored. Recent bookings
    /// are ordered by creation time descending, then by booking ID ascending.
    #[must_use]
    pub fn summarize(packages: &[TourPackage], bookings: &[BookingRecord]) -> DashboardSummary {
        let owned: HashSet<TourPackageId> = packages.iter().map(|p| p.id).collect();
        let mut owned_bookings: Vec<&BookingRecord> = bookings
            .iter()
            .filter(|r| owned.contains(&r.package.id))
            .collect();

        let active_bookings = owned_bookings.iter().filter(|r| r.is_active()).count();
        let total_revenue: Decimal = owned_bookings.iter().map(|r| r.revenue()).sum();
        let pending_reviews = owned_bookings.iter().filter(|r| r.awaits_review()).count();

        owned_bookings.sort_by(|a, b| {
            b.booking
                .created_at
                .cmp(&a.booking.created_at)
                .then_with(|| a.booking.id.cmp(&b.booking.id))
        });

        let recent_bookings = owned_bookings
            .into_iter()
            .take(RECENT_BOOKINGS_LIMIT)
            .map(|r| RecentBooking {
                booking_id: r.booking.id,
                package_title: r.package.title.clone(),
                booking_date: r.booking.created_at,
                participants: r.booking.participants,
                status: r.booking.status,
                revenue: r.gross_amount(),
            })
            .collect();

        DashboardSummary {
            total_tours: packages.len(),
            active_bookings,
            total_revenue,
            pending_reviews,
            recent_bookings,
        }
    }

    /// Fetches an agency's packages and bookings and summarizes them.
    ///
    /// An agency without packages yields the zero summary without querying bookings.
    pub async fn compute_summary<C>(
        catalog: &C,
        agency_id: AgencyId,
    ) -> Result<DashboardSummary, DashboardError>
    where
        C: TourCatalog + ?Sized,
    {
        let packages = catalog.packages_by_agency(agency_id).await?;
        if packages.is_empty() {
            return Ok(DashboardSummary::default());
        }

        let package_ids: Vec<TourPackageId> = packages.iter().map(|p| p.id).collect();
        let bookings = catalog.bookings_for_packages(&package_ids).await?;

        Ok(Self::summarize(&packages, &bookings))
    }

    /// Builds the dashboard for the agency owned by the authorized user.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::AgencyNotFound` if the user owns no agency profile.
    pub async fn agency_dashboard<C>(
        catalog: &C,
        access: &AgencyAccess,
    ) -> Result<AgencyDashboard, DashboardError>
    where
        C: TourCatalog + ?Sized,
    {
        let owner = access.owner();
        let agency = catalog
            .find_agency_by_owner(owner)
            .await?
            .ok_or(DashboardError::AgencyNotFound(owner))?;

        let summary = Self::compute_summary(catalog, agency.id).await?;

        Ok(AgencyDashboard {
            agency_name: agency.name,
            agency_description: agency.description.unwrap_or_default(),
            summary,
        })
    }
}

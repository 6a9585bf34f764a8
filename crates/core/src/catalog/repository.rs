//! Read-only repository interface over the tour catalogue.

use async_trait::async_trait;
use thiserror::Error;
use tourdesk_shared::types::{AgencyId, TourPackageId, UserId};

use super::types::{AgencyProfile, BookingRecord, FeaturedTour, TourPackage};

/// Errors returned by catalogue repositories.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The backing store failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A stored row could not be mapped onto the domain model.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

/// Typed fetch operations over agencies, packages and bookings.
///
/// Implemented by the database layer and by [`super::InMemoryCatalog`].
#[async_trait]
pub trait TourCatalog: Send + Sync {
    /// Finds the agency profile owned by a user.
    async fn find_agency_by_owner(
        &self,
        owner_id: UserId,
    ) -> Result<Option<AgencyProfile>, CatalogError>;

    /// Lists every package published by an agency.
    async fn packages_by_agency(&self, agency_id: AgencyId)
    -> Result<Vec<TourPackage>, CatalogError>;

    /// Lists bookings whose tour date belongs to one of the given packages,
    /// joined with that tour date and package.
    async fn bookings_for_packages(
        &self,
        package_ids: &[TourPackageId],
    ) -> Result<Vec<BookingRecord>, CatalogError>;

    /// Lists the newest packages with their agency name.
    ///
    /// Packages are ordered by creation time descending, then ID descending.
    async fn latest_packages(&self, limit: u64) -> Result<Vec<FeaturedTour>, CatalogError>;
}

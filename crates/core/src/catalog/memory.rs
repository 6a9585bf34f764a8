//! In-memory `TourCatalog` used by tests and local demos.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tourdesk_shared::types::{AgencyId, TourPackageId, UserId};

use super::repository::{CatalogError, TourCatalog};
use super::types::{AgencyProfile, Booking, BookingRecord, FeaturedTour, TourDate, TourPackage};

/// Catalogue held entirely in memory.
///
/// Populate it up front; it is read-only once shared.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    agencies: Vec<AgencyProfile>,
    packages: Vec<TourPackage>,
    tour_dates: Vec<TourDate>,
    bookings: Vec<Booking>,
}

impl InMemoryCatalog {
    /// Creates an empty catalogue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an agency profile.
    pub fn insert_agency(&mut self, agency: AgencyProfile) -> &mut Self {
        self.agencies.push(agency);
        self
    }

    /// Adds a tour package.
    pub fn insert_package(&mut self, package: TourPackage) -> &mut Self {
        self.packages.push(package);
        self
    }

    /// Adds a tour date.
    pub fn insert_tour_date(&mut self, tour_date: TourDate) -> &mut Self {
        self.tour_dates.push(tour_date);
        self
    }

    /// Adds a booking.
    pub fn insert_booking(&mut self, booking: Booking) -> &mut Self {
        self.bookings.push(booking);
        self
    }
}

#[async_trait]
impl TourCatalog for InMemoryCatalog {
    async fn find_agency_by_owner(
        &self,
        owner_id: UserId,
    ) -> Result<Option<AgencyProfile>, CatalogError> {
        Ok(self
            .agencies
            .iter()
            .find(|a| a.owner_id == owner_id)
            .cloned())
    }

    async fn packages_by_agency(
        &self,
        agency_id: AgencyId,
    ) -> Result<Vec<TourPackage>, CatalogError> {
        Ok(self
            .packages
            .iter()
            .filter(|p| p.agency_id == agency_id)
            .cloned()
            .collect())
    }

    async fn bookings_for_packages(
        &self,
        package_ids: &[TourPackageId],
    ) -> Result<Vec<BookingRecord>, CatalogError> {
        let wanted: HashSet<TourPackageId> = package_ids.iter().copied().collect();
        let packages: HashMap<TourPackageId, &TourPackage> = self
            .packages
            .iter()
            .filter(|p| wanted.contains(&p.id))
            .map(|p| (p.id, p))
            .collect();

        let records = self
            .bookings
            .iter()
            .filter_map(|booking| {
                let tour_date = self
                    .tour_dates
                    .iter()
                    .find(|d| d.id == booking.tour_date_id)?;
                let package = packages.get(&tour_date.package_id)?;
                Some(BookingRecord {
                    booking: booking.clone(),
                    tour_date: tour_date.clone(),
                    package: (*package).clone(),
                })
            })
            .collect();

        Ok(records)
    }

    async fn latest_packages(&self, limit: u64) -> Result<Vec<FeaturedTour>, CatalogError> {
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        let mut packages: Vec<&TourPackage> = self.packages.iter().collect();
        packages.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));

        Ok(packages
            .into_iter()
            .filter_map(|package| {
                let agency = self.agencies.iter().find(|a| a.id == package.agency_id)?;
                Some(FeaturedTour {
                    package: package.clone(),
                    agency_name: agency.name.clone(),
                })
            })
            .take(limit)
            .collect())
    }
}

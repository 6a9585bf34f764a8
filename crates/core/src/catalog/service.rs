//! Landing page catalogue queries.

use super::repository::{CatalogError, TourCatalog};
use super::types::FeaturedTour;

/// Number of packages shown on the landing page when not configured.
pub const DEFAULT_FEATURED_LIMIT: u64 = 6;

/// Upper bound on the featured list regardless of configuration.
pub const MAX_FEATURED_LIMIT: u64 = 50;

/// Catalogue service for the public landing page.
pub struct CatalogService;

impl CatalogService {
    /// Returns the newest tour packages with their agency names.
    ///
    /// A `limit` of zero falls back to [`DEFAULT_FEATURED_LIMIT`]; larger values
    /// are capped at [`MAX_FEATURED_LIMIT`].
    pub async fn featured_tours<C>(
        catalog: &C,
        limit: u64,
    ) -> Result<Vec<FeaturedTour>, CatalogError>
    where
        C: TourCatalog + ?Sized,
    {
        let limit = match limit {
            0 => DEFAULT_FEATURED_LIMIT,
            n => n.min(MAX_FEATURED_LIMIT),
        };

        catalog.latest_packages(limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AgencyProfile, InMemoryCatalog, TourPackage};
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use rust_decimal_macros::dec;
    use tourdesk_shared::types::{AgencyId, TourPackageId, UserId};

    fn coastal_trails() -> AgencyProfile {
        AgencyProfile {
            id: AgencyId::new(),
            owner_id: UserId::new(),
            name: "Coastal Trails".to_string(),
            description: None,
        }
    }

    fn launch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap()
    }

    /// Package `i` is published `i` days after launch.
    fn catalog_with_packages(count: usize) -> (InMemoryCatalog, Vec<TourPackageId>) {
        let agency = coastal_trails();
        let mut catalog = InMemoryCatalog::new();
        catalog.insert_agency(agency.clone());

        let mut ids = Vec::with_capacity(count);
        for i in 0..count {
            let id = TourPackageId::new();
            ids.push(id);
            catalog.insert_package(TourPackage {
                id,
                agency_id: agency.id,
                title: format!("Tour {i}"),
                price: dec!(50),
                created_at: launch() + Duration::days(i64::try_from(i).unwrap()),
            });
        }
        (catalog, ids)
    }

    #[tokio::test]
    async fn test_featured_tours_newest_first_and_limited() {
        let (catalog, ids) = catalog_with_packages(8);

        let featured = CatalogService::featured_tours(&catalog, 6).await.unwrap();

        assert_eq!(featured.len(), 6);
        assert_eq!(featured[0].package.id, ids[7]);
        assert_eq!(featured[5].package.id, ids[2]);
        assert!(featured.iter().all(|f| f.agency_name == "Coastal Trails"));
    }

    #[tokio::test]
    async fn test_zero_limit_uses_default() {
        let (catalog, _) = catalog_with_packages(10);

        let featured = CatalogService::featured_tours(&catalog, 0).await.unwrap();

        assert_eq!(featured.len(), 6);
    }

    #[tokio::test]
    async fn test_featured_tours_follow_creation_time_not_id() {
        let agency = coastal_trails();
        let mut catalog = InMemoryCatalog::new();
        catalog.insert_agency(agency.clone());

        // IDs minted in reverse publication order, like rows imported from elsewhere
        let mut ids: Vec<TourPackageId> = (0..4).map(|_| TourPackageId::new()).collect();
        ids.reverse();
        for (i, id) in ids.iter().enumerate() {
            catalog.insert_package(TourPackage {
                id: *id,
                agency_id: agency.id,
                title: format!("Tour {i}"),
                price: dec!(50),
                created_at: launch() + Duration::hours(i64::try_from(i).unwrap()),
            });
        }

        let featured = CatalogService::featured_tours(&catalog, 3).await.unwrap();

        let titles: Vec<&str> = featured.iter().map(|f| f.package.title.as_str()).collect();
        assert_eq!(titles, ["Tour 3", "Tour 2", "Tour 1"]);
    }

    #[tokio::test]
    async fn test_same_creation_time_breaks_ties_by_id() {
        let agency = coastal_trails();
        let mut catalog = InMemoryCatalog::new();
        catalog.insert_agency(agency.clone());

        let older = TourPackageId::new();
        let newer = TourPackageId::new();
        for (id, title) in [(newer, "Second"), (older, "First")] {
            catalog.insert_package(TourPackage {
                id,
                agency_id: agency.id,
                title: title.to_string(),
                price: dec!(50),
                created_at: launch(),
            });
        }

        let featured = CatalogService::featured_tours(&catalog, 6).await.unwrap();

        assert_eq!(featured[0].package.id, newer);
        assert_eq!(featured[1].package.id, older);
    }

    #[tokio::test]
    async fn test_empty_catalog() {
        let catalog = InMemoryCatalog::new();

        let featured = CatalogService::featured_tours(&catalog, 6).await.unwrap();

        assert!(featured.is_empty());
    }
}

//! Catalogue repository backing the dashboard and landing page.
//!
//! Joins bookings to tour dates and packages in Rust after fetching each
//! table, so every call issues a fixed number of queries. Bookings are
//! selected through a tour-date subquery, keeping the bind count bounded by
//! the package IDs.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Select, sea_query::Query,
};
use tourdesk_core::catalog::{
    AgencyProfile, Booking, BookingRecord, BookingStatus, CatalogError, FeaturedTour,
    PaymentStatus, TourCatalog, TourDate, TourPackage,
};
use tourdesk_shared::types::{AgencyId, BookingId, TourDateId, TourPackageId, UserId};
use uuid::Uuid;

use crate::entities::{
    agency_profiles, bookings, sea_orm_active_enums, tour_dates, tour_packages,
};

/// SeaORM-backed implementation of [`TourCatalog`].
#[derive(Debug, Clone)]
pub struct CatalogRepository {
    db: DatabaseConnection,
}

impl CatalogRepository {
    /// Creates a new catalogue repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn storage(err: DbErr) -> CatalogError {
    CatalogError::Storage(err.to_string())
}

fn agency_from_model(model: agency_profiles::Model) -> AgencyProfile {
    AgencyProfile {
        id: AgencyId::from_uuid(model.id),
        owner_id: UserId::from_uuid(model.user_id),
        name: model.agency_name,
        description: model.description,
    }
}

fn package_from_model(model: tour_packages::Model) -> TourPackage {
    TourPackage {
        id: TourPackageId::from_uuid(model.id),
        agency_id: AgencyId::from_uuid(model.agency_profile_id),
        title: model.title,
        price: model.price,
        created_at: model.created_at.into(),
    }
}

fn tour_date_from_model(model: tour_dates::Model) -> TourDate {
    TourDate {
        id: TourDateId::from_uuid(model.id),
        package_id: TourPackageId::from_uuid(model.tour_package_id),
        scheduled_on: model.scheduled_on,
    }
}

const fn booking_status(status: sea_orm_active_enums::BookingStatus) -> BookingStatus {
    match status {
        sea_orm_active_enums::BookingStatus::Pending => BookingStatus::Pending,
        sea_orm_active_enums::BookingStatus::Confirmed => BookingStatus::Confirmed,
        sea_orm_active_enums::BookingStatus::Completed => BookingStatus::Completed,
        sea_orm_active_enums::BookingStatus::Cancelled => BookingStatus::Cancelled,
    }
}

const fn payment_status(status: sea_orm_active_enums::PaymentStatus) -> PaymentStatus {
    match status {
        sea_orm_active_enums::PaymentStatus::Unpaid => PaymentStatus::Unpaid,
        sea_orm_active_enums::PaymentStatus::Paid => PaymentStatus::Paid,
        sea_orm_active_enums::PaymentStatus::Refunded => PaymentStatus::Refunded,
    }
}

fn booking_from_model(model: bookings::Model) -> Result<Booking, CatalogError> {
    let participants = u32::try_from(model.participants)
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| {
            CatalogError::InvalidRecord(format!(
                "booking {} has {} participants",
                model.id, model.participants
            ))
        })?;

    Ok(Booking {
        id: BookingId::from_uuid(model.id),
        tour_date_id: TourDateId::from_uuid(model.tour_date_id),
        participants,
        status: booking_status(model.status),
        payment_status: payment_status(model.payment_status),
        created_at: model.created_at.into(),
        feedback: model.feedback,
    })
}

/// Bookings on any tour date of the given packages, newest first.
fn bookings_on_packages(package_ids: Vec<Uuid>) -> Select<bookings::Entity> {
    let tour_dates_of_packages = Query::select()
        .column(tour_dates::Column::Id)
        .from(tour_dates::Entity)
        .and_where(tour_dates::Column::TourPackageId.is_in(package_ids))
        .to_owned();

    bookings::Entity::find()
        .filter(bookings::Column::TourDateId.in_subquery(tour_dates_of_packages))
        .order_by_desc(bookings::Column::CreatedAt)
}

#[async_trait]
impl TourCatalog for CatalogRepository {
    async fn find_agency_by_owner(
        &self,
        owner_id: UserId,
    ) -> Result<Option<AgencyProfile>, CatalogError> {
        let agency = agency_profiles::Entity::find()
            .filter(agency_profiles::Column::UserId.eq(owner_id.into_inner()))
            .one(&self.db)
            .await
            .map_err(storage)?;

        Ok(agency.map(agency_from_model))
    }

    async fn packages_by_agency(
        &self,
        agency_id: AgencyId,
    ) -> Result<Vec<TourPackage>, CatalogError> {
        let packages = tour_packages::Entity::find()
            .filter(tour_packages::Column::AgencyProfileId.eq(agency_id.into_inner()))
            .all(&self.db)
            .await
            .map_err(storage)?;

        Ok(packages.into_iter().map(package_from_model).collect())
    }

    async fn bookings_for_packages(
        &self,
        package_ids: &[TourPackageId],
    ) -> Result<Vec<BookingRecord>, CatalogError> {
        if package_ids.is_empty() {
            return Ok(vec![]);
        }

        let ids: Vec<Uuid> = package_ids.iter().map(|id| id.into_inner()).collect();

        let packages: HashMap<Uuid, TourPackage> = tour_packages::Entity::find()
            .filter(tour_packages::Column::Id.is_in(ids.clone()))
            .all(&self.db)
            .await
            .map_err(storage)?
            .into_iter()
            .map(|m| (m.id, package_from_model(m)))
            .collect();

        let dates: HashMap<Uuid, TourDate> = tour_dates::Entity::find()
            .filter(tour_dates::Column::TourPackageId.is_in(ids.clone()))
            .all(&self.db)
            .await
            .map_err(storage)?
            .into_iter()
            .map(|m| (m.id, tour_date_from_model(m)))
            .collect();

        if dates.is_empty() {
            return Ok(vec![]);
        }

        let booking_rows = bookings_on_packages(ids)
            .all(&self.db)
            .await
            .map_err(storage)?;

        let mut records = Vec::with_capacity(booking_rows.len());
        for row in booking_rows {
            let Some(tour_date) = dates.get(&row.tour_date_id) else {
                continue;
            };
            let Some(package) = packages.get(&tour_date.package_id.into_inner()) else {
                continue;
            };
            records.push(BookingRecord {
                booking: booking_from_model(row)?,
                tour_date: tour_date.clone(),
                package: package.clone(),
            });
        }

        Ok(records)
    }

    async fn latest_packages(&self, limit: u64) -> Result<Vec<FeaturedTour>, CatalogError> {
        let rows = tour_packages::Entity::find()
            .find_also_related(agency_profiles::Entity)
            .order_by_desc(tour_packages::Column::CreatedAt)
            .order_by_desc(tour_packages::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(storage)?;

        Ok(rows
            .into_iter()
            .filter_map(|(package, agency)| {
                let agency = agency?;
                Some(FeaturedTour {
                    package: package_from_model(package),
                    agency_name: agency.agency_name,
                })
            })
            .collect())
    }
}

//! `SeaORM` entity definitions.

pub mod prelude;

pub mod agency_profiles;
pub mod bookings;
pub mod sea_orm_active_enums;
pub mod tour_dates;
pub mod tour_packages;
pub mod users;

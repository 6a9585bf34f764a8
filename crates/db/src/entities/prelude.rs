//! Entity re-exports.

pub use super::agency_profiles::Entity as AgencyProfiles;
pub use super::bookings::Entity as Bookings;
pub use super::tour_dates::Entity as TourDates;
pub use super::tour_packages::Entity as TourPackages;
pub use super::users::Entity as Users;

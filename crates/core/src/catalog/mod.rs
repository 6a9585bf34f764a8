//! Tour catalogue: agencies, packages, tour dates and bookings.

pub mod memory;
pub mod repository;
pub mod service;
pub mod types;

pub use memory::InMemoryCatalog;
pub use repository::{CatalogError, TourCatalog};
pub use service::{CatalogService, DEFAULT_FEATURED_LIMIT};
pub use types::{
    AgencyProfile, Booking, BookingRecord, BookingStatus, FeaturedTour, PaymentStatus, TourDate,
    TourPackage,
};

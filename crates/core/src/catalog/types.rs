//! Tour catalogue domain types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tourdesk_shared::types::{AgencyId, BookingId, TourDateId, TourPackageId, UserId};

/// Agency profile owned by a user with the agency role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgencyProfile {
    /// Profile ID.
    pub id: AgencyId,
    /// User that owns the profile.
    pub owner_id: UserId,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: Option<String>,
}

/// A sellable tour product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourPackage {
    /// Package ID.
    pub id: TourPackageId,
    /// Publishing agency.
    pub agency_id: AgencyId,
    /// Title shown to customers.
    pub title: String,
    /// Price per participant.
    pub price: Decimal,
    /// When the package was published.
    pub created_at: DateTime<Utc>,
}

/// A scheduled departure of a tour package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourDate {
    /// Tour date ID.
    pub id: TourDateId,
    /// Package this date belongs to.
    pub package_id: TourPackageId,
    /// Day the tour runs.
    pub scheduled_on: NaiveDate,
}

/// Lifecycle status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingStatus {
    /// Requested, not yet confirmed by the agency.
    Pending,
    /// Confirmed by the agency.
    Confirmed,
    /// Tour has taken place.
    Completed,
    /// Cancelled by either side.
    Cancelled,
}

impl BookingStatus {
    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Payment state of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// Nothing paid yet.
    Unpaid,
    /// Paid in full.
    Paid,
    /// Payment returned to the customer.
    Refunded,
}

/// A customer's reservation against a tour date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Booking ID.
    pub id: BookingId,
    /// Tour date booked.
    pub tour_date_id: TourDateId,
    /// Number of travellers, always positive.
    pub participants: u32,
    /// Booking status.
    pub status: BookingStatus,
    /// Payment status.
    pub payment_status: PaymentStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Customer feedback left after the tour.
    pub feedback: Option<String>,
}

/// A booking joined with the tour date and package it was made against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRecord {
    /// The booking itself.
    pub booking: Booking,
    /// Booked tour date.
    pub tour_date: TourDate,
    /// Package reached through the tour date.
    pub package: TourPackage,
}

impl BookingRecord {
    /// Participants times the package price, whatever the payment status.
    #[must_use]
    pub fn gross_amount(&self) -> Decimal {
        self.package.price * Decimal::from(self.booking.participants)
    }

    /// Amount this booking adds to revenue: the gross amount once paid, zero otherwise.
    #[must_use]
    pub fn revenue(&self) -> Decimal {
        if self.booking.payment_status == PaymentStatus::Paid {
            self.gross_amount()
        } else {
            Decimal::ZERO
        }
    }

    /// True unless the booking was cancelled.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.booking.status != BookingStatus::Cancelled
    }

    /// True for completed bookings the customer has not reviewed yet.
    #[must_use]
    pub fn awaits_review(&self) -> bool {
        self.booking.status == BookingStatus::Completed && self.booking.feedback.is_none()
    }
}

/// Tour package shown on the landing page, with its agency's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeaturedTour {
    /// The package.
    pub package: TourPackage,
    /// Display name of the publishing agency.
    pub agency_name: String,
}

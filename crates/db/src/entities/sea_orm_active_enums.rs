//! `SeaORM` active enums mapped onto `PostgreSQL` enum types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// `user_role` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "user_role")]
pub enum UserRole {
    /// Agency account.
    #[sea_orm(string_value = "agency")]
    Agency,
    /// Customer account.
    #[sea_orm(string_value = "customer")]
    Customer,
    /// Administrator account.
    #[sea_orm(string_value = "admin")]
    Admin,
}

/// `booking_status` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "booking_status")]
pub enum BookingStatus {
    /// Awaiting confirmation.
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Confirmed.
    #[sea_orm(string_value = "confirmed")]
    Confirmed,
    /// Tour done.
    #[sea_orm(string_value = "completed")]
    Completed,
    /// Cancelled.
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

/// `payment_status` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "payment_status")]
pub enum PaymentStatus {
    /// Not paid.
    #[sea_orm(string_value = "unpaid")]
    Unpaid,
    /// Paid.
    #[sea_orm(string_value = "paid")]
    Paid,
    /// Refunded.
    #[sea_orm(string_value = "refunded")]
    Refunded,
}

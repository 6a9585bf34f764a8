//! Database seeder for Tourdesk development and testing.
//!
//! Seeds an agency account with its profile, tour packages, scheduled dates
//! and a spread of bookings, plus a customer account, so the dashboard and
//! landing page have something to show.
//!
//! Usage: cargo run --bin seeder
//!
//! Both accounts sign in with the password `tourdesk-dev`.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, Set, prelude::DateTimeWithTimeZone,
};
use uuid::Uuid;

use tourdesk_core::auth::hash_password;
use tourdesk_db::entities::{
    agency_profiles, bookings,
    sea_orm_active_enums::{BookingStatus, PaymentStatus, UserRole},
    tour_dates, tour_packages, users,
};

/// Agency user ID (consistent for all seeds)
const AGENCY_USER_ID: &str = "00000000-0000-0000-0000-000000000001";
/// Customer user ID (consistent for all seeds)
const CUSTOMER_USER_ID: &str = "00000000-0000-0000-0000-000000000002";
/// Agency profile ID (consistent for all seeds)
const AGENCY_PROFILE_ID: &str = "00000000-0000-0000-0000-000000000010";

const DEV_PASSWORD: &str = "tourdesk-dev";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = tourdesk_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    let password_hash = hash_password(DEV_PASSWORD).expect("Failed to hash dev password");

    println!("Seeding users...");
    seed_user(
        &db,
        agency_user_id(),
        "agency@tourdesk.dev",
        "Ana Agency",
        UserRole::Agency,
        &password_hash,
    )
    .await;
    seed_user(
        &db,
        customer_user_id(),
        "traveller@tourdesk.dev",
        "Tom Traveller",
        UserRole::Customer,
        &password_hash,
    )
    .await;

    println!("Seeding agency profile...");
    if !seed_agency_profile(&db).await {
        println!("Seeding complete!");
        return;
    }

    println!("Seeding tour packages, dates and bookings...");
    seed_catalogue(&db).await;

    println!("Seeding complete!");
}

fn agency_user_id() -> Uuid {
    Uuid::parse_str(AGENCY_USER_ID).unwrap()
}

fn customer_user_id() -> Uuid {
    Uuid::parse_str(CUSTOMER_USER_ID).unwrap()
}

fn agency_profile_id() -> Uuid {
    Uuid::parse_str(AGENCY_PROFILE_ID).unwrap()
}

/// Seeds one user unless it already exists.
async fn seed_user(
    db: &DatabaseConnection,
    id: Uuid,
    email: &str,
    full_name: &str,
    role: UserRole,
    password_hash: &str,
) {
    let existing = users::Entity::find_by_id(id)
        .one(db)
        .await
        .expect("Failed to look up user");
    if existing.is_some() {
        println!("  {email} already exists, skipping...");
        return;
    }

    let user = users::ActiveModel {
        id: Set(id),
        email: Set(email.to_string()),
        password_hash: Set(password_hash.to_string()),
        full_name: Set(full_name.to_string()),
        role: Set(role),
        is_active: Set(true),
        created_at: Set(Utc::now().into()),
        updated_at: Set(Utc::now().into()),
    };

    user.insert(db).await.expect("Failed to insert user");
    println!("  Created user: {email}");
}

/// Seeds the agency profile. Returns false if it already existed.
async fn seed_agency_profile(db: &DatabaseConnection) -> bool {
    let existing = agency_profiles::Entity::find_by_id(agency_profile_id())
        .one(db)
        .await
        .expect("Failed to look up agency profile");
    if existing.is_some() {
        println!("  Agency profile already exists, skipping catalogue...");
        return false;
    }

    let profile = agency_profiles::ActiveModel {
        id: Set(agency_profile_id()),
        user_id: Set(agency_user_id()),
        agency_name: Set("Northern Lights Expeditions".to_string()),
        description: Set(Some("Small-group tours across the Arctic circle".to_string())),
        created_at: Set(Utc::now().into()),
        updated_at: Set(Utc::now().into()),
    };

    profile
        .insert(db)
        .await
        .expect("Failed to insert agency profile");
    println!("  Created agency profile: Northern Lights Expeditions");
    true
}

/// Seeds packages with one date each and a mix of booking states.
async fn seed_catalogue(db: &DatabaseConnection) {
    let packages: [(&str, Decimal); 3] = [
        ("Aurora Night Safari", dec!(149.00)),
        ("Fjord Kayak Day", dec!(95.50)),
        ("Reindeer Sledding", dec!(120.00)),
    ];

    // (package index, participants, status, payment, feedback, days ago)
    let booking_rows = [
        (0, 2, BookingStatus::Confirmed, PaymentStatus::Paid, None, 1),
        (0, 4, BookingStatus::Completed, PaymentStatus::Paid, None, 9),
        (1, 1, BookingStatus::Completed, PaymentStatus::Paid, Some("Calm water, great guide"), 12),
        (1, 3, BookingStatus::Pending, PaymentStatus::Unpaid, None, 0),
        (2, 2, BookingStatus::Cancelled, PaymentStatus::Refunded, None, 4),
        (2, 5, BookingStatus::Confirmed, PaymentStatus::Unpaid, None, 2),
    ];

    let mut date_ids = Vec::with_capacity(packages.len());
    for (i, (title, price)) in packages.iter().enumerate() {
        let package_id = Uuid::now_v7();
        let package = tour_packages::ActiveModel {
            id: Set(package_id),
            agency_profile_id: Set(agency_profile_id()),
            title: Set((*title).to_string()),
            price: Set(*price),
            created_at: Set(Utc::now().into()),
            updated_at: Set(Utc::now().into()),
        };
        package.insert(db).await.expect("Failed to insert package");

        let date_id = Uuid::now_v7();
        let offset = Duration::weeks(i64::try_from(i).unwrap_or(0) + 2);
        let tour_date = tour_dates::ActiveModel {
            id: Set(date_id),
            tour_package_id: Set(package_id),
            scheduled_on: Set(Utc::now().date_naive() + offset),
            created_at: Set(Utc::now().into()),
        };
        tour_date.insert(db).await.expect("Failed to insert tour date");

        date_ids.push(date_id);
        println!("  Created package: {title} ({price})");
    }

    let booking_count = booking_rows.len();
    for (idx, participants, status, payment, feedback, days_ago) in booking_rows {
        let at: DateTimeWithTimeZone = (Utc::now() - Duration::days(days_ago)).into();
        let booking = bookings::ActiveModel {
            id: Set(Uuid::now_v7()),
            tour_date_id: Set(date_ids[idx]),
            customer_id: Set(customer_user_id()),
            participants: Set(participants),
            status: Set(status),
            payment_status: Set(payment),
            feedback: Set(feedback.map(str::to_string)),
            created_at: Set(at),
            updated_at: Set(at),
        };
        booking.insert(db).await.expect("Failed to insert booking");
    }

    println!("  Created {booking_count} bookings");
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    fn unreachable_db() -> DatabaseConnection {
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("relation \"users\" does not exist".to_string())])
            .into_connection()
    }

    #[test]
    fn test_fixed_ids_parse() {
        assert_ne!(agency_user_id(), customer_user_id());
        assert_ne!(agency_profile_id(), Uuid::nil());
    }

    #[tokio::test]
    #[should_panic(expected = "Failed to look up user")]
    async fn test_user_lookup_error_aborts_seeding() {
        seed_user(
            &unreachable_db(),
            agency_user_id(),
            "agency@tourdesk.dev",
            "Ana Agency",
            UserRole::Agency,
            "$argon2id$unused",
        )
        .await;
    }

    #[tokio::test]
    #[should_panic(expected = "Failed to look up agency profile")]
    async fn test_profile_lookup_error_aborts_seeding() {
        seed_agency_profile(&unreachable_db()).await;
    }
}

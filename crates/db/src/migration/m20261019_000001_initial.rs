//! Initial database migration.
//!
//! Creates the enums and tables for users, agency profiles, tour packages,
//! tour dates and bookings.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: ENUMS
        // ============================================================
        db.execute_unprepared(ENUMS_SQL).await?;

        // ============================================================
        // PART 2: ACCOUNTS
        // ============================================================
        db.execute_unprepared(USERS_SQL).await?;
        db.execute_unprepared(AGENCY_PROFILES_SQL).await?;

        // ============================================================
        // PART 3: CATALOGUE
        // ============================================================
        db.execute_unprepared(TOUR_PACKAGES_SQL).await?;
        db.execute_unprepared(TOUR_DATES_SQL).await?;

        // ============================================================
        // PART 4: BOOKINGS
        // ============================================================
        db.execute_unprepared(BOOKINGS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const ENUMS_SQL: &str = r"
CREATE TYPE user_role AS ENUM ('agency', 'customer', 'admin');

CREATE TYPE booking_status AS ENUM (
    'pending',
    'confirmed',
    'completed',
    'cancelled'
);

CREATE TYPE payment_status AS ENUM ('unpaid', 'paid', 'refunded');
";

const USERS_SQL: &str = r"
CREATE TABLE users (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    email VARCHAR(255) NOT NULL UNIQUE,
    password_hash VARCHAR(255) NOT NULL,
    full_name VARCHAR(255) NOT NULL,
    role user_role NOT NULL DEFAULT 'customer',
    is_active BOOLEAN NOT NULL DEFAULT true,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const AGENCY_PROFILES_SQL: &str = r"
CREATE TABLE agency_profiles (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    user_id UUID NOT NULL UNIQUE REFERENCES users(id) ON DELETE CASCADE,
    agency_name VARCHAR(255) NOT NULL,
    description TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const TOUR_PACKAGES_SQL: &str = r"
CREATE TABLE tour_packages (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    agency_profile_id UUID NOT NULL REFERENCES agency_profiles(id) ON DELETE CASCADE,
    title VARCHAR(255) NOT NULL,
    price NUMERIC(12, 2) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_price_non_negative CHECK (price >= 0)
);

CREATE INDEX idx_tour_packages_agency ON tour_packages(agency_profile_id);
CREATE INDEX idx_tour_packages_newest ON tour_packages(created_at DESC, id DESC);
";

const TOUR_DATES_SQL: &str = r"
CREATE TABLE tour_dates (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    tour_package_id UUID NOT NULL REFERENCES tour_packages(id) ON DELETE CASCADE,
    scheduled_on DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_tour_dates_package ON tour_dates(tour_package_id);
";

const BOOKINGS_SQL: &str = r"
CREATE TABLE bookings (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    tour_date_id UUID NOT NULL REFERENCES tour_dates(id) ON DELETE RESTRICT,
    customer_id UUID NOT NULL REFERENCES users(id) ON DELETE RESTRICT,
    participants INTEGER NOT NULL,
    status booking_status NOT NULL DEFAULT 'pending',
    payment_status payment_status NOT NULL DEFAULT 'unpaid',
    feedback TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_participants_positive CHECK (participants > 0)
);

-- Dashboard lookups: bookings per tour date, newest first
CREATE INDEX idx_bookings_tour_date ON bookings(tour_date_id, created_at DESC);
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS bookings CASCADE;
DROP TABLE IF EXISTS tour_dates CASCADE;
DROP TABLE IF EXISTS tour_packages CASCADE;
DROP TABLE IF EXISTS agency_profiles CASCADE;
DROP TABLE IF EXISTS users CASCADE;
DROP TYPE IF EXISTS payment_status;
DROP TYPE IF EXISTS booking_status;
DROP TYPE IF EXISTS user_role;
";

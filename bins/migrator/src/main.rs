//! Database migration runner for Tourdesk.
//!
//! Usage:
//!   migrator up      - Apply the catalogue schema
//!   migrator down    - Roll back the last migration
//!   migrator status  - Show migration status
//!   migrator fresh   - Drop everything and re-apply

use sea_orm_migration::prelude::*;
use tourdesk_db::migration::Migrator;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // The CLI installs its own tracing subscriber
    cli::run_cli(Migrator).await;
}

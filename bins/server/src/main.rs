//! Tourdesk API Server
//!
//! Main entry point for the Tourdesk backend service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tourdesk_api::{AppState, create_router};
use tourdesk_db::{CatalogRepository, connect_with};
use tourdesk_shared::{AppConfig, JwtConfig, JwtService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tourdesk=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;

    let db = connect_with(&config.database).await?;
    info!(
        max_connections = config.database.max_connections,
        "Connected to database"
    );

    let jwt_config = JwtConfig::try_from(&config.jwt)?;

    let state = AppState {
        catalog: Arc::new(CatalogRepository::new(db.clone())),
        db: Arc::new(db),
        jwt_service: Arc::new(JwtService::new(jwt_config)),
        featured_limit: config.catalog.featured_limit,
    };

    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

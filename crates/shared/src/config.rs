//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// JWT configuration.
    pub jwt: JwtConfig,
    /// Landing page catalogue settings.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// JWT configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    /// Secret key for signing tokens.
    pub secret: String,
    /// Access token expiration in seconds.
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry_secs: u64,
}

impl TryFrom<&JwtConfig> for crate::jwt::JwtConfig {
    type Error = std::num::TryFromIntError;

    fn try_from(config: &JwtConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            secret: config.secret.clone(),
            access_token_expires_secs: i64::try_from(config.access_token_expiry_secs)?,
        })
    }
}

fn default_access_token_expiry() -> u64 {
    3600 // 1 hour
}

/// Landing page catalogue configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Number of newest tour packages shown on the landing page.
    #[serde(default = "default_featured_limit")]
    pub featured_limit: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            featured_limit: default_featured_limit(),
        }
    }
}

fn default_featured_limit() -> u64 {
    6
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TOURDESK").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

//! Configuration management for the Replenishment Reports server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with RPL_ prefix

use config::{ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use shared::{ReportKind, DEFAULT_LEAD_DAYS};

/// Signing secret used when none is configured; refused in production
pub const DEVELOPMENT_JWT_SECRET: &str = "development-secret-key";

/// Main application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Log output format ("pretty" or "json")
    pub log_format: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// JWT authentication configuration
    pub jwt: JwtConfig,

    /// Report behaviour
    pub reports: ReportsConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,

    /// Seconds to wait for a pooled connection
    pub acquire_timeout_secs: u64,

    /// Apply the development schema on startup
    pub run_migrations: bool,

    /// Names of the stock tables in the reporting database
    pub tables: TablesConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TablesConfig {
    pub bin: String,
    pub item: String,
    pub item_supplier: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct JwtConfig {
    /// Secret key for verifying JWT tokens
    pub secret: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ReportsConfig {
    /// Report served when none is named
    pub default_kind: ReportKind,

    /// Forward duplicate supplier notices to the notice sink
    pub notify_duplicates: bool,

    /// Days between drafting an order and its required-by date
    pub order_lead_days: u64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("RPL_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .add_source(config::Config::try_from(&Config::default())?)
            .set_override("environment", environment.clone())?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (RPL_ prefix)
            .add_source(
                Environment::with_prefix("RPL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that are only acceptable during development
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.environment == "production" && self.jwt.secret == DEVELOPMENT_JWT_SECRET {
            return Err(ConfigError::Message(
                "jwt.secret must be set in production".to_string(),
            ));
        }
        if self.database.min_connections > self.database.max_connections {
            return Err(ConfigError::Message(
                "database.min_connections exceeds database.max_connections".to_string(),
            ));
        }
        Ok(())
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            log_format: "pretty".to_string(),
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            jwt: JwtConfig {
                secret: DEVELOPMENT_JWT_SECRET.to_string(),
            },
            reports: ReportsConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost/replenishment".to_string(),
            max_connections: 10,
            min_connections: 2,
            acquire_timeout_secs: 30,
            run_migrations: false,
            tables: TablesConfig::default(),
        }
    }
}

impl Default for TablesConfig {
    fn default() -> Self {
        Self {
            bin: "bin".to_string(),
            item: "item".to_string(),
            item_supplier: "item_supplier".to_string(),
        }
    }
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            default_kind: ReportKind::SupplyNeeds,
            notify_duplicates: true,
            order_lead_days: DEFAULT_LEAD_DAYS,
        }
    }
}

//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `EXEC_SKILLS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use executive_skills::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod assessment;
mod database;
mod email;
mod error;
mod server;
mod sheets;

pub use assessment::AssessmentConfig;
pub use database::DatabaseConfig;
pub use email::EmailConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use sheets::SheetsConfig;

use serde::Deserialize;

/// Unprefixed variables accepted as fallbacks for their prefixed counterparts.
const LEGACY_ENV_KEYS: [(&str, &str); 3] = [
    ("DATABASE_URL", "database.url"),
    ("RESEND_API_KEY", "email.resend_api_key"),
    ("GOOGLE_SHEETS_WEBHOOK_URL", "sheets.webhook_url"),
];

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// in-memory service with email and spreadsheet delivery disabled.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Email configuration (Resend)
    #[serde(default)]
    pub email: EmailConfig,

    /// Spreadsheet webhook configuration
    #[serde(default)]
    pub sheets: SheetsConfig,

    /// Assessment defaults
    #[serde(default)]
    pub assessment: AssessmentConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Seeds defaults from `DATABASE_URL`, `RESEND_API_KEY` and
    ///    `GOOGLE_SHEETS_WEBHOOK_URL` when set
    /// 3. Reads environment variables with `EXEC_SKILLS` prefix
    /// 4. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `EXEC_SKILLS__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `EXEC_SKILLS__EMAIL__RESEND_API_KEY=...` -> `email.resend_api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        for (var, key) in LEGACY_ENV_KEYS {
            if let Ok(value) = std::env::var(var) {
                builder = builder.set_default(key, value)?;
            }
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("EXEC_SKILLS")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.email.validate()?;
        self.sheets.validate()?;
        self.assessment.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

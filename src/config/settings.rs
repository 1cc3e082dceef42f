//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub registration: RegistrationConfig,
    pub uploads: UploadsConfig,
    pub sms: SmsConfig,
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Which storage adapter variant backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    Postgres,
}

/// Storage selection configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    pub backend: StorageBackend,
}

/// Database configuration (used by the postgres backend)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Admin authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_minutes: i64,
    pub admin_username: String,
    pub admin_password: String,
}

/// Exam registration configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistrationConfig {
    /// Four-digit year stamped onto seat numbers.
    pub exam_year: u16,
    /// Hard cutoff for candidate registration.
    pub deadline: DateTime<Utc>,
}

/// Upload storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadsConfig {
    pub dir: String,
    pub max_file_bytes: u64,
}

/// SMS gateway configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmsConfig {
    pub gateway_url: String,
    pub sender_id: String,
    pub timeout_seconds: u64,
    /// When set, no network traffic is produced and every dispatch is
    /// reported as accepted.
    pub demo_mode: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("SCIQUEST").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::AppError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            storage: StorageConfig {
                backend: StorageBackend::Memory,
            },
            database: DatabaseConfig {
                url: "postgresql://localhost/sciquest".to_string(),
                max_connections: 10,
                min_connections: 1,
            },
            auth: AuthConfig {
                jwt_secret: "development-only-secret".to_string(),
                token_ttl_minutes: 60,
                admin_username: "admin".to_string(),
                admin_password: "admin".to_string(),
            },
            registration: RegistrationConfig {
                exam_year: 2026,
                deadline: Utc.with_ymd_and_hms(2026, 9, 30, 23, 59, 59).unwrap(),
            },
            uploads: UploadsConfig {
                dir: "uploads".to_string(),
                max_file_bytes: 5 * 1024 * 1024,
            },
            sms: SmsConfig {
                gateway_url: "https://sms.gateway.example/send".to_string(),
                sender_id: "SCIQST".to_string(),
                timeout_seconds: 5,
                demo_mode: true,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "logs".to_string(),
            },
        }
    }
}

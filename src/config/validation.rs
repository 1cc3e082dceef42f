//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use super::settings::StorageBackend;
use super::Settings;
use crate::utils::errors::AppError;

type Result<T> = std::result::Result<T, AppError>;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_database_config(settings)?;
    validate_auth_config(&settings.auth)?;
    validate_registration_config(&settings.registration)?;
    validate_uploads_config(&settings.uploads)?;
    validate_sms_config(&settings.sms)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate server configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.host.is_empty() {
        return Err(AppError::Config("Server host is required".to_string()));
    }

    if config.port == 0 {
        return Err(AppError::Config("Server port must be non-zero".to_string()));
    }

    Ok(())
}

/// Validate database configuration when the postgres backend is selected
fn validate_database_config(settings: &Settings) -> Result<()> {
    if settings.storage.backend != StorageBackend::Postgres {
        return Ok(());
    }

    let config = &settings.database;
    if config.url.is_empty() {
        return Err(AppError::Config("Database URL is required".to_string()));
    }

    if config.max_connections == 0 {
        return Err(AppError::Config(
            "Max connections must be greater than 0".to_string(),
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(AppError::Config(
            "Min connections cannot be greater than max connections".to_string(),
        ));
    }

    Ok(())
}

/// Validate admin authentication configuration
fn validate_auth_config(config: &super::AuthConfig) -> Result<()> {
    if config.jwt_secret.len() < 16 {
        return Err(AppError::Config(
            "JWT secret must be at least 16 characters".to_string(),
        ));
    }

    if config.token_ttl_minutes <= 0 {
        return Err(AppError::Config(
            "Token TTL must be greater than 0".to_string(),
        ));
    }

    if config.admin_username.is_empty() || config.admin_password.is_empty() {
        return Err(AppError::Config(
            "Admin username and password are required".to_string(),
        ));
    }

    Ok(())
}

/// Validate registration configuration
fn validate_registration_config(config: &super::RegistrationConfig) -> Result<()> {
    if !(2000..=2100).contains(&config.exam_year) {
        return Err(AppError::Config(format!(
            "Exam year out of range: {}",
            config.exam_year
        )));
    }

    Ok(())
}

/// Validate upload storage configuration
fn validate_uploads_config(config: &super::UploadsConfig) -> Result<()> {
    if config.dir.is_empty() {
        return Err(AppError::Config("Upload directory is required".to_string()));
    }

    if config.max_file_bytes == 0 {
        return Err(AppError::Config(
            "Max upload size must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate SMS gateway configuration
fn validate_sms_config(config: &super::SmsConfig) -> Result<()> {
    if !config.demo_mode && config.gateway_url.is_empty() {
        return Err(AppError::Config(
            "SMS gateway URL is required unless demo mode is enabled".to_string(),
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(AppError::Config(
            "SMS timeout must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(AppError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(AppError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_short_jwt_secret_is_rejected() {
        let mut settings = Settings::default();
        settings.auth.jwt_secret = "short".to_string();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_database_url_only_required_for_postgres() {
        let mut settings = Settings::default();
        settings.database.url = String::new();
        assert!(validate_settings(&settings).is_ok());

        settings.storage.backend = StorageBackend::Postgres;
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_live_sms_requires_gateway_url() {
        let mut settings = Settings::default();
        settings.sms.demo_mode = false;
        settings.sms.gateway_url = String::new();
        assert!(validate_settings(&settings).is_err());
    }
}

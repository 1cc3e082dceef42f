//! Configuration module
//!
//! Settings are loaded once at startup and passed into services explicitly.

pub mod settings;
pub mod validation;

pub use settings::{
    AuthConfig, DatabaseConfig, LoggingConfig, RegistrationConfig, ServerConfig, Settings,
    SmsConfig, StorageBackend, StorageConfig, UploadsConfig,
};

//! SciQuest registration backend
//!
//! Backend service for a youth science-competition program: public contact
//! and exam-registration intake, the school → mentor → candidate enrollment
//! pipeline with document uploads, and admin operations (login, dashboard,
//! hall-ticket issuance, SMS broadcast).

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use state::AppState;
pub use utils::errors::{AppError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

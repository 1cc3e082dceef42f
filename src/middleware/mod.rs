//! Middleware module

pub mod auth;
pub mod logging;

pub use auth::require_admin;
pub use logging::log_requests;

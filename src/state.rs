//! Shared application state
//!
//! Built once at startup and cloned into every handler through the router.
//! Storage selection happens here, not at module load, so tests can build a
//! state around any storage implementation.

use std::sync::Arc;

use crate::config::Settings;
use crate::services::ServiceFactory;
use crate::storage::{self, Storage};
use crate::utils::errors::Result;

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub storage: Arc<dyn Storage>,
    pub services: ServiceFactory,
}

impl AppState {
    /// Build state around the storage backend selected by configuration.
    pub async fn new(settings: Settings) -> Result<Self> {
        let storage = storage::build_storage(&settings).await?;
        Self::with_storage(settings, storage)
    }

    /// Build state around an explicit storage implementation.
    pub fn with_storage(settings: Settings, storage: Arc<dyn Storage>) -> Result<Self> {
        let services = ServiceFactory::new(settings.clone(), storage.clone())?;

        Ok(Self {
            settings,
            storage,
            services,
        })
    }
}

use std::sync::{Arc, Mutex};

use teatro_core::{
    CatalogStore, Config, Identity, SanitizedConfig, Session, StorefrontApi, ViewCache,
};

/// Shared application state
pub struct AppState {
    config: Config,
    store: CatalogStore,
    session: Box<dyn Session>,
    api: Option<Arc<dyn StorefrontApi>>,
    views: Mutex<ViewCache>,
}

impl AppState {
    pub fn new(
        config: Config,
        store: CatalogStore,
        session: Box<dyn Session>,
        api: Option<Arc<dyn StorefrontApi>>,
    ) -> Self {
        Self {
            config,
            store,
            session,
            api,
            views: Mutex::new(ViewCache::new()),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn identity(&self) -> Option<Identity> {
        self.session.current()
    }

    /// Present only when the catalog comes from the REST API.
    pub fn api(&self) -> Option<&Arc<dyn StorefrontApi>> {
        self.api.as_ref()
    }

    pub fn views(&self) -> std::sync::MutexGuard<'_, ViewCache> {
        self.views.lock().unwrap_or_else(|e| e.into_inner())
    }
}

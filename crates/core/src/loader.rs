//! Catalog loading with a stale-response guard.
//!
//! Each [`CatalogLoader::reload`] takes a ticket. A response is applied only
//! if its ticket is still the newest one issued, so a slow reload that
//! finishes after a faster, later one is discarded instead of rolling the
//! catalog back.

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::api::{assemble_categories, ApiError, StorefrontApi};
use crate::catalog::{CatalogDocument, CatalogStore, Category};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Failed to read catalog fixture {path}: {message}")]
    Fixture { path: String, message: String },
}

/// Dismissible error notice with a retry affordance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub message: String,
    pub retryable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(Notice),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The store now holds this snapshot version.
    Applied { version: u64 },
    /// A newer reload started while this one was in flight.
    Superseded,
}

/// Fills a [`CatalogStore`] from the storefront API.
pub struct CatalogLoader {
    store: CatalogStore,
    api: Arc<dyn StorefrontApi>,
    latest_ticket: AtomicU64,
    status: RwLock<LoadStatus>,
}

impl CatalogLoader {
    pub fn new(store: CatalogStore, api: Arc<dyn StorefrontApi>) -> Self {
        Self {
            store,
            api,
            latest_ticket: AtomicU64::new(0),
            status: RwLock::new(LoadStatus::Idle),
        }
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub async fn status(&self) -> LoadStatus {
        self.status.read().await.clone()
    }

    /// Fetch everything and swap in a fresh snapshot.
    ///
    /// On failure the previous snapshot stays in place and the status
    /// carries a retryable notice. A failure of a superseded reload is
    /// dropped silently.
    pub async fn reload(&self) -> Result<LoadOutcome, LoadError> {
        let ticket = self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1;
        *self.status.write().await = LoadStatus::Loading;
        debug!(ticket, "Catalog reload started");

        let api = &self.api;
        let fetched = futures::try_join!(
            api.list_videos(),
            api.list_categories(),
            api.list_collaborators(),
            async { Ok::<_, ApiError>(api.admin_config().await) },
        );

        let mut status = self.status.write().await;
        if ticket != self.latest_ticket.load(Ordering::SeqCst) {
            warn!(ticket, "Discarding superseded catalog response");
            return Ok(LoadOutcome::Superseded);
        }

        let (videos, categories, collaborators, admin_config) = match fetched {
            Ok(parts) => parts,
            Err(e) => {
                warn!("Catalog reload failed: {}", e);
                *status = LoadStatus::Failed(Notice {
                    message: e.user_message(),
                    retryable: true,
                });
                return Err(e.into());
            }
        };

        let admin_config = match admin_config {
            Ok(config) => Some(config),
            Err(e) => {
                warn!("Admin config unavailable, featured falls back to ratings: {}", e);
                None
            }
        };

        let assembled = assemble_categories(
            &categories,
            &videos,
            &collaborators,
            admin_config.as_ref(),
        );
        let version = self.store.replace(assembled);
        *status = LoadStatus::Ready;
        info!(ticket, version, "Catalog reload applied");

        Ok(LoadOutcome::Applied { version })
    }

    /// Same as [`CatalogLoader::reload`]; the notice's retry action.
    pub async fn retry(&self) -> Result<LoadOutcome, LoadError> {
        self.reload().await
    }

    /// Hide the error notice. The status returns to `Ready` when a
    /// snapshot was loaded before, `Idle` otherwise.
    pub async fn dismiss_notice(&self) {
        let mut status = self.status.write().await;
        if matches!(*status, LoadStatus::Failed(_)) {
            *status = if self.store.snapshot().version() > 0 {
                LoadStatus::Ready
            } else {
                LoadStatus::Idle
            };
        }
    }
}

/// Read a catalog document (`{ "categories": [...] }`) from disk.
pub fn load_fixture(path: &Path) -> Result<Vec<Category>, LoadError> {
    let fixture_error = |message: String| LoadError::Fixture {
        path: path.display().to_string(),
        message,
    };

    let raw = std::fs::read_to_string(path).map_err(|e| fixture_error(e.to_string()))?;
    let document: CatalogDocument =
        serde_json::from_str(&raw).map_err(|e| fixture_error(e.to_string()))?;

    info!(
        "Loaded {} categories from {}",
        document.categories.len(),
        path.display()
    );
    Ok(document.categories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AgeRating;
    use crate::testing::MockStorefrontApi;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_reload_applies_snapshot() {
        let api = Arc::new(MockStorefrontApi::with_demo_data());
        let loader = CatalogLoader::new(CatalogStore::empty(), api.clone());

        let outcome = loader.reload().await.unwrap();
        assert_eq!(outcome, LoadOutcome::Applied { version: 1 });
        assert_eq!(loader.status().await, LoadStatus::Ready);
        assert!(!loader.store().snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_failure_sets_notice_and_keeps_snapshot() {
        let api = Arc::new(MockStorefrontApi::with_demo_data());
        let loader = CatalogLoader::new(CatalogStore::empty(), api.clone());
        loader.reload().await.unwrap();

        api.set_next_error(ApiError::Status {
            status: 503,
            message: "Service Unavailable".to_string(),
        })
        .await;
        let result = loader.reload().await;
        assert!(matches!(result, Err(LoadError::Api(ApiError::Status { status: 503, .. }))));

        assert_eq!(
            loader.status().await,
            LoadStatus::Failed(Notice {
                message: "Service Unavailable".to_string(),
                retryable: true,
            })
        );
        assert_eq!(loader.store().snapshot().version(), 1);

        loader.dismiss_notice().await;
        assert_eq!(loader.status().await, LoadStatus::Ready);

        let outcome = loader.retry().await.unwrap();
        assert_eq!(outcome, LoadOutcome::Applied { version: 2 });
    }

    #[tokio::test]
    async fn test_admin_config_failure_is_not_fatal() {
        let api = Arc::new(MockStorefrontApi::with_demo_data());
        api.set_admin_config(None).await;
        let loader = CatalogLoader::new(CatalogStore::empty(), api);

        let outcome = loader.reload().await.unwrap();
        assert!(matches!(outcome, LoadOutcome::Applied { .. }));

        let snapshot = loader.store().snapshot();
        let flagged = snapshot
            .categories()
            .iter()
            .flat_map(|c| c.movies.iter())
            .filter(|m| m.is_featured.is_some())
            .count();
        assert_eq!(flagged, 0);
    }

    #[test]
    fn test_load_fixture() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"categories":[{{"id":"cat-drama","name":"Drama","movies":[
                {{"id":"m-1","title":"One","ageRating":"M/12","price":9,"createdAt":"2025-01-01"}}
            ]}}]}}"#
        )
        .unwrap();

        let categories = load_fixture(file.path()).unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].movies[0].price, 9.0);
    }

    #[test]
    fn test_load_fixture_tolerates_null_and_unknown_fields() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"categories":[{{"id":"cat-drama","name":"Drama","movies":[
                {{"id":"m-1","title":"One","ageRating":"M/99","price":9,"createdAt":null}},
                {{"id":"m-2","title":"Two","description":null,"posterUrl":null,"rating":null}}
            ]}}]}}"#
        )
        .unwrap();

        let categories = load_fixture(file.path()).unwrap();
        let movies = &categories[0].movies;
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].age_rating, AgeRating::L);
        assert!(movies[0].created_at_millis().is_none());
        assert_eq!(movies[1].description, "");
        assert_eq!(movies[1].rating, 0.0);
    }

    #[test]
    fn test_load_fixture_errors() {
        let missing = load_fixture(Path::new("/nonexistent/catalog.json"));
        assert!(matches!(missing, Err(LoadError::Fixture { .. })));

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(load_fixture(file.path()), Err(LoadError::Fixture { .. })));
    }
}

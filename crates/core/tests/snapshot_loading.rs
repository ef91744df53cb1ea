//! Loader behaviour against the mock API, including out-of-order responses.

use std::sync::Arc;
use std::time::Duration;

use teatro_core::api::ApiError;
use teatro_core::testing::{MockStorefrontApi, RecordedApiCall};
use teatro_core::{CatalogLoader, CatalogStore, LoadError, LoadOutcome, LoadStatus};

#[tokio::test]
async fn test_reload_fetches_every_list() {
    let api = Arc::new(MockStorefrontApi::with_demo_data());
    let loader = CatalogLoader::new(CatalogStore::empty(), api.clone());

    loader.reload().await.unwrap();

    let mut calls = api.recorded_calls().await;
    calls.sort_by_key(|c| format!("{:?}", c));
    assert_eq!(
        calls,
        vec![
            RecordedApiCall::AdminConfig,
            RecordedApiCall::ListCategories,
            RecordedApiCall::ListCollaborators,
            RecordedApiCall::ListVideos,
        ]
    );

    let snapshot = loader.store().snapshot();
    assert_eq!(snapshot.categories()[0].name, "Drama");
    let first = snapshot.get_movie_by_id("16").unwrap();
    assert_eq!(first.is_featured, Some(true));
    assert_eq!(first.collaborators.len(), 2);
    assert_eq!(snapshot.get_movie_by_id("17").unwrap().is_featured, Some(false));
}

#[tokio::test]
async fn test_stale_response_is_discarded() {
    let api = Arc::new(MockStorefrontApi::with_demo_data());
    let loader = CatalogLoader::new(CatalogStore::empty(), api.clone());

    api.set_delay(Some(Duration::from_millis(200))).await;

    let slow = loader.reload();
    let fast = async {
        tokio::time::sleep(Duration::from_millis(20)).await;
        api.set_delay(None).await;
        loader.reload().await
    };

    let (slow, fast) = tokio::join!(slow, fast);
    assert_eq!(fast.unwrap(), LoadOutcome::Applied { version: 1 });
    assert_eq!(slow.unwrap(), LoadOutcome::Superseded);
    assert_eq!(loader.store().snapshot().version(), 1);
    assert_eq!(loader.status().await, LoadStatus::Ready);
}

#[tokio::test]
async fn test_failed_reload_keeps_previous_snapshot() {
    let api = Arc::new(MockStorefrontApi::with_demo_data());
    let store = CatalogStore::empty();
    let loader = CatalogLoader::new(store.clone(), api.clone());
    loader.reload().await.unwrap();
    let before = store.snapshot();

    api.set_next_error(ApiError::Status {
        status: 500,
        message: String::new(),
    })
    .await;
    let err = loader.reload().await.unwrap_err();
    assert!(matches!(err, LoadError::Api(_)));

    let after = store.snapshot();
    assert!(Arc::ptr_eq(&before, &after));
    assert!(matches!(loader.status().await, LoadStatus::Failed(ref n) if n.retryable));

    assert!(matches!(
        loader.retry().await.unwrap(),
        LoadOutcome::Applied { version: 2 }
    ));
}

#[tokio::test]
async fn test_failure_before_first_load_dismisses_to_idle() {
    let api = Arc::new(MockStorefrontApi::with_demo_data());
    let loader = CatalogLoader::new(CatalogStore::empty(), api.clone());

    api.set_next_error(ApiError::Parse("truncated body".to_string())).await;
    assert!(loader.reload().await.is_err());
    assert!(loader.store().snapshot().is_empty());

    loader.dismiss_notice().await;
    assert_eq!(loader.status().await, LoadStatus::Idle);
}

#[test]
fn test_bundled_catalog_matches_demo_fixture() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../catalog.json");
    let categories = teatro_core::load_fixture(&path).unwrap();
    assert_eq!(categories, teatro_core::testing::fixtures::demo_catalog());
}

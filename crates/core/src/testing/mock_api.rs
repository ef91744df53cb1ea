//! Mock storefront API for testing.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use super::fixtures;
use crate::api::{
    AdminConfigResponse, ApiError, CollaboratorResponse, PurchaseResponse, StorefrontApi,
    StreamingVideoResponse, VideoCategoryResponse,
};

/// A recorded API call for test assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordedApiCall {
    ListVideos,
    ListCategories,
    ListCollaborators,
    AdminConfig,
    MyPurchases,
    MyActivePurchases,
}

/// Mock implementation of the StorefrontApi trait.
///
/// Provides controllable behavior for testing:
/// - Return configurable list responses
/// - Track calls for assertions
/// - Simulate failures and slow responses
#[derive(Debug, Clone)]
pub struct MockStorefrontApi {
    videos: Arc<RwLock<Vec<StreamingVideoResponse>>>,
    categories: Arc<RwLock<Vec<VideoCategoryResponse>>>,
    collaborators: Arc<RwLock<Vec<CollaboratorResponse>>>,
    /// `None` makes `admin_config` answer 404.
    admin_config: Arc<RwLock<Option<AdminConfigResponse>>>,
    purchases: Arc<RwLock<Vec<PurchaseResponse>>>,
    active_purchases: Arc<RwLock<Vec<PurchaseResponse>>>,
    calls: Arc<RwLock<Vec<RecordedApiCall>>>,
    /// If set, the next operation will fail with this error.
    next_error: Arc<RwLock<Option<ApiError>>>,
    /// Applied to every call made while it is set.
    delay: Arc<RwLock<Option<Duration>>>,
}

impl Default for MockStorefrontApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MockStorefrontApi {
    /// Create a mock that answers every list with nothing.
    pub fn new() -> Self {
        Self {
            videos: Arc::new(RwLock::new(Vec::new())),
            categories: Arc::new(RwLock::new(Vec::new())),
            collaborators: Arc::new(RwLock::new(Vec::new())),
            admin_config: Arc::new(RwLock::new(Some(AdminConfigResponse::default()))),
            purchases: Arc::new(RwLock::new(Vec::new())),
            active_purchases: Arc::new(RwLock::new(Vec::new())),
            calls: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
            delay: Arc::new(RwLock::new(None)),
        }
    }

    /// Create a mock serving the demo catalog.
    pub fn with_demo_data() -> Self {
        Self {
            videos: Arc::new(RwLock::new(fixtures::demo_api_videos())),
            categories: Arc::new(RwLock::new(fixtures::demo_api_categories())),
            collaborators: Arc::new(RwLock::new(fixtures::demo_api_collaborators())),
            admin_config: Arc::new(RwLock::new(Some(fixtures::demo_api_admin_config()))),
            ..Self::new()
        }
    }

    // =========================================================================
    // Response Configuration
    // =========================================================================

    pub async fn set_videos(&self, videos: Vec<StreamingVideoResponse>) {
        *self.videos.write().await = videos;
    }

    pub async fn set_categories(&self, categories: Vec<VideoCategoryResponse>) {
        *self.categories.write().await = categories;
    }

    pub async fn set_collaborators(&self, collaborators: Vec<CollaboratorResponse>) {
        *self.collaborators.write().await = collaborators;
    }

    pub async fn set_admin_config(&self, config: Option<AdminConfigResponse>) {
        *self.admin_config.write().await = config;
    }

    pub async fn set_purchases(&self, all: Vec<PurchaseResponse>, active: Vec<PurchaseResponse>) {
        *self.purchases.write().await = all;
        *self.active_purchases.write().await = active;
    }

    /// Delay every subsequent call by `delay`.
    pub async fn set_delay(&self, delay: Option<Duration>) {
        *self.delay.write().await = delay;
    }

    // =========================================================================
    // Call Recording
    // =========================================================================

    /// Get all recorded calls.
    pub async fn recorded_calls(&self) -> Vec<RecordedApiCall> {
        self.calls.read().await.clone()
    }

    /// Get the number of calls performed.
    pub async fn call_count(&self) -> usize {
        self.calls.read().await.len()
    }

    // =========================================================================
    // Error Injection
    // =========================================================================

    /// Configure the next operation to fail with the given error.
    pub async fn set_next_error(&self, error: ApiError) {
        *self.next_error.write().await = Some(error);
    }

    /// Clear any pending error.
    pub async fn clear_next_error(&self) {
        *self.next_error.write().await = None;
    }

    /// Shared prologue of every call: record, fail if armed, then wait.
    async fn begin(&self, call: RecordedApiCall) -> Result<(), ApiError> {
        let delay = *self.delay.read().await;
        self.calls.write().await.push(call);

        if let Some(err) = self.next_error.write().await.take() {
            return Err(err);
        }
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        Ok(())
    }
}

#[async_trait]
impl StorefrontApi for MockStorefrontApi {
    async fn list_videos(&self) -> Result<Vec<StreamingVideoResponse>, ApiError> {
        self.begin(RecordedApiCall::ListVideos).await?;
        Ok(self.videos.read().await.clone())
    }

    async fn list_categories(&self) -> Result<Vec<VideoCategoryResponse>, ApiError> {
        self.begin(RecordedApiCall::ListCategories).await?;
        Ok(self.categories.read().await.clone())
    }

    async fn list_collaborators(&self) -> Result<Vec<CollaboratorResponse>, ApiError> {
        self.begin(RecordedApiCall::ListCollaborators).await?;
        Ok(self.collaborators.read().await.clone())
    }

    async fn admin_config(&self) -> Result<AdminConfigResponse, ApiError> {
        self.begin(RecordedApiCall::AdminConfig).await?;
        self.admin_config
            .read()
            .await
            .clone()
            .ok_or_else(|| ApiError::Status {
                status: 404,
                message: "Admin config not found".to_string(),
            })
    }

    async fn my_purchases(&self) -> Result<Vec<PurchaseResponse>, ApiError> {
        self.begin(RecordedApiCall::MyPurchases).await?;
        Ok(self.purchases.read().await.clone())
    }

    async fn my_active_purchases(&self) -> Result<Vec<PurchaseResponse>, ApiError> {
        self.begin(RecordedApiCall::MyActivePurchases).await?;
        Ok(self.active_purchases.read().await.clone())
    }
}

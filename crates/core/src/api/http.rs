//! reqwest-backed [`StorefrontApi`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::types::{
    AdminConfigResponse, CollaboratorResponse, PurchaseResponse, StreamingVideoResponse,
    VideoCategoryResponse,
};
use super::{ApiError, StorefrontApi, DEFAULT_ERROR_MESSAGE};
use crate::config::ApiConfig;

/// Storefront API client.
pub struct HttpStorefrontApi {
    client: Client,
    base_url: String,
    access_token: Option<String>,
}

impl HttpStorefrontApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ApiError::NotConfigured(
                "API base URL is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_secs)))
            .build()?;

        Ok(Self {
            client,
            base_url,
            access_token: config.access_token.clone().filter(|t| !t.is_empty()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a JSON resource. `204 No Content` yields `T::default()`.
    async fn get_json<T: DeserializeOwned + Default>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("Storefront API GET {}", url);

        let mut request = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = &self.access_token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: parse_error_body(&content_type, &body),
            });
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(T::default());
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| ApiError::Parse(format!("Failed to parse {} response: {}", path, e)))
    }
}

/// Extract a user-facing message from an error response.
///
/// JSON bodies contribute their string `message`, then their string
/// `error`. Other bodies contribute their trimmed text.
pub fn parse_error_body(content_type: &str, body: &str) -> String {
    let message = if content_type.contains("application/json") {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|json| {
                ["message", "error"].iter().find_map(|key| {
                    json.get(*key)
                        .and_then(|v| v.as_str())
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                })
            })
    } else {
        Some(body.trim().to_string()).filter(|s| !s.is_empty())
    };

    message.unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string())
}

#[async_trait]
impl StorefrontApi for HttpStorefrontApi {
    async fn list_videos(&self) -> Result<Vec<StreamingVideoResponse>, ApiError> {
        self.get_json("/streaming-videos").await
    }

    async fn list_categories(&self) -> Result<Vec<VideoCategoryResponse>, ApiError> {
        self.get_json("/video-categories").await
    }

    async fn list_collaborators(&self) -> Result<Vec<CollaboratorResponse>, ApiError> {
        self.get_json("/collaborators").await
    }

    async fn admin_config(&self) -> Result<AdminConfigResponse, ApiError> {
        self.get_json("/admin-config").await
    }

    async fn my_purchases(&self) -> Result<Vec<PurchaseResponse>, ApiError> {
        self.get_json("/purchases/me").await
    }

    async fn my_active_purchases(&self) -> Result<Vec<PurchaseResponse>, ApiError> {
        self.get_json("/purchases/me/active").await
    }
}

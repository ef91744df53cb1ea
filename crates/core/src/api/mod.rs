//! Client for the storefront REST API.
//!
//! The API is the production source of catalog data. Only the read
//! endpoints the catalog needs are modelled here.

mod assemble;
mod http;
mod types;

pub use assemble::assemble_categories;
pub use http::{parse_error_body, HttpStorefrontApi};
pub use types::*;

use async_trait::async_trait;
use thiserror::Error;

/// Shown when the API gives no usable error message.
pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Errors that can occur when talking to the storefront API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response.
    #[error("API error: {status} - {message}")]
    Status { status: u16, message: String },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Client not configured (missing base URL, etc.).
    #[error("Client not configured: {0}")]
    NotConfigured(String),
}

impl ApiError {
    /// Message suitable for the dismissible error notice.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            _ => DEFAULT_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Read side of the storefront API.
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// `GET /streaming-videos`
    async fn list_videos(&self) -> Result<Vec<StreamingVideoResponse>, ApiError>;

    /// `GET /video-categories`
    async fn list_categories(&self) -> Result<Vec<VideoCategoryResponse>, ApiError>;

    /// `GET /collaborators`
    async fn list_collaborators(&self) -> Result<Vec<CollaboratorResponse>, ApiError>;

    /// `GET /admin-config`, the editorial highlights.
    async fn admin_config(&self) -> Result<AdminConfigResponse, ApiError>;

    /// `GET /purchases/me`
    async fn my_purchases(&self) -> Result<Vec<PurchaseResponse>, ApiError>;

    /// `GET /purchases/me/active`
    async fn my_active_purchases(&self) -> Result<Vec<PurchaseResponse>, ApiError>;
}

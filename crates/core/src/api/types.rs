//! Wire types of the storefront API (camelCase JSON).

use serde::{Deserialize, Serialize};

use crate::catalog::{null_as_default, AgeRating};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamingVideoResponse {
    pub streaming_video_id: u64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub video_url: String,
    #[serde(default)]
    pub video_trailer_url: Option<String>,
    #[serde(default)]
    pub thumb_image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub likes: f64,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub age_rating: AgeRating,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub year: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub collaborator_ids: Vec<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category_ids: Vec<u64>,
    /// Not every backend revision sends it.
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoCategoryResponse {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaboratorResponse {
    pub collaborator_id: u64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default)]
    pub social_media: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// Editorial highlights picked in the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminConfigResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub destaque_video_ids: Vec<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub destaque_trailer_video_ids: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseResponse {
    pub purchase_id: u64,
    pub purchased_at: String,
    pub streaming_video: PurchasedVideo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasedVideo {
    #[serde(alias = "id")]
    pub streaming_video_id: u64,
    pub name: String,
    #[serde(default)]
    pub thumb_image: Option<String>,
}

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub api: Option<ApiConfig>,
    #[serde(default)]
    pub rows: RowsConfig,
    #[serde(default)]
    pub rental: RentalConfig,
    #[serde(default)]
    pub session: Option<SessionConfig>,
}

/// Where the catalog snapshot comes from.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub kind: SourceKind,
    /// JSON document with `{ "categories": [...] }` (fixture kind only).
    #[serde(default = "default_fixture_path")]
    pub fixture_path: PathBuf,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::default(),
            fixture_path: default_fixture_path(),
        }
    }
}

fn default_fixture_path() -> PathBuf {
    PathBuf::from("catalog.json")
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    #[default]
    Fixture,
    Api,
}

/// REST API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// API base URL (e.g., "https://api.teatrolisboa.pt")
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
    /// Bearer token sent with every request
    #[serde(default)]
    pub access_token: Option<String>,
}

fn default_timeout() -> u32 {
    30
}

/// Horizontal row tuning
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
pub struct RowsConfig {
    /// Slack at the scroll extremes, in pixels.
    #[serde(default = "default_tolerance_px")]
    pub tolerance_px: f64,
    /// Fraction of the viewport width moved per step.
    #[serde(default = "default_step_ratio")]
    pub step_ratio: f64,
    #[serde(default = "default_min_step_px")]
    pub min_step_px: f64,
    #[serde(default = "default_max_step_px")]
    pub max_step_px: f64,
    /// Maximum items rendered in one movie row.
    #[serde(default = "default_row_limit")]
    pub row_limit: usize,
}

impl Default for RowsConfig {
    fn default() -> Self {
        Self {
            tolerance_px: default_tolerance_px(),
            step_ratio: default_step_ratio(),
            min_step_px: default_min_step_px(),
            max_step_px: default_max_step_px(),
            row_limit: default_row_limit(),
        }
    }
}

fn default_tolerance_px() -> f64 {
    2.0
}

fn default_step_ratio() -> f64 {
    0.65
}

fn default_min_step_px() -> f64 {
    300.0
}

fn default_max_step_px() -> f64 {
    560.0
}

fn default_row_limit() -> usize {
    60
}

/// Rental window configuration
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct RentalConfig {
    #[serde(default = "default_window_hours")]
    pub window_hours: u32,
}

impl Default for RentalConfig {
    fn default() -> Self {
        Self {
            window_hours: default_window_hours(),
        }
    }
}

fn default_window_hours() -> u32 {
    24
}

/// Session the headless shell acts as.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    pub user_id: String,
    /// Space separated role list, as carried by the token's `roles` claim.
    #[serde(default)]
    pub roles: String,
}

/// Sanitized config for logging (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub source: SourceConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<SanitizedApiConfig>,
    pub rows: RowsConfig,
    pub rental: RentalConfig,
    pub session_configured: bool,
}

/// Sanitized API config (token hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedApiConfig {
    pub base_url: String,
    pub timeout_secs: u32,
    pub access_token_configured: bool,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            source: config.source.clone(),
            api: config.api.as_ref().map(|api| SanitizedApiConfig {
                base_url: api.base_url.clone(),
                timeout_secs: api.timeout_secs,
                access_token_configured: api
                    .access_token
                    .as_ref()
                    .is_some_and(|t| !t.is_empty()),
            }),
            rows: config.rows,
            rental: config.rental,
            session_configured: config.session.is_some(),
        }
    }
}

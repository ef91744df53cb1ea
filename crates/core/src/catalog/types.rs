//! Types for the storefront catalog.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

/// A rentable filmed-theatre title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Release year.
    #[serde(default, deserialize_with = "null_as_default")]
    pub year: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration_min: u32,
    /// Only used as a tie-break / fallback signal.
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub poster_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailer_url: Option<String>,
    #[serde(default)]
    pub age_rating: AgeRating,
    /// Price in euros.
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    /// ISO 8601 timestamp, used for recency ordering.
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    /// Picked for the trailer showcase.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_trailer_featured: Option<bool>,
    /// Crew and cast in display order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub collaborators: Vec<Collaborator>,
}

impl Movie {
    /// Creation time in epoch milliseconds, `None` when unparsable.
    pub fn created_at_millis(&self) -> Option<i64> {
        parse_timestamp(&self.created_at).map(|t| t.timestamp_millis())
    }

    /// Only an explicit `true` flag counts.
    pub fn is_flagged_featured(&self) -> bool {
        matches!(self.is_featured, Some(true))
    }

    /// The trailer URL, unless it is blank.
    pub fn trailer(&self) -> Option<&str> {
        self.trailer_url.as_deref().filter(|url| !url.trim().is_empty())
    }
}

/// A crew or cast entry of a movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collaborator {
    pub id: String,
    pub name: String,
    /// Role label (e.g., "Direção", "Interpretação").
    #[serde(default, alias = "functionOnMovie", deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, alias = "socialUrl", skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
}

/// A named grouping of movies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Membership, in curation order. A movie may be listed in several categories.
    #[serde(default, deserialize_with = "null_as_default")]
    pub movies: Vec<Movie>,
}

/// The catalog input document: `{ "categories": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<Category>,
}

/// Age classification.
///
/// The public site spells ratings `M/12`, the admin backend `M12`; both are
/// accepted and the public spelling is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AgeRating {
    #[default]
    L,
    M3,
    M6,
    M12,
    M14,
    M16,
    M18,
}

impl AgeRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeRating::L => "L",
            AgeRating::M3 => "M/3",
            AgeRating::M6 => "M/6",
            AgeRating::M12 => "M/12",
            AgeRating::M14 => "M/14",
            AgeRating::M16 => "M/16",
            AgeRating::M18 => "M/18",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let compact: String = value
            .trim()
            .chars()
            .filter(|c| *c != '/')
            .collect::<String>()
            .to_uppercase();

        match compact.as_str() {
            "L" => Some(AgeRating::L),
            "M3" => Some(AgeRating::M3),
            "M6" => Some(AgeRating::M6),
            "M12" => Some(AgeRating::M12),
            "M14" => Some(AgeRating::M14),
            "M16" => Some(AgeRating::M16),
            "M18" => Some(AgeRating::M18),
            _ => None,
        }
    }

    /// Audience label shown on poster cards.
    pub fn audience(&self) -> &'static str {
        match self {
            AgeRating::L => "Famílias",
            AgeRating::M12 => "Adolescentes",
            AgeRating::M16 => "Jovens adultos",
            AgeRating::M18 => "Adultos",
            _ => "Geral",
        }
    }
}

impl fmt::Display for AgeRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AgeRating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Unknown or `null` ratings fall back to `L` so one bad record does not
/// reject the whole catalog.
impl<'de> Deserialize<'de> for AgeRating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(AgeRating::default());
        };
        Ok(AgeRating::parse(&raw).unwrap_or_else(|| {
            warn!("Unknown age rating {:?}, using {}", raw, AgeRating::default());
            AgeRating::default()
        }))
    }
}

/// Read a `null` field the same as a missing one.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse a catalog timestamp.
///
/// Accepts RFC 3339, a bare `YYYY-MM-DDTHH:MM:SS[.fff]` (read as UTC) and a
/// bare `YYYY-MM-DD` (midnight UTC).
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

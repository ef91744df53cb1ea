//! Time-limited rental access.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::PurchaseResponse;
use crate::catalog::parse_timestamp;

const MILLIS_PER_HOUR: i64 = 60 * 60 * 1000;

/// Whole hours of access left, rounded up. An unparsable purchase time
/// gives zero.
pub fn hours_left(purchased_at: &str, now: DateTime<Utc>, window_hours: u32) -> u32 {
    let Some(purchased) = parse_timestamp(purchased_at) else {
        return 0;
    };

    let end = purchased.timestamp_millis() + i64::from(window_hours) * MILLIS_PER_HOUR;
    let remaining = end - now.timestamp_millis();
    if remaining <= 0 {
        return 0;
    }

    let hours = (remaining + MILLIS_PER_HOUR - 1) / MILLIS_PER_HOUR;
    u32::try_from(hours).unwrap_or(u32::MAX)
}

pub fn is_active(purchased_at: &str, now: DateTime<Utc>, window_hours: u32) -> bool {
    hours_left(purchased_at, now, window_hours) > 0
}

/// A purchase as shown on the user dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rental {
    pub purchase_id: u64,
    pub movie_id: String,
    pub title: String,
    pub purchased_at: String,
    pub hours_left: u32,
    pub active: bool,
}

/// Dashboard rows for `purchases`, in API order.
pub fn rentals(
    purchases: &[PurchaseResponse],
    now: DateTime<Utc>,
    window_hours: u32,
) -> Vec<Rental> {
    purchases
        .iter()
        .map(|p| {
            let hours_left = hours_left(&p.purchased_at, now, window_hours);
            Rental {
                purchase_id: p.purchase_id,
                movie_id: p.streaming_video.streaming_video_id.to_string(),
                title: p.streaming_video.name.clone(),
                purchased_at: p.purchased_at.clone(),
                hours_left,
                active: hours_left > 0,
            }
        })
        .collect()
}

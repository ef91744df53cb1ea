//! Derived catalog views.
//!
//! Every function here is pure: same snapshot and inputs, same output. Bad
//! catalog data (unparsable timestamps, NaN ratings, empty categories)
//! degrades to a safe ordering or an empty result instead of failing.

mod search;
mod views;

pub use search::{normalize_for_search, search, SearchOutcome, SEARCH_RESULT_LIMIT};
pub use views::*;

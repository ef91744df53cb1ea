//! Filter state and the URL <-> state policy.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::query::{QueryParams, UrlPatch};
use crate::catalog::Snapshot;

pub const CATEGORY_PARAM: &str = "cat";
pub const PRICE_PARAM: &str = "price";
pub const SEARCH_PARAM: &str = "q";

/// Default browsing tab, shown when no override is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Categories,
    Recent,
    Featured,
}

/// In-memory filter state of the catalog page.
///
/// The tab survives category and price overrides, so clearing an override
/// lands back on whatever tab was active before.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterState {
    pub tab: Tab,
    pub category_id: Option<String>,
    pub price: Option<f64>,
}

/// What the catalog page shows, in precedence order.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewMode {
    /// A category, optionally narrowed to one price.
    CategorySelected {
        category_id: String,
        price: Option<f64>,
    },
    /// One price across the whole catalog.
    PriceSelected { price: f64 },
    Tab(Tab),
}

impl FilterState {
    pub fn mode(&self) -> ViewMode {
        match (&self.category_id, self.price) {
            (Some(category_id), price) => ViewMode::CategorySelected {
                category_id: category_id.clone(),
                price,
            },
            (None, Some(price)) => ViewMode::PriceSelected { price },
            (None, None) => ViewMode::Tab(self.tab),
        }
    }
}

/// A user intent on the catalog page.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterAction {
    SelectCategory(String),
    ClearCategory,
    SelectPrice(f64),
    ClearPrice,
    SelectTab(Tab),
}

/// Reconstruct filter state from the URL.
///
/// `cat` counts only when it names a category of `snapshot`; a valid one
/// also resets the tab to categories. `price` counts only when it parses
/// as a finite number. Anything else reads as absent.
pub fn filter_from_query(
    params: &QueryParams,
    snapshot: &Snapshot,
    previous: &FilterState,
) -> FilterState {
    let mut next = FilterState {
        tab: previous.tab,
        category_id: None,
        price: None,
    };

    if let Some(cat) = params.get(CATEGORY_PARAM).filter(|c| !c.is_empty()) {
        if snapshot.has_category(cat) {
            next.category_id = Some(cat.to_string());
            next.tab = Tab::Categories;
        } else {
            warn!("Ignoring unknown category in URL: {}", cat);
        }
    }

    if let Some(raw) = params.get(PRICE_PARAM).filter(|p| !p.is_empty()) {
        next.price = parse_price(raw);
        if next.price.is_none() {
            warn!("Ignoring unparsable price in URL: {}", raw);
        }
    }

    next
}

/// Apply a user intent. Returns the next state and the URL change it needs.
pub fn apply_action(state: &FilterState, action: FilterAction) -> (FilterState, UrlPatch) {
    let mut next = state.clone();
    let patch = match action {
        FilterAction::SelectCategory(id) => {
            let patch = UrlPatch::set(CATEGORY_PARAM, id.as_str());
            next.category_id = Some(id);
            patch
        }
        FilterAction::ClearCategory => {
            next.category_id = None;
            UrlPatch::remove(CATEGORY_PARAM)
        }
        FilterAction::SelectPrice(price) => {
            next.price = Some(price);
            UrlPatch::set(PRICE_PARAM, format_price(price))
        }
        FilterAction::ClearPrice => {
            next.price = None;
            UrlPatch::remove(PRICE_PARAM)
        }
        FilterAction::SelectTab(tab) => {
            next.tab = tab;
            UrlPatch::default()
        }
    };
    (next, patch)
}

/// Parse a `price` parameter. Only finite numbers count.
pub fn parse_price(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
}

/// Shortest decimal form (`9`, `9.5`).
pub fn format_price(price: f64) -> String {
    price.to_string()
}

/// Link from the pricing summary into the catalog, filtered to one price.
pub fn price_href(price: f64) -> String {
    format!(
        "/movies?{}={}",
        PRICE_PARAM,
        urlencoding::encode(&format_price(price))
    )
}

/// Link to a movie page.
pub fn movie_href(movie_id: &str) -> String {
    format!("/movies/{}", urlencoding::encode(movie_id))
}

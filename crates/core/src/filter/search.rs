//! Search page state, synced with the `q` parameter.

use tracing::debug;

use super::location::Location;
use super::query::{QueryParams, UrlPatch};
use super::state::SEARCH_PARAM;
use crate::catalog::Snapshot;
use crate::derive::{all_movies, search, SearchOutcome};

pub struct SearchController<L: Location> {
    location: L,
    query: String,
}

impl<L: Location> SearchController<L> {
    pub fn mount(location: L) -> Self {
        let query = QueryParams::parse(location.query())
            .get(SEARCH_PARAM)
            .unwrap_or_default()
            .to_string();
        Self { location, query }
    }

    /// Update the query. A blank query removes `q` from the URL.
    pub fn set_query(&mut self, query: &str) {
        let trimmed = query.trim();
        self.query = query.to_string();

        let patch = if trimmed.is_empty() {
            UrlPatch::remove(SEARCH_PARAM)
        } else {
            UrlPatch::set(SEARCH_PARAM, trimmed)
        };

        let mut params = QueryParams::parse(self.location.query());
        patch.apply(&mut params);
        debug!(query = %trimmed, "Search query updated");
        self.location.replace_query(&params.to_query_string());
    }

    /// The query as typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results<'a>(&self, snapshot: &'a Snapshot) -> SearchOutcome<'a> {
        search(&all_movies(snapshot), &self.query)
    }

    pub fn location(&self) -> &L {
        &self.location
    }
}

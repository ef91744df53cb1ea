//! Keeps a [`FilterState`] and a [`Location`] in step.

use tracing::debug;

use super::location::Location;
use super::query::QueryParams;
use super::state::{apply_action, filter_from_query, price_href, FilterAction, FilterState, Tab};
use crate::catalog::Snapshot;

/// Filter controller for the catalog page.
///
/// Reads the URL once on mount and again whenever the location changes
/// outside the controller (back/forward). Every filter write rewrites the
/// current history entry.
pub struct FilterController<L: Location> {
    location: L,
    state: FilterState,
}

impl<L: Location> FilterController<L> {
    pub fn mount(location: L, snapshot: &Snapshot) -> Self {
        let mut controller = Self {
            location,
            state: FilterState::default(),
        };
        controller.sync_from_location(snapshot);
        controller
    }

    /// Re-read the URL. Call after history navigation or a catalog reload,
    /// since category validity depends on the snapshot.
    pub fn sync_from_location(&mut self, snapshot: &Snapshot) -> &FilterState {
        let params = QueryParams::parse(self.location.query());
        self.state = filter_from_query(&params, snapshot, &self.state);
        debug!(state = ?self.state, "Filter state synced from URL");
        &self.state
    }

    pub fn dispatch(&mut self, action: FilterAction) -> &FilterState {
        debug!(action = ?action, "Filter action");
        let (next, patch) = apply_action(&self.state, action);
        self.state = next;

        if !patch.is_empty() {
            let mut params = QueryParams::parse(self.location.query());
            patch.apply(&mut params);
            self.location.replace_query(&params.to_query_string());
        }
        &self.state
    }

    pub fn select_category(&mut self, category_id: impl Into<String>) -> &FilterState {
        self.dispatch(FilterAction::SelectCategory(category_id.into()))
    }

    pub fn clear_category(&mut self) -> &FilterState {
        self.dispatch(FilterAction::ClearCategory)
    }

    pub fn select_price(&mut self, price: f64) -> &FilterState {
        self.dispatch(FilterAction::SelectPrice(price))
    }

    pub fn clear_price(&mut self) -> &FilterState {
        self.dispatch(FilterAction::ClearPrice)
    }

    pub fn select_tab(&mut self, tab: Tab) -> &FilterState {
        self.dispatch(FilterAction::SelectTab(tab))
    }

    /// Leave the current page for the catalog filtered to `price`.
    ///
    /// This is a navigation, so it pushes a history entry. The state is
    /// re-derived from the new URL.
    pub fn open_price(&mut self, price: f64, snapshot: &Snapshot) -> &FilterState {
        let href = price_href(price);
        let (path, query) = href.split_once('?').unwrap_or((href.as_str(), ""));
        self.location.push(path, query);
        self.sync_from_location(snapshot)
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn location_mut(&mut self) -> &mut L {
        &mut self.location
    }

    pub fn into_location(self) -> L {
        self.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{MemoryLocation, ViewMode};
    use crate::testing::fixtures::{category, movie};

    fn snapshot() -> Snapshot {
        Snapshot::new(
            1,
            vec![
                category("cat-drama", "Drama", vec![movie("m-1", "One")]),
                category("cat-comedy", "Comédia", vec![movie("m-2", "Two")]),
            ],
        )
    }

    #[test]
    fn test_mount_reads_url() {
        let s = snapshot();
        let controller =
            FilterController::mount(MemoryLocation::new("/movies?cat=cat-drama&price=9"), &s);

        assert_eq!(
            controller.state().mode(),
            ViewMode::CategorySelected {
                category_id: "cat-drama".to_string(),
                price: Some(9.0),
            }
        );
    }

    #[test]
    fn test_filter_writes_replace_history_entry() {
        let s = snapshot();
        let mut controller = FilterController::mount(MemoryLocation::new("/movies"), &s);

        controller.select_category("cat-drama");
        controller.select_price(9.0);
        assert_eq!(controller.location().href(), "/movies?cat=cat-drama&price=9");

        controller.clear_category();
        assert_eq!(controller.location().href(), "/movies?price=9");
        assert_eq!(controller.location().history_len(), 1);
    }

    #[test]
    fn test_writes_keep_unrelated_params() {
        let s = snapshot();
        let mut controller =
            FilterController::mount(MemoryLocation::new("/movies?utm=mail&cat=cat-drama"), &s);

        controller.select_category("cat-comedy");
        assert_eq!(controller.location().href(), "/movies?utm=mail&cat=cat-comedy");
    }

    #[test]
    fn test_tab_change_does_not_touch_url() {
        let s = snapshot();
        let mut controller = FilterController::mount(MemoryLocation::new("/movies"), &s);

        controller.select_tab(Tab::Featured);
        assert_eq!(controller.location().href(), "/movies");
        assert_eq!(controller.state().mode(), ViewMode::Tab(Tab::Featured));
    }

    #[test]
    fn test_open_price_pushes_entry() {
        let s = snapshot();
        let mut controller = FilterController::mount(MemoryLocation::new("/pricing"), &s);

        controller.open_price(12.0, &s);
        assert_eq!(controller.location().href(), "/movies?price=12");
        assert_eq!(controller.location().history_len(), 2);
        assert_eq!(controller.state().mode(), ViewMode::PriceSelected { price: 12.0 });

        assert!(controller.location_mut().back());
        controller.sync_from_location(&s);
        assert_eq!(controller.state().price, None);
    }
}

//! End-to-end browsing over the demo catalog: URL in, view out.

use std::sync::Arc;

use teatro_core::derive::{all_movies, price_groups};
use teatro_core::filter::{
    BrowseView, FilterController, Location, MemoryLocation, SearchController, Tab, ViewCache,
    ViewMode,
};
use teatro_core::testing::fixtures::demo_catalog;
use teatro_core::CatalogStore;

const ROW_LIMIT: usize = 60;

#[test]
fn test_category_selection_survives_remount() {
    let store = CatalogStore::new(demo_catalog());
    let snapshot = store.snapshot();

    let mut controller = FilterController::mount(MemoryLocation::new("/movies"), &snapshot);
    controller.select_category("cat-drama");
    let href = controller.location().href();
    assert_eq!(href, "/movies?cat=cat-drama");

    let first = teatro_core::filter::build_view(&snapshot, controller.state(), ROW_LIMIT);

    let remounted = FilterController::mount(MemoryLocation::new(&href), &snapshot);
    assert_eq!(remounted.state(), controller.state());
    let second = teatro_core::filter::build_view(&snapshot, remounted.state(), ROW_LIMIT);
    assert_eq!(first, second);
}

#[test]
fn test_unknown_category_reconstructs_default_state() {
    let snapshot = CatalogStore::new(demo_catalog()).snapshot();
    let controller =
        FilterController::mount(MemoryLocation::new("/movies?cat=does-not-exist"), &snapshot);

    assert_eq!(controller.state().mode(), ViewMode::Tab(Tab::Categories));
}

#[test]
fn test_filter_toggles_do_not_grow_history() {
    let snapshot = CatalogStore::new(demo_catalog()).snapshot();
    let mut controller = FilterController::mount(MemoryLocation::new("/movies"), &snapshot);

    controller.select_category("cat-drama");
    controller.select_price(9.0);
    controller.clear_price();
    controller.select_category("cat-soon");
    controller.clear_category();

    assert_eq!(controller.location().history_len(), 1);
    assert_eq!(controller.location().query(), "");
}

#[test]
fn test_pricing_link_and_back_navigation() {
    let snapshot = CatalogStore::new(demo_catalog()).snapshot();
    let groups = price_groups(&all_movies(&snapshot));
    assert_eq!(groups.len(), 1);

    let mut controller = FilterController::mount(MemoryLocation::new("/prices"), &snapshot);
    controller.open_price(groups[0].price, &snapshot);

    let view = teatro_core::filter::build_view(&snapshot, controller.state(), ROW_LIMIT);
    match view {
        BrowseView::Price { total, .. } => assert_eq!(total, groups[0].count),
        other => panic!("expected price view, got {:?}", other),
    }

    controller.location_mut().back();
    controller.sync_from_location(&snapshot);
    assert_eq!(controller.location().path(), "/prices");
    assert_eq!(controller.state().price, None);
}

#[test]
fn test_view_cache_is_stable_until_reload() {
    let store = CatalogStore::new(demo_catalog());
    let mut cache = ViewCache::new();
    let controller = FilterController::mount(MemoryLocation::new("/movies"), &store.snapshot());

    let a = cache.get(&store.snapshot(), controller.state(), ROW_LIMIT);
    let b = cache.get(&store.snapshot(), controller.state(), ROW_LIMIT);
    assert!(Arc::ptr_eq(&a, &b));

    store.replace(demo_catalog());
    let c = cache.get(&store.snapshot(), controller.state(), ROW_LIMIT);
    assert!(!Arc::ptr_eq(&b, &c));
    assert_eq!(*b, *c);
}

#[test]
fn test_featured_tab_uses_flags() {
    let snapshot = CatalogStore::new(demo_catalog()).snapshot();
    let mut controller = FilterController::mount(MemoryLocation::new("/movies"), &snapshot);
    controller.select_tab(Tab::Featured);

    let view = teatro_core::filter::build_view(&snapshot, controller.state(), ROW_LIMIT);
    let BrowseView::Featured { movies } = view else {
        panic!("expected featured view");
    };
    let ids: Vec<&str> = movies.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["m-020", "m-016", "m-018", "m-017", "m-019"]);
}

#[test]
fn test_search_is_diacritic_insensitive() {
    let snapshot = CatalogStore::new(demo_catalog()).snapshot();
    let mut search = SearchController::mount(MemoryLocation::new("/search"));

    search.set_query("sonho");
    let titles: Vec<&str> = search
        .results(&snapshot)
        .matches()
        .iter()
        .map(|m| m.title.as_str())
        .collect();
    assert_eq!(titles, vec!["A vida é sonho"]);

    search.set_query("VERGONHA");
    assert_eq!(search.results(&snapshot).matches().len(), 1);

    search.set_query("   ");
    assert!(search.results(&snapshot).is_idle());
}

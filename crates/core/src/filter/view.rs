//! Browse view derived from a snapshot and a filter state.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::state::{FilterState, Tab, ViewMode};
use crate::catalog::{Movie, Snapshot};
use crate::derive::{
    all_movies, category_movies, featured, grid_clamp, movies_at_price, recently_added,
};

/// What the catalog page renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum BrowseView {
    Categories {
        tiles: Vec<CategoryTile>,
    },
    Recent {
        movies: Vec<Movie>,
    },
    Featured {
        movies: Vec<Movie>,
    },
    Category {
        category_id: String,
        /// `None` when the category vanished after a reload.
        name: Option<String>,
        /// All matching movies, including those past the row limit.
        total: usize,
        price: Option<f64>,
        movies: Vec<Movie>,
    },
    Price {
        price: f64,
        total: usize,
        movies: Vec<Movie>,
    },
}

/// A category on the categories tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTile {
    pub id: String,
    pub name: String,
    pub movie_count: usize,
    pub preview: Vec<Movie>,
}

pub fn build_view(snapshot: &Snapshot, state: &FilterState, row_limit: usize) -> BrowseView {
    match state.mode() {
        ViewMode::CategorySelected { category_id, price } => {
            let matching = category_movies(snapshot, &category_id, price);
            BrowseView::Category {
                name: snapshot
                    .get_category_by_id(&category_id)
                    .map(|c| c.name.clone()),
                category_id,
                total: matching.len(),
                price,
                movies: capped(&matching, row_limit),
            }
        }
        ViewMode::PriceSelected { price } => {
            let matching = movies_at_price(&all_movies(snapshot), price);
            BrowseView::Price {
                price,
                total: matching.len(),
                movies: capped(&matching, row_limit),
            }
        }
        ViewMode::Tab(Tab::Categories) => BrowseView::Categories {
            tiles: snapshot
                .categories()
                .iter()
                .map(|c| CategoryTile {
                    id: c.id.clone(),
                    name: c.name.clone(),
                    movie_count: c.movies.len(),
                    preview: grid_clamp(&c.movies).to_vec(),
                })
                .collect(),
        },
        ViewMode::Tab(Tab::Recent) => BrowseView::Recent {
            movies: capped(&recently_added(&all_movies(snapshot)), row_limit),
        },
        ViewMode::Tab(Tab::Featured) => BrowseView::Featured {
            movies: capped(&featured(&all_movies(snapshot)), row_limit),
        },
    }
}

fn capped(movies: &[&Movie], limit: usize) -> Vec<Movie> {
    movies.iter().take(limit).map(|m| (*m).clone()).collect()
}

#[derive(Debug, Clone, PartialEq)]
struct ViewKey {
    version: u64,
    state: FilterState,
    row_limit: usize,
}

/// Single-entry memo over [`build_view`].
///
/// An unchanged (snapshot version, filter state, row limit) returns the
/// same `Arc`, so callers can skip re-rendering on `Arc::ptr_eq`.
#[derive(Debug, Default)]
pub struct ViewCache {
    last: Option<(ViewKey, Arc<BrowseView>)>,
}

impl ViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(
        &mut self,
        snapshot: &Snapshot,
        state: &FilterState,
        row_limit: usize,
    ) -> Arc<BrowseView> {
        let key = ViewKey {
            version: snapshot.version(),
            state: state.clone(),
            row_limit,
        };

        if let Some((cached_key, view)) = &self.last {
            if *cached_key == key {
                debug!(version = key.version, "Browse view cache hit");
                return Arc::clone(view);
            }
        }

        debug!(version = key.version, state = ?key.state, "Browse view cache miss");
        let view = Arc::new(build_view(snapshot, state, row_limit));
        self.last = Some((key, Arc::clone(&view)));
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures::{category, movie};

    fn priced(id: &str, price: f64) -> Movie {
        let mut m = movie(id, id);
        m.price = price;
        m
    }

    fn snapshot(version: u64) -> Snapshot {
        Snapshot::new(
            version,
            vec![
                category(
                    "cat-drama",
                    "Drama",
                    vec![priced("a", 9.0), priced("b", 12.0), priced("c", 9.0)],
                ),
                category("cat-comedy", "Comédia", vec![priced("d", 9.0)]),
                category("cat-soon", "Brevemente disponível", vec![]),
            ],
        )
    }

    fn ids(movies: &[Movie]) -> Vec<&str> {
        movies.iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn test_default_view_is_category_tiles() {
        let view = build_view(&snapshot(1), &FilterState::default(), 60);
        let BrowseView::Categories { tiles } = view else {
            panic!("expected categories view");
        };
        assert_eq!(tiles.len(), 3);
        assert_eq!(tiles[0].movie_count, 3);
        assert!(tiles[2].preview.is_empty());
    }

    #[test]
    fn test_category_and_price_compose() {
        let state = FilterState {
            category_id: Some("cat-drama".to_string()),
            price: Some(9.0),
            ..Default::default()
        };
        let view = build_view(&snapshot(1), &state, 60);
        let BrowseView::Category { name, total, movies, .. } = view else {
            panic!("expected category view");
        };
        assert_eq!(name.as_deref(), Some("Drama"));
        assert_eq!(total, 2);
        assert_eq!(ids(&movies), vec!["a", "c"]);
    }

    #[test]
    fn test_price_view_spans_catalog() {
        let state = FilterState {
            price: Some(9.0),
            ..Default::default()
        };
        let BrowseView::Price { total, movies, .. } = build_view(&snapshot(1), &state, 60) else {
            panic!("expected price view");
        };
        assert_eq!(total, 3);
        assert_eq!(ids(&movies), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_row_limit_caps_movies_not_total() {
        let state = FilterState {
            category_id: Some("cat-drama".to_string()),
            ..Default::default()
        };
        let BrowseView::Category { total, movies, .. } = build_view(&snapshot(1), &state, 2) else {
            panic!("expected category view");
        };
        assert_eq!(total, 3);
        assert_eq!(movies.len(), 2);
    }

    #[test]
    fn test_cache_returns_same_arc_until_key_changes() {
        let mut cache = ViewCache::new();
        let state = FilterState::default();
        let s1 = snapshot(1);

        let first = cache.get(&s1, &state, 60);
        let second = cache.get(&s1, &state, 60);
        assert!(Arc::ptr_eq(&first, &second));

        let s2 = snapshot(2);
        let third = cache.get(&s2, &state, 60);
        assert!(!Arc::ptr_eq(&second, &third));

        let recent = FilterState {
            tab: Tab::Recent,
            ..Default::default()
        };
        let fourth = cache.get(&s2, &recent, 60);
        assert!(matches!(*fourth, BrowseView::Recent { .. }));
    }

    #[test]
    fn test_view_serializes_with_mode_tag() {
        let state = FilterState {
            price: Some(12.0),
            ..Default::default()
        };
        let json = serde_json::to_value(build_view(&snapshot(1), &state, 60)).unwrap();
        assert_eq!(json["mode"], "price");
        assert_eq!(json["total"], 1);
    }
}

//! Snapshot lookups and the shared store handle.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::info;

use super::{Category, Movie};

/// An immutable view of the catalog for one render cycle.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    version: u64,
    categories: Vec<Category>,
    /// Category id -> position.
    category_index: HashMap<String, usize>,
    /// Movie id -> (category position, movie position) of its first occurrence.
    movie_index: HashMap<String, (usize, usize)>,
}

impl Snapshot {
    /// Build a snapshot and its lookup indexes.
    pub fn new(version: u64, categories: Vec<Category>) -> Self {
        let mut category_index = HashMap::with_capacity(categories.len());
        let mut movie_index = HashMap::new();

        for (ci, category) in categories.iter().enumerate() {
            category_index.entry(category.id.clone()).or_insert(ci);
            for (mi, movie) in category.movies.iter().enumerate() {
                // First occurrence in category order wins.
                movie_index.entry(movie.id.clone()).or_insert((ci, mi));
            }
        }

        Self {
            version,
            categories,
            category_index,
            movie_index,
        }
    }

    /// Monotonic version, bumped on every store replacement.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get_category_by_id(&self, id: &str) -> Option<&Category> {
        self.category_index
            .get(id)
            .and_then(|&ci| self.categories.get(ci))
    }

    pub fn has_category(&self, id: &str) -> bool {
        self.category_index.contains_key(id)
    }

    /// Movies of a category; empty when the category is unknown.
    pub fn get_movies_by_category_id(&self, id: &str) -> &[Movie] {
        self.get_category_by_id(id)
            .map(|c| c.movies.as_slice())
            .unwrap_or(&[])
    }

    /// Look a movie up by id.
    ///
    /// A movie listed in several categories resolves to its first occurrence
    /// in category order. Duplicates are expected for overlapping
    /// taxonomies and are not an error.
    pub fn get_movie_by_id(&self, id: &str) -> Option<&Movie> {
        self.movie_index
            .get(id)
            .and_then(|&(ci, mi)| self.categories.get(ci)?.movies.get(mi))
    }

    /// Names of every category listing the movie, in category order.
    pub fn category_names_for_movie(&self, id: &str) -> Vec<&str> {
        self.categories
            .iter()
            .filter(|c| c.movies.iter().any(|m| m.id == id))
            .map(|c| c.name.as_str())
            .collect()
    }

    /// Sum of all category sizes, duplicates included.
    pub fn total_movies(&self) -> usize {
        self.categories.iter().map(|c| c.movies.len()).sum()
    }
}

/// Shared handle to the current catalog snapshot.
///
/// Constructed once at startup and cloned into whatever needs it. Readers
/// take an `Arc<Snapshot>` and keep working on it while a reload swaps in
/// a newer one.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    current: Arc<RwLock<Arc<Snapshot>>>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::empty()
    }
}

impl CatalogStore {
    /// Create an empty store (version 0).
    pub fn empty() -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(Snapshot::default()))),
        }
    }

    /// Create a store already holding `categories` (version 1).
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(Snapshot::new(1, categories)))),
        }
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// Swap in a full reload. Returns the new version.
    pub fn replace(&self, categories: Vec<Category>) -> u64 {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        let version = guard.version() + 1;
        let category_count = categories.len();
        *guard = Arc::new(Snapshot::new(version, categories));

        info!(
            "Catalog snapshot replaced: version={}, categories={}",
            version, category_count
        );
        version
    }
}

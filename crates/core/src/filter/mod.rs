//! Filter state and its two-way sync with the URL query string.
//!
//! The policy lives in pure functions: [`filter_from_query`] reads a URL
//! into a [`FilterState`], [`apply_action`] turns a user intent into the
//! next state plus a [`UrlPatch`]. Controllers only glue those to a
//! [`Location`], always writing filter changes with replace semantics.

mod controller;
mod location;
mod query;
mod search;
mod state;
mod view;

pub use controller::FilterController;
pub use location::{Location, MemoryLocation};
pub use query::{QueryParams, UrlPatch};
pub use search::SearchController;
pub use state::*;
pub use view::{build_view, BrowseView, CategoryTile, ViewCache};

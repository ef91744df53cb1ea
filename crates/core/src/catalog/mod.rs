//! Catalog store - the canonical categories and movies of the storefront.
//!
//! A [`Snapshot`] is immutable once built. The [`CatalogStore`] handle swaps
//! whole snapshots on reload; nothing patches a snapshot in place.

mod store;
mod types;

pub use store::{CatalogStore, Snapshot};
pub use types::*;

pub(crate) use types::null_as_default;

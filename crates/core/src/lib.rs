pub mod api;
pub mod auth;
pub mod catalog;
pub mod config;
pub mod derive;
pub mod filter;
pub mod format;
pub mod loader;
pub mod rental;
pub mod rows;
pub mod testing;

pub use api::{ApiError, HttpStorefrontApi, StorefrontApi};
pub use auth::{create_session, guard_route, Identity, RouteAccess, Session};
pub use catalog::{AgeRating, CatalogStore, Category, Collaborator, Movie, Snapshot};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, SanitizedConfig,
    SourceKind,
};
pub use filter::{
    BrowseView, FilterController, FilterState, Location, MemoryLocation, SearchController, Tab,
    ViewCache,
};
pub use loader::{load_fixture, CatalogLoader, LoadError, LoadOutcome, LoadStatus, Notice};
pub use rows::{NavControls, RowWindow, ScrollDirection};

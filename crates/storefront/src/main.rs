mod render;
mod routes;
mod state;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use teatro_core::{
    create_session, load_config, load_fixture, validate_config, CatalogLoader, CatalogStore,
    Config, HttpStorefrontApi, LoadOutcome, SourceKind, StorefrontApi,
};

use state::AppState;

/// Location rendered when none is given on the command line.
const DEFAULT_LOCATION: &str = "/movies";

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Logs go to stderr; stdout carries only rendered JSON.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config_path = std::env::var("TEATRO_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("teatro.toml"));

    let config = if config_path.exists() {
        info!("Loading configuration from {:?}", config_path);
        load_config(&config_path)
            .with_context(|| format!("Failed to load config from {:?}", config_path))?
    } else {
        warn!("No config at {:?}, using defaults", config_path);
        Config::default()
    };

    validate_config(&config).context("Configuration validation failed")?;

    let session = create_session(config.session.as_ref());
    info!("Using session: {}", session.kind());

    let store = CatalogStore::empty();
    let api = populate(&config, &store).await?;

    let state = AppState::new(config, store, session, api);
    info!(
        "Configuration loaded: {}",
        serde_json::to_string(&state.sanitized_config()).unwrap_or_default()
    );

    let locations: Vec<String> = std::env::args().skip(1).collect();
    let locations = if locations.is_empty() {
        vec![DEFAULT_LOCATION.to_string()]
    } else {
        locations
    };

    let now = chrono::Utc::now();
    for href in &locations {
        let page = render::render(&state, href, now).await;
        let line = serde_json::to_string(&page)
            .with_context(|| format!("Failed to serialize page for {}", href))?;
        println!("{}", line);
    }

    Ok(())
}

/// Fill the store from the configured source. Returns the API client when
/// the catalog comes from the REST API.
async fn populate(config: &Config, store: &CatalogStore) -> Result<Option<Arc<dyn StorefrontApi>>> {
    match config.source.kind {
        SourceKind::Fixture => {
            let path: &Path = &config.source.fixture_path;
            let categories = load_fixture(path)
                .with_context(|| format!("Failed to load catalog fixture {:?}", path))?;
            store.replace(categories);
            Ok(None)
        }
        SourceKind::Api => {
            let api_config = config
                .api
                .as_ref()
                .context("source.kind = \"api\" requires an [api] section")?;
            info!("Using storefront API at {}", api_config.base_url);

            let api: Arc<dyn StorefrontApi> = Arc::new(
                HttpStorefrontApi::new(api_config).context("Failed to create API client")?,
            );
            let loader = CatalogLoader::new(store.clone(), Arc::clone(&api));

            match loader.reload().await {
                Ok(LoadOutcome::Applied { version }) => {
                    info!("Catalog snapshot {} ready", version)
                }
                Ok(LoadOutcome::Superseded) => {}
                Err(e) => {
                    // Render the empty catalog rather than nothing.
                    warn!("Catalog unavailable: {}", e);
                    info!("Load status: {:?}", loader.status().await);
                }
            }
            Ok(Some(api))
        }
    }
}

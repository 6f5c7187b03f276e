mod error;
mod routes;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pack_core::PackStore;

pub struct AppState {
    pub store: PackStore,
    pub schema_path: PathBuf,
}

impl AppState {
    /// `root` is the content checkout: packs under `data/`, editor
    /// metadata under `app_schema/`.
    pub fn new(root: &Path) -> Self {
        Self {
            store: PackStore::new(root.join("data")),
            schema_path: root.join("app_schema").join("config.json"),
        }
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::packs::router())
        .merge(routes::search::router())
        .merge(routes::render::router())
        .merge(routes::schema::router())
        .merge(routes::preview::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pack_web=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let root = std::env::var("PACK_ROOT")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            // crates/application/pack-web -> repository root
            PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                .join("..")
                .join("..")
                .join("..")
        });
    let state = Arc::new(AppState::new(&root));

    let bind = std::env::var("PACK_WEB_BIND").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!("pack-web listening on {bind}");
    axum::serve(listener, app(state)).await?;
    Ok(())
}

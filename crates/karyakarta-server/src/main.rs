mod config;

use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use karyakarta_api::AppStateInner;
use karyakarta_db::{Store, SystemClock, schema};

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "karyakarta=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env()?;

    if let Some(path) = &config.schema_db {
        schema::provision(path)?;
    }

    let clock = Arc::new(SystemClock);
    let store = if config.seed {
        Store::seeded(clock)
    } else {
        info!("Starting with an empty store");
        Store::empty(clock)
    };

    let app = karyakarta_api::router(AppStateInner::new(store))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.addr()?;
    info!("Karyakarta dashboard API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

use anyhow::Context;
use clap::Parser;
use person_store::{api, logging, Config, PersonStore};
use std::sync::Arc;
use tracing::info;

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("received Ctrl+C, shutting down");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // load .env before clap reads env fallbacks
    dotenvy::dotenv().ok();
    let config = Config::parse();
    logging::init(config.log_format);
    config.validate()?;

    let store = PersonStore::builder(&config.db_path)
        .pretty(config.pretty)
        .build()
        .with_context(|| format!("opening {}", config.db_path.display()))?;
    info!(
        path = %store.path().display(),
        records = store.len(),
        version = env!("CARGO_PKG_VERSION"),
        "person store ready"
    );

    let app = api::router(Arc::new(store));
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("binding {}", config.addr))?;
    info!(addr = %config.addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

//! Kredit Server: application entry point.

use anyhow::Context;
use kredit_db::DbManager;
use kredit_server::{AppState, ServerConfig, build_router, telemetry};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    let config = ServerConfig::load()?;
    let auth = config.auth_config()?;

    let db = DbManager::connect(&config.database)
        .await
        .context("connecting to SurrealDB")?;
    kredit_db::run_migrations(db.client()).await?;

    let state = AppState::new(db.client().clone(), auth);
    let listener = TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("binding {}", config.bind_address))?;

    info!(address = %listener.local_addr()?, "Kredit server listening");
    axum::serve(listener, build_router(state)).await?;

    info!("Kredit server stopped");
    Ok(())
}

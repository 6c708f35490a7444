mod db;
mod routes;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use crate::db::Db;
use crate::state::AppState;

const DEFAULT_PORT: u16 = 4310;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let state = AppState::new(Db::new(db_path()?))?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(routes::events::router())
        .with_state(state)
        .layer(cors);

    let addr = SocketAddr::from(([127, 0, 0, 1], port()));
    tracing::info!("dayplan-server listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Database file location: $DAYPLAN_DB, or the platform data directory.
fn db_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("DAYPLAN_DB") {
        return Ok(PathBuf::from(path));
    }
    let data_dir = dirs::data_dir().context("Could not determine the platform data directory")?;
    Ok(data_dir.join("dayplan").join("events.json"))
}

/// Listen port: $DAYPLAN_PORT, or the default.
fn port() -> u16 {
    std::env::var("DAYPLAN_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

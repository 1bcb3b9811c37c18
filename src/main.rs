//! Nerdy Joker - voice assistant skill backend
//!
//! Answers skill webhook events with nerdy jokes served from a SQLite corpus.

mod api;
mod config;
mod corpus;
mod db;
mod dialog;
mod response;

use api::{create_router, AppState};
use config::Config;
use db::Database;
use dialog::Dialog;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nerdy_joker=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    let config = Config::from_env()?;

    // Ensure database directory exists
    if let Some(parent) = config.db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Initialize database; seeding finishes before the listener binds
    tracing::info!(path = %config.db_path.display(), "Opening database");
    let db = Database::open(&config.db_path)?;
    corpus::initialize(&db, &corpus::NERDY_JOKES).await?;

    if config.skill_app_id.is_none() {
        tracing::warn!("ALEXA_SKILL_APP_ID not set; accepting requests for any application");
    }

    let dialog = Dialog::new(Arc::new(db));
    let state = AppState::new(dialog, config.skill_app_id);
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Nerdy Joker listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

//! Application setup and initialization
//!
//! Startup orchestration extracted from main.rs for better organization
//! and testability: database, cache, routes.

pub mod cache;
pub mod database;
pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::Result;
use flex_core::Config;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Setup database pool and run pending migrations
    let db_pool = database::setup_database(&config).await?;

    // Setup cache client
    let redis = cache::setup_cache(&config).await?;

    let state = Arc::new(AppState {
        config: config.clone(),
        db_pool,
        redis,
    });

    // Setup routes
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}

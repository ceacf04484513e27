//! Shared application state handed to handlers.

use flex_core::Config;
use sqlx::PgPool;

/// Read-only state assembled once during bootstrap.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub db_pool: PgPool,
    pub redis: redis::Client,
}

//! Database setup and initialization

use anyhow::{Context, Result};
use flex_core::Config;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::path::Path;

/// Setup database connection pool and run migrations
pub async fn setup_database(config: &Config) -> Result<PgPool> {
    tracing::info!(
        host = %config.database.host,
        port = %config.database.port,
        database = %config.database.name,
        "Connecting to database..."
    );
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .idle_timeout(config.database.max_idle_time)
        .connect(&config.database.connection_url())
        .await
        .context("Failed to connect to database")?;

    tracing::info!(
        max_connections = config.database.max_connections,
        "Database connected successfully"
    );

    // Run pending migrations on startup (path: workspace migrations/ from crate root)
    let migrations_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../migrations");
    let migrator = sqlx::migrate::Migrator::new(migrations_dir)
        .await
        .context("Failed to load migrations")?;
    migrator
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    Ok(pool)
}

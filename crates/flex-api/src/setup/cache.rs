//! Cache client setup

use anyhow::{Context, Result};
use flex_core::Config;

/// Setup the Redis client and verify connectivity.
pub async fn setup_cache(config: &Config) -> Result<redis::Client> {
    tracing::info!(
        host = %config.redis.host,
        port = %config.redis.port,
        db = config.redis.db,
        "Connecting to Redis..."
    );

    let client = redis::Client::open(config.redis.connection_url())
        .context("Invalid Redis connection URL")?;

    // Fail at startup on a bad cache configuration rather than on first use.
    let mut conn = client
        .get_multiplexed_async_connection()
        .await
        .context("Failed to connect to Redis")?;
    redis::cmd("PING")
        .query_async::<_, String>(&mut conn)
        .await
        .context("Redis ping failed")?;

    tracing::info!("Redis connected successfully");
    Ok(client)
}

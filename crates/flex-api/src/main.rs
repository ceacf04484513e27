mod setup;
mod state;
mod telemetry;

use flex_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load .env before anything reads the environment; absence is fine.
    dotenvy::dotenv().ok();

    // The logger reads ENV/LOG_LEVEL/LOG_FORMAT directly so it is live
    // before the configuration snapshot is resolved.
    telemetry::init_logging();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize the application (database, cache, routes)
    let (_state, router) = setup::initialize_app(config.clone()).await?;

    // Start the server
    setup::server::start_server(&config, router).await?;

    Ok(())
}

//! Logger initialization
//!
//! Reads `ENV`, `LOG_LEVEL` and `LOG_FORMAT` straight from the process
//! environment rather than the configuration snapshot, so logging is
//! available before (and during) configuration resolution.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise the minimum level comes
/// from `LOG_LEVEL` (unknown values mean `info`). `LOG_FORMAT=json`
/// selects structured output, anything else selects console output.
pub fn init_logging() {
    let environment = std::env::var("ENV").unwrap_or_else(|_| "development".to_string());
    let format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "console".to_string());

    let level = match std::env::var("LOG_LEVEL").as_deref() {
        Ok("debug") => "debug",
        Ok("warn") => "warn",
        Ok("error") => "error",
        _ => "info",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);
    if format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        let ansi = environment != "production";
        registry
            .with(tracing_subscriber::fmt::layer().with_ansi(ansi))
            .init();
    }
}

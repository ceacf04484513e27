//! Flex Core Library
//!
//! This crate provides the configuration snapshot and configuration
//! diagnostics shared across all Flex Media Server components.

pub mod config;

// Re-export commonly used types
pub use config::{
    AppConfig, Config, ConfigWarning, DatabaseConfig, ExternalConfig, JwtConfig, LoggingConfig,
    MediaConfig, RedisConfig,
};

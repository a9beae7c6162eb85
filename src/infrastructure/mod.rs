//! Infrastructure layer with catalog and configuration adapters.

/// Built-in catalog data.
pub mod catalog;
/// Application configuration.
pub mod config;

pub use catalog::StaticCatalog;
pub use config::{AppConfig, CliArgs, ConfigError, LogLevel, StorageManager};

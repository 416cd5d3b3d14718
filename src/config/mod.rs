//! Configuration loading and merging for `_config.toml`

pub mod loader;
pub mod schema;

pub use loader::{resolve, ConfigError, CONFIG_FILE};
pub use schema::SiteConfig;

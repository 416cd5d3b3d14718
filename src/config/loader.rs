//! Configuration resolution
//!
//! Builds the full [`SiteConfig`] for one invocation. Precedence, lowest to
//! highest: built-in defaults, each config file in listed order, CLI
//! overrides.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use super::schema::SiteConfig;
use crate::options::BuildOptions;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "_config.toml";

/// Configuration resolution error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// Failed to read a config file
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A config file is not valid TOML
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// The merged configuration has a value of the wrong shape
    #[error("Invalid configuration: {0}")]
    Shape(toml::de::Error),
}

/// Resolve the full configuration for one build.
///
/// Config files come from the `--config` override list when given, otherwise
/// the default `_config.toml` (which may be absent; defaults apply then).
/// Explicitly listed files must exist. When both quiet and verbose end up
/// set, quiet is authoritative.
pub fn resolve(overrides: &BuildOptions) -> Result<SiteConfig, ConfigError> {
    let explicit = overrides.config.is_some();
    let files = config_files(overrides);

    let mut merged = toml::Table::new();
    for path in &files {
        if !explicit && !path.exists() {
            continue;
        }
        let contents = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io { path: path.clone(), source: e })?;
        let table: toml::Table = toml::from_str(&contents)
            .map_err(|e| ConfigError::Parse { path: path.clone(), source: e })?;
        merge_tables(&mut merged, table);
    }

    let mut config: SiteConfig =
        toml::Value::Table(merged).try_into().map_err(ConfigError::Shape)?;
    merge_overrides(&mut config, overrides);

    if config.quiet && config.verbose {
        config.verbose = false;
    }
    Ok(config)
}

/// The config files to load: the explicit `--config` list, or the default
/// file in the working directory.
pub fn config_files(overrides: &BuildOptions) -> Vec<PathBuf> {
    match &overrides.config {
        Some(files) => files.clone(),
        None => vec![PathBuf::from(CONFIG_FILE)],
    }
}

/// Merge `incoming` into `base`, key by key. Nested tables merge
/// recursively; any other value replaces what was there.
fn merge_tables(base: &mut toml::Table, incoming: toml::Table) {
    for (key, value) in incoming {
        let merged = match (base.remove(&key), value) {
            (Some(toml::Value::Table(mut existing)), toml::Value::Table(update)) => {
                merge_tables(&mut existing, update);
                toml::Value::Table(existing)
            }
            (_, update) => update,
        };
        base.insert(key, merged);
    }
}

/// Merge CLI overrides into a configuration. Overrides win over file values.
pub fn merge_overrides(config: &mut SiteConfig, overrides: &BuildOptions) {
    if let Some(future) = overrides.future {
        config.future = future;
    }
    if let Some(limit) = overrides.limit_posts {
        config.limit_posts = Some(limit);
    }
    if let Some(watch) = overrides.watch {
        config.watch = watch;
    }
    if let Some(lsi) = overrides.lsi {
        config.lsi = lsi;
    }
    if let Some(drafts) = overrides.show_drafts {
        config.show_drafts = drafts;
    }
    if let Some(quiet) = overrides.quiet {
        config.quiet = quiet;
    }
    if let Some(verbose) = overrides.verbose {
        config.verbose = verbose;
    }
}

//! Site configuration schema

use std::path::PathBuf;

use serde::Deserialize;

/// Merged build configuration for one invocation.
///
/// Produced by [`crate::config::resolve`] from built-in defaults, config
/// files, and CLI overrides; owned by the invoking command for the duration
/// of one build and discarded afterwards.
///
/// Unknown keys in config files are ignored: site configs routinely carry
/// template and content settings this core does not interpret.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory containing the site sources
    pub source: PathBuf,
    /// Directory the built site is written to
    pub destination: PathBuf,
    /// Include posts dated after the current time
    pub future: bool,
    /// Cap on the number of posts considered for processing
    pub limit_posts: Option<usize>,
    /// Rebuild on change; consumed by an external watcher
    pub watch: bool,
    /// LSI-based related-content computation
    pub lsi: bool,
    /// Include draft content in the build
    pub show_drafts: bool,
    /// Suppress non-error output
    pub quiet: bool,
    /// Emit detailed diagnostic output
    pub verbose: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("."),
            destination: PathBuf::from("_site"),
            future: false,
            limit_posts: None,
            watch: false,
            lsi: false,
            show_drafts: false,
            quiet: false,
            verbose: false,
        }
    }
}

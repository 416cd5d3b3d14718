//! The site seam and its error taxonomy
//!
//! Rendering pipelines implement [`Site`]; this crate only drives them
//! through `process()`.

use std::fs;

use thiserror::Error;

use crate::config::{ConfigError, SiteConfig};

/// Error raised while processing a site.
///
/// Only [`SiteError::Fatal`] triggers the report-and-exit path in
/// [`crate::invoke::process_site`]; every other variant propagates to the
/// caller untouched.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SiteError {
    /// The site fundamentally cannot be built
    #[error("{0}")]
    Fatal(String),
    /// Ordinary I/O failure
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Configuration failure surfaced during processing
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A buildable site.
pub trait Site {
    /// Build the site. Signals [`SiteError::Fatal`] when the site cannot be
    /// constructed at all; any other error means an ordinary failure.
    fn process(&mut self) -> Result<(), SiteError>;
}

/// The filesystem-level site the CLI drives.
///
/// Validates the source tree and prepares the destination directory.
/// Content rendering sits behind the same trait in higher layers.
#[derive(Debug)]
pub struct LocalSite {
    config: SiteConfig,
}

impl LocalSite {
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    /// The configuration this site was created with.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }
}

impl Site for LocalSite {
    fn process(&mut self) -> Result<(), SiteError> {
        if !self.config.source.is_dir() {
            return Err(SiteError::Fatal(format!(
                "source directory does not exist: {}",
                self.config.source.display()
            )));
        }
        fs::create_dir_all(&self.config.destination)?;
        Ok(())
    }
}

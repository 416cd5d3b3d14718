//! Build invocation
//!
//! Wraps [`Site::process`] so the fatal cannot-be-built failure is reported
//! uniformly and terminates the process. Everything else propagates to the
//! caller unmodified.

use std::process;

use tracing::error;

use crate::config::{self, ConfigError, SiteConfig};
use crate::options::BuildOptions;
use crate::site::{Site, SiteError};

/// Drive a site build.
///
/// On [`SiteError::Fatal`]: emits the three-line error report at error
/// level and exits the process with status 1. Control never returns to the
/// caller on that path. Any other error propagates unmodified, with no
/// output from here.
pub fn process_site<S: Site>(site: &mut S) -> Result<(), SiteError> {
    match site.process() {
        Ok(()) => Ok(()),
        Err(SiteError::Fatal(message)) => {
            error!("ERROR: YOUR SITE COULD NOT BE BUILT:");
            error!("------------------------------------");
            error!("{message}");
            process::exit(1);
        }
        Err(other) => Err(other),
    }
}

/// Build a full configuration from CLI overrides.
///
/// Pure delegation to [`config::resolve`]; commands get one stable call
/// site independent of the resolver's own interface.
pub fn configuration_from_options(options: &BuildOptions) -> Result<SiteConfig, ConfigError> {
    config::resolve(options)
}

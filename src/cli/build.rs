//! Build command

use std::process::ExitCode;

use clap::{ArgMatches, Command};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use super::{EXIT_ERROR, EXIT_SUCCESS};
use crate::globs::site_globs;
use crate::invoke::{configuration_from_options, process_site};
use crate::options::{add_build_options, BuildOptions};
use crate::site::LocalSite;

/// The build subcommand's clap surface.
pub fn clap_command() -> Command {
    add_build_options(Command::new("build").about("Build your site"))
}

/// Run the build command.
pub fn run(matches: &ArgMatches) -> ExitCode {
    let options = BuildOptions::from_matches(matches);

    let config = match configuration_from_options(&options) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    init_logging(config.quiet, config.verbose);

    info!("Source: {}", config.source.display());
    info!("Destination: {}", config.destination.display());

    let watch = config.watch;
    let source = config.source.clone();
    let destination = config.destination.clone();

    let mut site = LocalSite::new(config);
    match process_site(&mut site) {
        Ok(()) => {
            info!("Site built.");
            if watch {
                // rebuild scheduling lives in an external watcher; we only
                // hand it the patterns to observe
                match site_globs(&source, &destination) {
                    Ok(patterns) => info!("Watching: {}", patterns.join(" ")),
                    Err(e) => {
                        error!("Cannot compute watch patterns: {}", e);
                        return ExitCode::from(EXIT_ERROR);
                    }
                }
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            error!("Build failed: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Initialize the log subscriber for one invocation.
///
/// Quiet caps output at errors; verbose opens debug. `RUST_LOG` still takes
/// precedence when set. Errors go to stderr so they survive quiet pipelines.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}

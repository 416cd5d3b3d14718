//! Command-line interface
//!
//! The root command is assembled from the command registry; each descriptor
//! contributes its own clap surface and runner.

pub mod build;
pub mod new;

use std::process::ExitCode;

use clap::Command;

use crate::registry::CommandRegistry;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;

/// Run the CLI application.
pub fn run() -> ExitCode {
    let registry = CommandRegistry::builtin();
    let matches = root_command(&registry).get_matches();

    match matches.subcommand() {
        Some((name, sub)) => match registry.find(name) {
            Some(descriptor) => descriptor.run(sub),
            // clap rejects unknown subcommands before we get here
            None => ExitCode::from(EXIT_ERROR),
        },
        // subcommand_required makes clap handle the bare invocation
        None => ExitCode::from(EXIT_ERROR),
    }
}

/// Assemble the root command from a registry.
pub fn root_command(registry: &CommandRegistry) -> Command {
    let mut root = Command::new("pagesmith")
        .about("Pagesmith - build static sites from plain sources")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true);
    for descriptor in registry.list() {
        root = root.subcommand(descriptor.clap_command());
    }
    root
}

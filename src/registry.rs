//! Command registry
//!
//! An explicit, insertion-ordered table of the commands the CLI exposes.
//! Registration happens once, at startup, in [`CommandRegistry::builtin`];
//! the registry is read-only afterwards and is consulted only to assemble
//! the CLI surface, never during a build.

use std::process::ExitCode;

use clap::{ArgMatches, Command};

/// A command's registry record: its name, CLI surface, and runner.
///
/// Immutable once constructed; descriptors live for the whole process.
#[derive(Clone)]
pub struct CommandDescriptor {
    name: &'static str,
    command: fn() -> Command,
    runner: fn(&ArgMatches) -> ExitCode,
}

impl CommandDescriptor {
    /// Create a descriptor from a subcommand builder and its runner.
    pub fn new(
        name: &'static str,
        command: fn() -> Command,
        runner: fn(&ArgMatches) -> ExitCode,
    ) -> Self {
        Self { name, command, runner }
    }

    /// The unique subcommand name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Build this command's clap surface, including any contributed options.
    pub fn clap_command(&self) -> Command {
        (self.command)()
    }

    /// Run the command against its parsed arguments.
    pub fn run(&self, matches: &ArgMatches) -> ExitCode {
        (self.runner)(matches)
    }
}

impl std::fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandDescriptor").field("name", &self.name).finish()
    }
}

/// Ordered, append-only registry of command descriptors.
///
/// There is no ambient global instance: whoever bootstraps the CLI owns the
/// registry and passes it to [`crate::cli::root_command`]. Tests construct
/// fresh instances.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<CommandDescriptor>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a descriptor. Insertion order is the CLI listing order; there
    /// is no removal.
    pub fn register(&mut self, descriptor: CommandDescriptor) {
        self.commands.push(descriptor);
    }

    /// All registered descriptors, in registration order.
    pub fn list(&self) -> &[CommandDescriptor] {
        &self.commands
    }

    /// Look up a descriptor by subcommand name.
    pub fn find(&self, name: &str) -> Option<&CommandDescriptor> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// The built-in command table, assembled once at process startup.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(CommandDescriptor::new(
            "build",
            crate::cli::build::clap_command,
            crate::cli::build::run,
        ));
        registry.register(CommandDescriptor::new(
            "new",
            crate::cli::new::clap_command,
            crate::cli::new::run,
        ));
        registry
    }
}

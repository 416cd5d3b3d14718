//! New-site scaffold command

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use thiserror::Error;

use super::{EXIT_ERROR, EXIT_SUCCESS};
use crate::config::CONFIG_FILE;

/// Error during site scaffolding
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScaffoldError {
    /// Target directory exists and has contents
    #[error("Directory {0} exists and is not empty. Pass --force to use it anyway")]
    DirectoryNotEmpty(String),
    /// Failed to create a directory or write a file
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The new subcommand's clap surface.
pub fn clap_command() -> Command {
    Command::new("new")
        .about("Creates a new site scaffold at the given path")
        .arg(Arg::new("path").value_name("PATH").required(true).help("Where to scaffold the site"))
        .arg(
            Arg::new("force")
                .long("force")
                .action(ArgAction::SetTrue)
                .help("Scaffold into a non-empty directory"),
        )
}

/// Run the new command.
pub fn run(matches: &ArgMatches) -> ExitCode {
    let path = matches
        .get_one::<String>("path")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let force = matches.get_flag("force");

    match scaffold_site(&path, force) {
        Ok(()) => {
            println!("New site installed in {}.", path.display());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Create the site skeleton: config file, posts and drafts directories,
/// and a starter index page.
pub fn scaffold_site(path: &Path, force: bool) -> Result<(), ScaffoldError> {
    if path.exists() && !force {
        let is_empty = path.read_dir().map(|mut d| d.next().is_none()).unwrap_or(false);
        if !is_empty {
            return Err(ScaffoldError::DirectoryNotEmpty(path.display().to_string()));
        }
    }

    fs::create_dir_all(path.join("_posts"))?;
    fs::create_dir_all(path.join("_drafts"))?;
    fs::write(path.join(CONFIG_FILE), STARTER_CONFIG)?;
    fs::write(path.join("index.md"), STARTER_INDEX)?;
    Ok(())
}

const STARTER_CONFIG: &str = "\
# Site configuration. CLI flags override these values.
source = \".\"
destination = \"_site\"
";

const STARTER_INDEX: &str = "\
# Welcome

This site was scaffolded by pagesmith. Put posts in _posts and drafts in
_drafts, then run `pagesmith build`.
";

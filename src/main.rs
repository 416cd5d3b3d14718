//! Pagesmith - command-line static site builder

use std::process::ExitCode;

use pagesmith::cli;

fn main() -> ExitCode {
    cli::run()
}

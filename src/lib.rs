//! Pagesmith - orchestration core for a static-site generation CLI
//!
//! This library provides the glue around an external site-rendering
//! pipeline:
//! - An explicit registry of CLI commands, assembled once at startup
//! - The option set shared by every build-triggering command
//! - Glob computation for the source tree, excluding the build output
//! - A build invoker that reports the fatal "site could not be built"
//!   failure uniformly and exits with status 1

pub mod cli;
pub mod config;
pub mod globs;
pub mod invoke;
pub mod options;
pub mod registry;
pub mod site;

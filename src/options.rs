//! Shared build options
//!
//! Declares the option set common to every command that triggers a site
//! build, and the typed overrides extracted from parsed arguments. This is
//! declarative registration only; parsing and type coercion stay with clap.

use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command};

/// Canonical keys of the shared build options, in declaration order.
pub const BUILD_OPTION_KEYS: [&str; 8] = [
    "config",
    "future",
    "limit_posts",
    "watch",
    "lsi",
    "show_drafts",
    "quiet",
    "verbose",
];

/// Attach the shared build options to a command.
///
/// Every build-triggering command calls this on its own `clap::Command`, so
/// each gets an independent copy of the definitions. Flag spellings are part
/// of the compatibility surface and must not change.
pub fn add_build_options(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("config")
            .long("config")
            .value_name("FILE[,FILE2,...]")
            .value_delimiter(',')
            .action(ArgAction::Append)
            .help("Custom configuration file"),
    )
    .arg(
        Arg::new("future")
            .long("future")
            .action(ArgAction::SetTrue)
            .help("Publishes posts with a future date"),
    )
    .arg(
        Arg::new("limit_posts")
            .long("limit_posts")
            .value_name("MAX_POSTS")
            .value_parser(clap::value_parser!(usize))
            .help("Limits the number of posts to parse and publish"),
    )
    .arg(
        Arg::new("watch")
            .short('w')
            .long("watch")
            .action(ArgAction::SetTrue)
            .help("Watch for changes and rebuild"),
    )
    .arg(
        Arg::new("lsi")
            .long("lsi")
            .action(ArgAction::SetTrue)
            .help("Use LSI for improved related posts"),
    )
    .arg(
        Arg::new("show_drafts")
            .short('D')
            .long("drafts")
            .action(ArgAction::SetTrue)
            .help("Render posts in the _drafts folder"),
    )
    .arg(
        Arg::new("quiet")
            .short('q')
            .long("quiet")
            .action(ArgAction::SetTrue)
            .help("Silence output"),
    )
    .arg(
        Arg::new("verbose")
            .short('V')
            .long("verbose")
            .action(ArgAction::SetTrue)
            .help("Print verbose output"),
    )
}

/// CLI overrides merged over file-based configuration.
///
/// Fields left `None` were not given on the command line and cannot clobber
/// config-file values during the merge.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BuildOptions {
    /// Config files to load, in listed order (later wins)
    pub config: Option<Vec<PathBuf>>,
    /// Include posts dated after the current time
    pub future: Option<bool>,
    /// Cap on the number of posts considered
    pub limit_posts: Option<usize>,
    /// Rebuild on change (consumed by an external watcher)
    pub watch: Option<bool>,
    /// LSI-based related-content computation
    pub lsi: Option<bool>,
    /// Include draft content
    pub show_drafts: Option<bool>,
    /// Suppress non-error output
    pub quiet: Option<bool>,
    /// Emit detailed diagnostics
    pub verbose: Option<bool>,
}

impl BuildOptions {
    /// Extract overrides from parsed arguments.
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            config: matches
                .get_many::<String>("config")
                .map(|vals| vals.map(PathBuf::from).collect()),
            future: flag(matches, "future"),
            limit_posts: matches.get_one::<usize>("limit_posts").copied(),
            watch: flag(matches, "watch"),
            lsi: flag(matches, "lsi"),
            show_drafts: flag(matches, "show_drafts"),
            quiet: flag(matches, "quiet"),
            verbose: flag(matches, "verbose"),
        }
    }
}

/// A presence flag: given on the command line means `Some(true)`, absent
/// means no override.
fn flag(matches: &ArgMatches, id: &str) -> Option<bool> {
    if matches.get_flag(id) {
        Some(true)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_command() -> Command {
        add_build_options(Command::new("build").no_binary_name(true))
    }

    #[test]
    fn test_declares_exactly_the_build_option_keys() {
        let cmd = build_command();
        let ids: Vec<_> = cmd
            .get_arguments()
            .map(|a| a.get_id().as_str())
            .filter(|id| *id != "help" && *id != "version")
            .collect();
        assert_eq!(ids, BUILD_OPTION_KEYS);
    }

    #[test]
    fn test_each_command_gets_an_independent_copy() {
        let build = add_build_options(Command::new("build"));
        let serve = add_build_options(Command::new("serve"));
        assert_eq!(
            build.get_arguments().count(),
            serve.get_arguments().count()
        );
    }

    #[test]
    fn test_from_matches_extracts_all_overrides() {
        let matches = build_command()
            .try_get_matches_from([
                "--config",
                "a.toml,b.toml",
                "--future",
                "--limit_posts",
                "10",
                "-w",
                "--lsi",
                "-D",
                "-q",
                "-V",
            ])
            .expect("should parse");

        let options = BuildOptions::from_matches(&matches);
        assert_eq!(
            options.config,
            Some(vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")])
        );
        assert_eq!(options.future, Some(true));
        assert_eq!(options.limit_posts, Some(10));
        assert_eq!(options.watch, Some(true));
        assert_eq!(options.lsi, Some(true));
        assert_eq!(options.show_drafts, Some(true));
        assert_eq!(options.quiet, Some(true));
        assert_eq!(options.verbose, Some(true));
    }

    #[test]
    fn test_absent_flags_stay_none() {
        let matches = build_command().try_get_matches_from([] as [&str; 0]).expect("should parse");
        let options = BuildOptions::from_matches(&matches);
        assert_eq!(options, BuildOptions::default());
    }

    #[test]
    fn test_long_flag_spellings_accepted() {
        let matches = build_command()
            .try_get_matches_from(["--watch", "--drafts", "--quiet", "--verbose"])
            .expect("should parse");
        let options = BuildOptions::from_matches(&matches);
        assert_eq!(options.watch, Some(true));
        assert_eq!(options.show_drafts, Some(true));
        assert_eq!(options.quiet, Some(true));
        assert_eq!(options.verbose, Some(true));
    }

    #[test]
    fn test_limit_posts_rejects_non_integers() {
        let result = build_command().try_get_matches_from(["--limit_posts", "many"]);
        assert!(result.is_err());
    }
}

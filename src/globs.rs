//! Glob computation for site sources
//!
//! Produces the set of glob patterns covering everything under a source
//! directory except the build output. Consumers hand the patterns to an
//! external watcher or to discovery; nothing here touches the filesystem
//! beyond listing one directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Compute the glob patterns covering `source`, excluding `destination`.
///
/// Lists the immediate subdirectories of `source` (sorted by name), drops
/// any that refer to `destination`, and emits one `dir/**/*` pattern per
/// surviving directory followed by a bare `*` covering top-level files.
///
/// `destination` may be given as a bare name, a path relative to `source`,
/// or an absolute path; all spellings are excluded. A destination that does
/// not exist, or that lies outside `source`, simply never matches.
///
/// # Example
/// ```ignore
/// // source contains _layouts, _posts, _site
/// let patterns = site_globs(source, Path::new("_site"))?;
/// assert_eq!(patterns, ["_layouts/**/*", "_posts/**/*", "*"]);
/// ```
pub fn site_globs(source: &Path, destination: &Path) -> io::Result<Vec<String>> {
    let mut dirs: Vec<String> = Vec::new();
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        // symlinked directories count
        if entry.path().is_dir() {
            dirs.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    dirs.sort();

    let dest_literal = destination.to_string_lossy();
    let dest_canonical = canonical_destination(source, destination);

    let mut patterns: Vec<String> = Vec::new();
    for dir in dirs {
        if dir == dest_literal {
            continue;
        }
        if is_destination(source, &dir, dest_canonical.as_deref()) {
            continue;
        }
        patterns.push(format!("{}/**/*", dir));
    }
    patterns.push("*".to_string());
    Ok(patterns)
}

/// Resolve `destination` to a canonical absolute path for comparison.
///
/// A relative destination is taken relative to `source`, matching how build
/// commands resolve their output directory. Returns `None` when the path
/// cannot be canonicalized (typically: it does not exist yet).
fn canonical_destination(source: &Path, destination: &Path) -> Option<PathBuf> {
    let resolved = if destination.is_absolute() {
        destination.to_path_buf()
    } else {
        source.join(destination)
    };
    resolved.canonicalize().ok()
}

/// Check whether a top-level directory entry is the destination, comparing
/// symlink-resolved absolute paths.
fn is_destination(source: &Path, dir: &str, dest_canonical: Option<&Path>) -> bool {
    let Some(dest) = dest_canonical else {
        return false;
    };
    match source.join(dir).canonicalize() {
        Ok(candidate) => candidate == dest,
        Err(_) => false,
    }
}

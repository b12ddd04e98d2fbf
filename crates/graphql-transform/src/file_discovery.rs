use std::collections::BTreeSet;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;
use walkdir::WalkDir;

type Result<T> = std::result::Result<T, DiscoveryError>;

const GLOB_META_CHARS: [char; 3] = ['*', '?', '['];

/// Expand each glob pattern into the files it matches.
///
/// For every pattern, the longest leading run of path components without glob
/// metacharacters is walked recursively and every file under it is matched
/// against the full pattern. `*` and `?` never match a `/`; use `**` to match
/// across directories. A pattern without metacharacters names a single file.
///
/// The result is deduplicated across patterns and in lexical path order, so
/// the same inputs always transform in the same order.
pub(crate) fn discover_files(patterns: &[String]) -> Result<BTreeSet<PathBuf>> {
    let match_options = glob::MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    let mut file_paths = BTreeSet::new();
    for pattern in patterns {
        let glob_pattern = glob::Pattern::new(pattern)
            .map_err(|err| DiscoveryError::InvalidPattern {
                pattern: pattern.to_owned(),
                err,
            })?;

        // A pattern like `*.graphql` is relative to the current directory, but
        // walking `.` yields paths like `./a.graphql` that it would not match.
        let walk_root = walk_root(pattern);
        let strip_cur_dir = walk_root.as_os_str().is_empty();
        let walk_root =
            if strip_cur_dir {
                PathBuf::from(".")
            } else {
                walk_root
            };
        log::debug!("Searching {walk_root:?} for files matching `{pattern}`...");

        let mut num_matches = 0;
        for entry in WalkDir::new(&walk_root).follow_links(true).sort_by_file_name() {
            let entry = entry.map_err(|err| DiscoveryError::WalkError {
                pattern: pattern.to_owned(),
                err,
            })?;

            let path =
                if strip_cur_dir {
                    entry.path().strip_prefix(".").unwrap_or(entry.path())
                } else {
                    entry.path()
                };
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {path:?}.");
                continue;
            }

            if glob_pattern.matches_path_with(path, match_options) {
                log::trace!("Found file at {path:?}.");
                num_matches += 1;
                file_paths.insert(path.to_path_buf());
            }
        }

        if num_matches == 0 {
            log::warn!("No files matched `{pattern}`.");
        }
    }

    Ok(file_paths)
}

fn walk_root(pattern: &str) -> PathBuf {
    let mut root = PathBuf::new();
    for component in Path::new(pattern).components() {
        if let Component::Normal(part) = component
            && part.to_string_lossy().contains(GLOB_META_CHARS) {
            break;
        }
        root.push(component);
    }
    root
}

#[derive(Debug, Error)]
pub(crate) enum DiscoveryError {
    #[error("Invalid glob pattern `{pattern}`: {err}")]
    InvalidPattern {
        pattern: String,
        err: glob::PatternError,
    },

    #[error("Failed to search for files matching `{pattern}`: {err}")]
    WalkError {
        pattern: String,
        err: walkdir::Error,
    },
}

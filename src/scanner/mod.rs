mod filter;

pub use filter::IgnoreFilter;

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{DocstyleError, Result};

/// Find candidate files under `paths`, in deterministic discovery order.
///
/// Each result pairs the path with its `ignorable` flag from the ignore
/// filter; ignorable files are counted by the caller but never parsed.
/// Extension matching is exact, includes the leading dot, and applies to
/// directly-named files and walked files alike.
///
/// # Errors
/// Returns `InvalidPath` when a supplied path is neither a regular file
/// nor a directory; this aborts the whole run.
pub fn find_files(
    paths: &[PathBuf],
    extensions: &[String],
    filter: &IgnoreFilter,
) -> Result<Vec<(PathBuf, bool)>> {
    let mut found = Vec::new();
    for path in paths {
        if path.is_file() {
            if extension_matches(path, extensions) {
                found.push((path.clone(), filter.is_ignored(path)));
            }
        } else if path.is_dir() {
            for entry in WalkDir::new(path).sort_by_file_name() {
                let entry = entry.map_err(|e| match e.into_io_error() {
                    Some(io) => DocstyleError::Io(io),
                    None => DocstyleError::InvalidPath(path.clone()),
                })?;
                if !entry.file_type().is_file() {
                    continue;
                }
                let candidate = entry.into_path();
                if extension_matches(&candidate, extensions) {
                    let ignorable = filter.is_ignored(&candidate);
                    found.push((candidate, ignorable));
                }
            }
        } else {
            return Err(DocstyleError::InvalidPath(path.clone()));
        }
    }
    Ok(found)
}

fn extension_matches(path: &Path, extensions: &[String]) -> bool {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map_or_else(String::new, |e| format!(".{e}"));
    extensions.iter().any(|allowed| *allowed == ext)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

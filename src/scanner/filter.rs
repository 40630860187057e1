use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{DocstyleError, Result};

/// Glob-based ignore filter for `ignore-path` patterns. A file is ignored
/// when a pattern matches the file itself or any ancestor directory, so a
/// directory pattern excludes everything below it.
#[derive(Debug)]
pub struct IgnoreFilter {
    set: GlobSet,
}

impl IgnoreFilter {
    /// # Errors
    /// Returns `InvalidPattern` for a malformed glob.
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|source| DocstyleError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        let set = builder
            .build()
            .map_err(|source| DocstyleError::InvalidPattern {
                pattern: patterns.join(","),
                source,
            })?;
        Ok(Self { set })
    }

    #[must_use]
    pub fn is_ignored(&self, path: &Path) -> bool {
        if self.set.is_empty() {
            return false;
        }
        path.ancestors().any(|p| !p.as_os_str().is_empty() && self.set.is_match(p))
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;

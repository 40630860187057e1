use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::config::Config;

/// Resolves which diagnostic codes are suppressed for a given file by
/// merging the global ignore set with the per-path suppression map.
#[derive(Debug, Clone)]
pub struct IgnoreResolver {
    global: BTreeSet<String>,
    per_path: BTreeMap<String, BTreeSet<String>>,
}

impl IgnoreResolver {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            global: config.ignore.clone(),
            per_path: config.ignore_path_errors.clone(),
        }
    }

    /// Effective suppression set for one file: the global codes plus any
    /// codes registered for exactly this path.
    #[must_use]
    pub fn effective(&self, path: &Path) -> BTreeSet<String> {
        let mut effective = self.global.clone();
        let key = path.to_string_lossy();
        if let Some(codes) = self.per_path.get(key.as_ref()) {
            effective.extend(codes.iter().cloned());
        }
        effective
    }

    /// Whether a check can be skipped outright: every code it could report
    /// is already suppressed. Purely an optimization; the per-diagnostic
    /// filter below produces the same observable output.
    #[must_use]
    pub fn check_skippable(reports: &[&str], effective: &BTreeSet<String>) -> bool {
        reports.iter().all(|code| effective.contains(*code))
    }
}

#[cfg(test)]
#[path = "ignore_tests.rs"]
mod tests;

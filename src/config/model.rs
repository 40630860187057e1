use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::error::{DocstyleError, Result};
use crate::{DEFAULT_EXTENSIONS, MAX_LINE_LENGTH};

/// On-disk configuration, all fields optional. Kebab-case keys match the
/// command line flags. Merged with CLI overrides into a [`Config`].
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub max_line_length: Option<usize>,
    pub allow_long_titles: Option<bool>,
    pub sphinx: Option<bool>,
    #[serde(default)]
    pub ignore: Vec<String>,
    #[serde(default)]
    pub ignore_path: Vec<String>,
    /// Entries of the form `path;code;code`.
    #[serde(default)]
    pub ignore_path_errors: Vec<String>,
    pub file_encoding: Option<String>,
    pub default_extension: Option<String>,
    /// Appended to, never replacing, the built-in `.rst`/`.txt` defaults.
    #[serde(default)]
    pub extensions: Vec<String>,
    pub verbose: Option<bool>,
}

/// Effective run configuration. Built once at startup and treated as
/// immutable; every component takes it by reference at construction.
#[derive(Debug, Clone)]
pub struct Config {
    pub max_line_length: usize,
    pub allow_long_titles: bool,
    pub sphinx: bool,
    pub ignore: BTreeSet<String>,
    pub ignore_path: Vec<String>,
    pub ignore_path_errors: BTreeMap<String, BTreeSet<String>>,
    pub file_encoding: Option<String>,
    pub default_extension: String,
    pub extensions: Vec<String>,
    pub quiet: bool,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_line_length: MAX_LINE_LENGTH,
            allow_long_titles: false,
            sphinx: true,
            ignore: BTreeSet::new(),
            ignore_path: Vec::new(),
            ignore_path_errors: BTreeMap::new(),
            file_encoding: None,
            default_extension: String::new(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| (*s).to_string()).collect(),
            quiet: false,
            verbose: false,
        }
    }
}

/// Parse `path;code;code` suppression entries into a per-path code map.
/// Repeated paths accumulate.
///
/// # Errors
/// Fails fast with a `Config` error when an entry carries no `;`
/// separator, rather than surfacing the problem at check time.
pub fn parse_ignore_path_errors(
    entries: &[String],
) -> Result<BTreeMap<String, BTreeSet<String>>> {
    let mut map: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for entry in entries {
        let Some((path, codes)) = entry.split_once(';') else {
            return Err(DocstyleError::Config(format!(
                "Invalid ignore-path-errors entry (expected 'path;code;...'): {entry}"
            )));
        };
        let codes = codes
            .split(';')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);
        map.entry(path.trim().to_string()).or_default().extend(codes);
    }
    Ok(map)
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;

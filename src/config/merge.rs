use crate::cli::Cli;
use crate::error::Result;

use super::model::parse_ignore_path_errors;
use super::{Config, FileConfig};

/// Fold the on-disk configuration and CLI overrides into the final
/// immutable [`Config`].
///
/// Merge semantics follow the union rules the flags document: ignore codes
/// and per-path suppressions accumulate from both sources, extensions are
/// appended to the built-in defaults, and scalar flags from the command
/// line win over the file.
///
/// # Errors
/// Fails on malformed `ignore-path-errors` entries from either source.
pub fn build_config(file: Option<FileConfig>, cli: &Cli) -> Result<Config> {
    let file = file.unwrap_or_default();
    let mut config = Config::default();

    if let Some(max) = file.max_line_length {
        config.max_line_length = max;
    }
    if let Some(max) = cli.max_line_length {
        config.max_line_length = max;
    }

    config.allow_long_titles = cli.allow_long_titles || file.allow_long_titles.unwrap_or(false);
    config.sphinx = if cli.no_sphinx {
        false
    } else {
        file.sphinx.unwrap_or(true)
    };
    config.verbose = cli.verbose || file.verbose.unwrap_or(false);
    config.quiet = cli.quiet;

    config.ignore.extend(file.ignore.iter().map(|c| c.trim().to_string()));
    config.ignore.extend(cli.ignore.iter().map(|c| c.trim().to_string()));
    config.ignore.retain(|c| !c.is_empty());

    config.ignore_path.extend(file.ignore_path.iter().cloned());
    config.ignore_path.extend(cli.ignore_path.iter().cloned());

    config.ignore_path_errors = parse_ignore_path_errors(&file.ignore_path_errors)?;
    for (path, codes) in parse_ignore_path_errors(&cli.ignore_path_errors)? {
        config.ignore_path_errors.entry(path).or_default().extend(codes);
    }

    config
        .extensions
        .extend(file.extensions.iter().filter(|e| !e.trim().is_empty()).cloned());
    config
        .extensions
        .extend(cli.extensions.iter().filter(|e| !e.trim().is_empty()).cloned());

    if let Some(encoding) = &file.file_encoding {
        config.file_encoding = Some(encoding.clone());
    }
    if let Some(encoding) = &cli.file_encoding {
        config.file_encoding = Some(encoding.clone());
    }

    if let Some(ext) = &file.default_extension {
        config.default_extension = ext.clone();
    }
    if let Some(ext) = &cli.default_extension {
        config.default_extension = ext.clone();
    }

    Ok(config)
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;

use std::path::PathBuf;

use clap::Parser;

/// Check documentation for simple style requirements.
///
/// What is checked:
///     - invalid rst format - D000
///     - lines should not be longer than the configured maximum - D001
///     - no trailing whitespace - D002
///     - no tabulation for indentation - D003
///     - no carriage returns (use unix newlines) - D004
///     - no newline at end of file - D005
///     - no unknown directives - D006
#[derive(Parser, Debug)]
#[command(name = "docstyle")]
#[command(author, version, about = "Documentation style checker")]
#[command(long_about = "Check documentation for simple style requirements.\n\n\
    What is checked:\n    \
    - invalid rst format - D000\n    \
    - lines should not be longer than the configured maximum - D001\n    \
    - no trailing whitespace - D002\n    \
    - no tabulation for indentation - D003\n    \
    - no carriage returns (use unix newlines) - D004\n    \
    - no newline at end of file - D005\n    \
    - no unknown directives - D006\n\n\
    Exit codes:\n  \
    0 - All checks passed\n  \
    1 - Style violations found\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Paths to scan for doc files (default: current directory)
    #[arg(value_name = "path")]
    pub paths: Vec<PathBuf>,

    /// User config file location
    #[arg(long, value_name = "path")]
    pub config: Vec<PathBuf>,

    /// Skip loading configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Allow long section titles
    #[arg(long)]
    pub allow_long_titles: bool,

    /// Ignore the given error code(s) (comma-separated, repeatable)
    #[arg(long, value_name = "code", value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// Do not ignore sphinx specific false positives
    #[arg(long)]
    pub no_sphinx: bool,

    /// Ignore the given directory or file (globs are supported, repeatable)
    #[arg(long, value_name = "path")]
    pub ignore_path: Vec<String>,

    /// Ignore the given specific errors in the provided file
    /// (format: path;code;code, repeatable)
    #[arg(long, value_name = "path;code;code")]
    pub ignore_path_errors: Vec<String>,

    /// Default file extension to use when a file is found without one
    #[arg(long, value_name = "extension")]
    pub default_extension: Option<String>,

    /// Set input files text encoding
    #[arg(long, value_name = "encoding")]
    pub file_encoding: Option<String>,

    /// Maximum allowed line length
    #[arg(long, value_name = "int")]
    pub max_line_length: Option<usize>,

    /// Check file extensions of the given type, in addition to the
    /// built-in .rst and .txt (comma-separated, repeatable)
    #[arg(short = 'e', long = "extension", value_name = "extension", value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Only print violations
    #[arg(short, long)]
    pub quiet: bool,

    /// Run in verbose mode
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

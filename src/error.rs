use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocstyleError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid path: {0}")]
    InvalidPath(PathBuf),

    #[error("File not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),

    #[error("Failed to decode {path} as {encoding}")]
    Decode { path: PathBuf, encoding: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, DocstyleError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

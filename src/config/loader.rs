use std::fs;
use std::path::Path;

use crate::error::Result;

use super::FileConfig;

/// Configuration file names probed in the working directory, in order.
const LOCAL_CONFIG_NAMES: &[&str] = &["docstyle.toml", ".docstyle.toml"];

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default locations; `None` when no
    /// config file exists.
    ///
    /// # Errors
    /// Returns an error if a config file exists but cannot be read or
    /// parsed.
    fn load(&self) -> Result<Option<FileConfig>>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<FileConfig>;
}

#[derive(Debug, Default)]
pub struct FileConfigLoader;

impl FileConfigLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load(&self) -> Result<Option<FileConfig>> {
        for name in LOCAL_CONFIG_NAMES {
            let path = Path::new(name);
            if path.is_file() {
                return self.load_from_path(path).map(Some);
            }
        }
        Ok(None)
    }

    fn load_from_path(&self, path: &Path) -> Result<FileConfig> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

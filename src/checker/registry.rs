use crate::config::Config;

use super::{
    Check, CheckCarriageReturn, CheckIndentationNoTab, CheckKnownDirectives, CheckMaxLineLength,
    CheckNewlineEndOfFile, CheckTrailingWhitespace, CheckValidity,
};

/// Builds one check from the run configuration.
pub type CheckFactory = fn(&Config) -> Check;

/// Ordered check registration table. Built-ins come first in their fixed
/// order; additional checks run after them in registration order and are
/// counted the same way.
pub struct CheckRegistry {
    factories: Vec<CheckFactory>,
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl CheckRegistry {
    #[must_use]
    pub fn with_builtins() -> Self {
        let factories: Vec<CheckFactory> = vec![
            |cfg| Check::Document(Box::new(CheckValidity::new(cfg))),
            |cfg| Check::Line(Box::new(CheckTrailingWhitespace::new(cfg))),
            |cfg| Check::Line(Box::new(CheckIndentationNoTab::new(cfg))),
            |cfg| Check::Line(Box::new(CheckCarriageReturn::new(cfg))),
            |cfg| Check::Document(Box::new(CheckMaxLineLength::new(cfg))),
            |cfg| Check::Document(Box::new(CheckNewlineEndOfFile::new(cfg))),
            |cfg| Check::Document(Box::new(CheckKnownDirectives::new(cfg))),
        ];
        Self { factories }
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self {
            factories: Vec::new(),
        }
    }

    /// Append a check factory; it runs after everything already present.
    pub fn register(&mut self, factory: CheckFactory) {
        self.factories.push(factory);
    }

    /// Construct every registered check against one configuration. Each
    /// instance is stateless after this and reused across all files.
    #[must_use]
    pub fn instantiate(&self, config: &Config) -> Vec<Check> {
        self.factories.iter().map(|f| f(config)).collect()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;

use crate::config::Config;

use super::LineCheck;

/// D002: any whitespace character immediately before line end.
pub struct CheckTrailingWhitespace;

impl CheckTrailingWhitespace {
    #[must_use]
    pub const fn new(_config: &Config) -> Self {
        Self
    }
}

impl LineCheck for CheckTrailingWhitespace {
    fn name(&self) -> &'static str {
        "trailing-whitespace"
    }

    fn reports(&self) -> Option<&'static [&'static str]> {
        Some(&["D002"])
    }

    fn report(&self, line: &str) -> Vec<(String, String)> {
        if line.chars().next_back().is_some_and(char::is_whitespace) {
            vec![("D002".to_string(), "Trailing whitespace".to_string())]
        } else {
            Vec::new()
        }
    }
}

/// D003: a tab inside the leading whitespace run.
pub struct CheckIndentationNoTab;

impl CheckIndentationNoTab {
    #[must_use]
    pub const fn new(_config: &Config) -> Self {
        Self
    }
}

impl LineCheck for CheckIndentationNoTab {
    fn name(&self) -> &'static str {
        "indentation-no-tab"
    }

    fn reports(&self) -> Option<&'static [&'static str]> {
        Some(&["D003"])
    }

    fn report(&self, line: &str) -> Vec<(String, String)> {
        let indent: String = line.chars().take_while(|c| c.is_whitespace()).collect();
        if indent.contains('\t') {
            vec![(
                "D003".to_string(),
                "Tabulation used for indentation".to_string(),
            )]
        } else {
            Vec::new()
        }
    }
}

/// D004: a carriage return anywhere in the line.
pub struct CheckCarriageReturn;

impl CheckCarriageReturn {
    #[must_use]
    pub const fn new(_config: &Config) -> Self {
        Self
    }
}

impl LineCheck for CheckCarriageReturn {
    fn name(&self) -> &'static str {
        "carriage-return"
    }

    fn reports(&self) -> Option<&'static [&'static str]> {
        Some(&["D004"])
    }

    fn report(&self, line: &str) -> Vec<(String, String)> {
        if line.contains('\r') {
            vec![(
                "D004".to_string(),
                "Found literal carriage return".to_string(),
            )]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
#[path = "trivia_tests.rs"]
mod tests;

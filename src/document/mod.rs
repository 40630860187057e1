pub mod encoding;

pub use encoding::FileEncoding;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DocstyleError, Result};
use crate::parser::{BlockParser, Node, ParseIssue, StructuralParser};

/// Extension treated as structurally parseable markup.
const STRUCTURAL_EXTENSION: &str = ".rst";

/// One input file, with every heavy field computed on first access and
/// cached for the life of the document. Nothing is ever recomputed or
/// invalidated; the run is single-threaded, so plain `Option` caches behind
/// `&mut self` are all the synchronization needed.
pub struct Document {
    path: PathBuf,
    extension: String,
    forced_encoding: Option<FileEncoding>,
    parser: Box<dyn StructuralParser>,
    encoding: Option<FileEncoding>,
    raw: Option<Vec<u8>>,
    text: Option<String>,
    raw_lines: Option<Vec<Vec<u8>>>,
    tree: Option<Node>,
    issues: Option<Vec<ParseIssue>>,
}

impl Document {
    /// Open `path` as a document.
    ///
    /// `default_extension` is used when the path itself has none, matching
    /// the `default-extension` configuration option.
    ///
    /// # Errors
    /// Returns `NotFound` when `path` is not a regular file.
    pub fn load(
        path: impl Into<PathBuf>,
        forced_encoding: Option<FileEncoding>,
        default_extension: &str,
    ) -> Result<Self> {
        let path = path.into();
        if !path.is_file() {
            return Err(DocstyleError::NotFound(path));
        }
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map_or_else(|| default_extension.to_string(), |e| format!(".{e}"));
        Ok(Self {
            path,
            extension,
            forced_encoding,
            parser: Box::new(BlockParser::new()),
            encoding: None,
            raw: None,
            text: None,
            raw_lines: None,
            tree: None,
            issues: None,
        })
    }

    /// Replace the structural parser. Useful for injecting a different
    /// markup parser; documents default to the built-in block parser.
    #[must_use]
    pub fn with_parser(mut self, parser: Box<dyn StructuralParser>) -> Self {
        self.parser = parser;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Extension including the leading dot, e.g. `.rst`; empty when the
    /// path has none and no default was configured.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Whether this document gets a structural parse.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        self.extension.eq_ignore_ascii_case(STRUCTURAL_EXTENSION)
    }

    /// Resolved encoding: the forced one if configured, otherwise detected
    /// once from the raw bytes.
    ///
    /// # Errors
    /// Returns `FileRead` if the file cannot be read.
    pub fn encoding(&mut self) -> Result<FileEncoding> {
        if let Some(enc) = self.encoding {
            return Ok(enc);
        }
        let enc = match self.forced_encoding {
            Some(forced) => forced,
            None => {
                self.ensure_raw()?;
                encoding::detect(self.raw.as_deref().unwrap_or_default())
            }
        };
        self.encoding = Some(enc);
        Ok(enc)
    }

    /// Byte-exact file content.
    ///
    /// # Errors
    /// Returns `FileRead` if the file cannot be read.
    pub fn raw_bytes(&mut self) -> Result<&[u8]> {
        self.ensure_raw()?;
        Ok(self.raw.as_deref().unwrap_or_default())
    }

    /// Whole-file decoded content.
    ///
    /// # Errors
    /// Returns `Decode` when the bytes are invalid for the resolved
    /// encoding; the failure has no line number.
    pub fn text(&mut self) -> Result<&str> {
        if self.text.is_none() {
            let enc = self.encoding()?;
            self.ensure_raw()?;
            let raw = self.raw.as_deref().unwrap_or_default();
            let decoded = enc.decode(raw).ok_or_else(|| DocstyleError::Decode {
                path: self.path.clone(),
                encoding: enc.label().to_string(),
            })?;
            self.text = Some(decoded);
        }
        Ok(self.text.as_deref().unwrap_or_default())
    }

    /// Raw byte lines, newline bytes preserved.
    ///
    /// # Errors
    /// Returns `FileRead` if the file cannot be read.
    pub fn raw_lines(&mut self) -> Result<&[Vec<u8>]> {
        if self.raw_lines.is_none() {
            self.ensure_raw()?;
            let raw = self.raw.as_deref().unwrap_or_default();
            let split: Vec<Vec<u8>> = raw
                .split_inclusive(|&b| b == b'\n')
                .map(<[u8]>::to_vec)
                .collect();
            self.raw_lines = Some(split);
        }
        Ok(self.raw_lines.as_deref().unwrap_or_default())
    }

    /// Decoded view of the cached raw lines; re-derived per call, never
    /// re-reads the file. `strip_newline` removes a single trailing `\n`
    /// (carriage returns stay, so the corresponding check still sees them).
    ///
    /// # Errors
    /// Returns `Decode` when any line is invalid for the resolved encoding.
    pub fn lines(&mut self, strip_newline: bool) -> Result<Vec<String>> {
        let enc = self.encoding()?;
        let path = self.path.clone();
        let mut decoded = Vec::with_capacity(self.raw_lines()?.len());
        for raw_line in self.raw_lines()? {
            let mut line = enc.decode(raw_line).ok_or_else(|| DocstyleError::Decode {
                path: path.clone(),
                encoding: enc.label().to_string(),
            })?;
            if strip_newline && line.ends_with('\n') {
                line.pop();
            }
            decoded.push(line);
        }
        Ok(decoded)
    }

    /// Root of the structural parse tree. Parsing is pure and runs at most
    /// once per document.
    ///
    /// # Errors
    /// Returns `Decode` when the document text cannot be decoded.
    pub fn structural_tree(&mut self) -> Result<&Node> {
        self.ensure_parsed()?;
        match self.tree.as_ref() {
            Some(tree) => Ok(tree),
            None => unreachable!("tree cached by ensure_parsed"),
        }
    }

    /// Ordered parser-reported problems.
    ///
    /// # Errors
    /// Returns `Decode` when the document text cannot be decoded.
    pub fn structural_issues(&mut self) -> Result<&[ParseIssue]> {
        self.ensure_parsed()?;
        Ok(self.issues.as_deref().unwrap_or_default())
    }

    fn ensure_raw(&mut self) -> Result<()> {
        if self.raw.is_none() {
            let bytes = fs::read(&self.path).map_err(|source| DocstyleError::FileRead {
                path: self.path.clone(),
                source,
            })?;
            self.raw = Some(bytes);
        }
        Ok(())
    }

    fn ensure_parsed(&mut self) -> Result<()> {
        if self.tree.is_some() {
            return Ok(());
        }
        let text = self.text()?.to_owned();
        let (tree, issues) = self.parser.parse(&text);
        self.tree = Some(tree);
        self.issues = Some(issues);
        Ok(())
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

use crate::error::{DocstyleError, Result};

/// Text encodings the document model can decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileEncoding {
    Utf8,
    Utf16Le,
    Utf16Be,
    Latin1,
}

impl FileEncoding {
    /// Resolve a user-supplied encoding label.
    ///
    /// # Errors
    /// Returns `UnknownEncoding` for labels outside the supported set.
    pub fn from_label(label: &str) -> Result<Self> {
        let normalized: String = label
            .to_ascii_lowercase()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect();
        match normalized.as_str() {
            "utf8" => Ok(Self::Utf8),
            "utf16le" | "utf16" => Ok(Self::Utf16Le),
            "utf16be" => Ok(Self::Utf16Be),
            "latin1" | "iso88591" => Ok(Self::Latin1),
            _ => Err(DocstyleError::UnknownEncoding(label.to_string())),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf16Le => "utf-16-le",
            Self::Utf16Be => "utf-16-be",
            Self::Latin1 => "latin-1",
        }
    }

    /// Decode bytes under this encoding. `None` means the bytes are not
    /// valid for the encoding; the caller reports the whole file as
    /// undecodable.
    #[must_use]
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            Self::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
            Self::Utf16Le => decode_utf16(bytes, u16::from_le_bytes),
            Self::Utf16Be => decode_utf16(bytes, u16::from_be_bytes),
            // Every byte maps to the code point of the same value.
            Self::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }
}

fn decode_utf16(bytes: &[u8], to_u16: fn([u8; 2]) -> u16) -> Option<String> {
    if bytes.len() % 2 != 0 {
        return None;
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| to_u16([pair[0], pair[1]]))
        .collect();
    char::decode_utf16(units).collect::<std::result::Result<String, _>>().ok()
}

/// Heuristic encoding detection: BOM sniff first, then strict UTF-8
/// validation, with Latin-1 as the total fallback (it decodes any byte
/// sequence, so detection itself cannot fail).
#[must_use]
pub fn detect(bytes: &[u8]) -> FileEncoding {
    if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        return FileEncoding::Utf8;
    }
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return FileEncoding::Utf16Le;
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return FileEncoding::Utf16Be;
    }
    if std::str::from_utf8(bytes).is_ok() {
        return FileEncoding::Utf8;
    }
    FileEncoding::Latin1
}

#[cfg(test)]
#[path = "encoding_tests.rs"]
mod tests;

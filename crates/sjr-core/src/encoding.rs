//! Character encodings used when cutting string values.
//!
//! Budgets are always measured in bytes, but a string is cut by a count of
//! *characters* of the chosen encoding so that a multi-byte character is
//! never split.

use crate::error::{Result, SjrError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Encoding {
    /// Count Unicode scalar values.
    #[default]
    Utf8,
    /// Count UTF-16 code units. A surrogate pair is kept or dropped whole.
    Utf16,
    /// Single-byte encodings (8bit, ASCII, Latin-1). Counts bytes, backing
    /// off to the previous character boundary.
    Bytes,
}

impl Encoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Utf16 => "UTF-16",
            Self::Bytes => "8bit",
        }
    }

    /// Number of characters in `text` under this encoding.
    pub fn char_len(&self, text: &str) -> usize {
        match self {
            Self::Utf8 => text.chars().count(),
            Self::Utf16 => text.encode_utf16().count(),
            Self::Bytes => text.len(),
        }
    }

    /// Longest prefix of `text` holding at most `max_chars` characters.
    pub fn truncate<'a>(&self, text: &'a str, max_chars: usize) -> &'a str {
        match self {
            Self::Utf8 => match text.char_indices().nth(max_chars) {
                Some((idx, _)) => &text[..idx],
                None => text,
            },
            Self::Utf16 => {
                let mut units = 0;
                for (idx, ch) in text.char_indices() {
                    units += ch.len_utf16();
                    if units > max_chars {
                        return &text[..idx];
                    }
                }
                text
            }
            Self::Bytes => {
                if max_chars >= text.len() {
                    return text;
                }
                let mut cut = max_chars;
                while !text.is_char_boundary(cut) {
                    cut -= 1;
                }
                &text[..cut]
            }
        }
    }
}

impl FromStr for Encoding {
    type Err = SjrError;

    fn from_str(label: &str) -> Result<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "utf-16" | "utf16" | "utf-16le" | "utf-16be" | "ucs-2" => Ok(Self::Utf16),
            "8bit" | "ascii" | "us-ascii" | "iso-8859-1" | "latin1" | "binary" => Ok(Self::Bytes),
            _ => Err(SjrError::UnknownEncoding(label.to_string())),
        }
    }
}

impl TryFrom<String> for Encoding {
    type Error = SjrError;

    fn try_from(label: String) -> Result<Self> {
        label.parse()
    }
}

impl From<Encoding> for String {
    fn from(encoding: Encoding) -> Self {
        encoding.as_str().to_string()
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::MatchError;

/// Which side of the comparison a piece of text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Resume,
    JobDescription,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Resume => f.write_str("resume"),
            DocumentKind::JobDescription => f.write_str("job description"),
        }
    }
}

/// Raw text handed over by the upload/PDF layer. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    kind: DocumentKind,
    text: String,
}

impl Document {
    /// Wraps already-decoded text, rejecting payloads that are clearly binary.
    pub fn new(kind: DocumentKind, text: impl Into<String>) -> Result<Self, MatchError> {
        let text = text.into();
        if let Some(reason) = binary_payload_reason(&text) {
            return Err(MatchError::InvalidEncoding { kind, reason });
        }
        Ok(Self { kind, text })
    }

    /// Decodes raw bytes as UTF-8.
    pub fn from_bytes(kind: DocumentKind, bytes: &[u8]) -> Result<Self, MatchError> {
        let text = std::str::from_utf8(bytes).map_err(|e| MatchError::InvalidEncoding {
            kind,
            reason: format!("not valid UTF-8 ({e})"),
        })?;
        Self::new(kind, text)
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// NUL bytes or a high share of control characters mean a file body leaked
/// through instead of extracted text.
fn binary_payload_reason(text: &str) -> Option<String> {
    if text.contains('\0') {
        return Some("contains NUL bytes".to_string());
    }

    let total = text.chars().count();
    let control = text
        .chars()
        .filter(|c| c.is_control() && !c.is_whitespace())
        .count();

    if total > 0 && control * 20 > total {
        return Some(format!(
            "{control} of {total} characters are control characters"
        ));
    }
    None
}

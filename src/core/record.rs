//! Credential file line format.
//!
//! ```text
//! <site>:<ciphertext-text>
//! ```
//!
//! One entry per line. Blank lines and lines whose trimmed content starts
//! with `#` are comments. Lines without a `:` are ignored.

use std::fmt;

use crate::core::constants::{COMMENT_PREFIX, SEPARATOR};
use crate::error::ValidationError;

/// A classified line of a credential file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty or whitespace only
    Blank,
    /// Starts with `#` after trimming
    Comment,
    /// No separator present
    Malformed,
    /// Site and ciphertext, both trimmed
    Entry { site: &'a str, ciphertext: &'a str },
}

/// Classify one line. Splits on the first `:` only.
pub fn parse_line(raw: &str) -> Line<'_> {
    let line = raw.trim();
    if line.is_empty() {
        return Line::Blank;
    }
    if line.starts_with(COMMENT_PREFIX) {
        return Line::Comment;
    }

    match line.split_once(SEPARATOR) {
        Some((site, ciphertext)) => Line::Entry {
            site: site.trim(),
            ciphertext: ciphertext.trim(),
        },
        None => Line::Malformed,
    }
}

/// Render one entry as a newline-terminated line.
pub fn format_line(site: &str, ciphertext: &str) -> String {
    format!("{}{}{}\n", site, SEPARATOR, ciphertext)
}

/// Parse a `SITE=SECRET` argument.
///
/// Splits on the first `=`, so the secret may itself contain `=`.
///
/// # Errors
///
/// Returns `ValidationError::InvalidEntry` if there is no `=`.
pub fn parse_entry(arg: &str) -> Result<(String, String), ValidationError> {
    arg.split_once('=')
        .map(|(site, secret)| (site.to_string(), secret.to_string()))
        .ok_or_else(|| ValidationError::InvalidEntry(arg.to_string()))
}

/// Outcome of a lookup.
///
/// Absence is an ordinary value, not an error. `Display` renders the secret
/// or the "not found" message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Found(&'a str),
    Missing(&'a str),
}

impl<'a> Lookup<'a> {
    /// The secret, if present.
    pub fn found(self) -> Option<&'a str> {
        match self {
            Self::Found(secret) => Some(secret),
            Self::Missing(_) => None,
        }
    }

    /// Whether the site was present.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl fmt::Display for Lookup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(secret) => f.write_str(secret),
            Self::Missing(site) => write!(f, "no password stored for '{}'", site),
        }
    }
}

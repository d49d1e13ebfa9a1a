//! Error types.
//!
//! `Error` is the single type returned by every fallible operation. The
//! sub-enums group failures by the layer that detects them.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    /// A key-requiring operation ran before a key was generated or loaded.
    #[error("no key loaded: generate or load a key first")]
    NoActiveKey,

    /// A file could not be created, opened, read, or written.
    #[error("failed to {op} {}: {source}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A persisted entry could not be decrypted under the active key.
    #[error("failed to decrypt entry on line {line} of {}: key mismatch likely", path.display())]
    Decryption {
        path: PathBuf,
        line: usize,
        #[source]
        source: CipherError,
    },

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Build a closure mapping an `io::Error` into `Error::Io` for `path`.
    ///
    /// Intended for `map_err`: `fs::read(p).map_err(Error::io("read key file", p))`.
    pub fn io(op: &'static str, path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { op, path, source }
    }

    /// True when the failure is a decryption failure during a file load.
    pub fn is_key_mismatch(&self) -> bool {
        matches!(self, Self::Decryption { .. })
    }
}

/// Encryption backend failures.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("malformed key: {0}")]
    MalformedKey(String),

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),
}

/// Rejected user input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("site name cannot be empty")]
    EmptySite,

    #[error("invalid site name '{site}': {reason}")]
    InvalidSite { site: String, reason: &'static str },

    #[error("invalid entry '{0}': expected SITE=SECRET")]
    InvalidEntry(String),
}

/// Configuration failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("no {0} path given: pass --{0}, set the environment variable, or add it to the config file")]
    MissingPath(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

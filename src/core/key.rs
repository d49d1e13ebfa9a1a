//! Key management.
//!
//! A `Key` is 32 random bytes stored as URL-safe base64. The key file holds
//! exactly those encoded bytes with no framing. `KeyManager` holds at most
//! one active key and replaces it wholesale on every generate or load.

use std::fs;
use std::path::Path;

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants::KEY_LEN;
use crate::core::files;
use crate::error::{CipherError, Error, Result};

/// Encoded key material as read from (or written to) a key file.
///
/// Bytes are kept verbatim; they are only decoded when a cipher uses them,
/// so a malformed key file surfaces at first encrypt or decrypt.
#[derive(Clone)]
pub struct Key {
    encoded: Zeroizing<Vec<u8>>,
}

impl Key {
    /// Fresh key from the operating system RNG.
    pub fn generate() -> Self {
        let mut raw = Zeroizing::new([0u8; KEY_LEN]);
        OsRng.fill_bytes(&mut raw[..]);
        Self {
            encoded: Zeroizing::new(URL_SAFE.encode(&raw[..]).into_bytes()),
        }
    }

    /// Wrap bytes exactly as they appear in a key file.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            encoded: Zeroizing::new(bytes),
        }
    }

    /// Bytes as written to the key file.
    pub fn as_bytes(&self) -> &[u8] {
        &self.encoded
    }

    /// Decode to raw key material.
    ///
    /// Surrounding ASCII whitespace is ignored so a key file with a trailing
    /// newline still works.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::MalformedKey` if the bytes are not base64 or do
    /// not decode to exactly `KEY_LEN` bytes.
    pub(crate) fn material(&self) -> std::result::Result<Zeroizing<[u8; KEY_LEN]>, CipherError> {
        let decoded = Zeroizing::new(
            URL_SAFE
                .decode(self.encoded.trim_ascii())
                .map_err(|e| CipherError::MalformedKey(format!("invalid base64: {}", e)))?,
        );

        if decoded.len() != KEY_LEN {
            return Err(CipherError::MalformedKey(format!(
                "expected {} bytes, got {}",
                KEY_LEN,
                decoded.len()
            )));
        }

        let mut material = Zeroizing::new([0u8; KEY_LEN]);
        material[..].copy_from_slice(&decoded[..]);
        Ok(material)
    }
}

impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Key").field("len", &self.encoded.len()).finish()
    }
}

/// Holds the single active key.
#[derive(Debug, Default)]
pub struct KeyManager {
    active: Option<Key>,
}

impl KeyManager {
    /// Manager with no active key.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a fresh key, write it to `path`, and make it active.
    ///
    /// Any existing file at `path` is overwritten without backup. The new key
    /// only becomes active once it is on disk.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be created or written.
    pub fn generate(&mut self, path: &Path) -> Result<&Key> {
        debug!(path = %path.display(), "generating key");

        let key = Key::generate();
        files::write_private(path, key.as_bytes(), "write key file")?;

        debug!(path = %path.display(), "key saved");
        Ok(&*self.active.insert(key))
    }

    /// Read key bytes from `path` and make them the active key.
    ///
    /// The bytes are not validated here. On failure the previously active
    /// key (if any) stays active.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be read.
    pub fn load(&mut self, path: &Path) -> Result<&Key> {
        debug!(path = %path.display(), "loading key");

        files::warn_if_exposed(path);
        let bytes = fs::read(path).map_err(Error::io("read key file", path))?;

        debug!(len = bytes.len(), "key loaded");
        Ok(&*self.active.insert(Key::from_bytes(bytes)))
    }

    /// Replace the active key with one already in memory.
    pub fn set(&mut self, key: Key) -> &Key {
        self.active.insert(key)
    }

    /// The active key.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoActiveKey` if none has been generated or loaded.
    pub fn require(&self) -> Result<&Key> {
        self.active.as_ref().ok_or(Error::NoActiveKey)
    }

    /// Whether a key is active.
    pub fn has_key(&self) -> bool {
        self.active.is_some()
    }
}

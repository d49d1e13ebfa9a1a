//! Credential store.
//!
//! `CredentialStore` owns the active key, the bound credential file, and the
//! in-memory map of site to plaintext secret. Writes are encrypted and
//! appended to the bound file; loads decrypt every entry of a file into
//! memory; reads never touch the disk.
//!
//! Invariants:
//! - at most one key is active, and it is used for every encrypt/decrypt
//! - at most one file is bound, and only `create_file`/`load_file` rebind it
//! - every line the store writes holds ciphertext, never plaintext

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::core::cipher::{Cipher, XChaCha};
use crate::core::files;
use crate::core::key::{Key, KeyManager};
use crate::core::record::{self, Line, Lookup};
use crate::core::types::SiteId;
use crate::core::validation::validate_site;
use crate::error::{Error, Result};

/// Encrypted, file-backed credential store.
pub struct CredentialStore<C: Cipher = XChaCha> {
    keys: KeyManager,
    file: Option<PathBuf>,
    entries: BTreeMap<SiteId, Zeroizing<String>>,
    cipher: C,
}

impl CredentialStore<XChaCha> {
    /// Empty store using the default cipher, with no key and no file.
    pub fn new() -> Self {
        Self::with_cipher(XChaCha)
    }
}

impl Default for CredentialStore<XChaCha> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Cipher> CredentialStore<C> {
    /// Empty store using `cipher`.
    pub fn with_cipher(cipher: C) -> Self {
        Self {
            keys: KeyManager::new(),
            file: None,
            entries: BTreeMap::new(),
            cipher,
        }
    }

    /// Generate a key at `path` and make it active.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the key file cannot be written.
    pub fn generate_key(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.keys.generate(path.as_ref())?;
        Ok(())
    }

    /// Load the key at `path` and make it active.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the key file cannot be read.
    pub fn load_key(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.keys.load(path.as_ref())?;
        Ok(())
    }

    /// Make an in-memory key active.
    pub fn set_key(&mut self, key: Key) {
        self.keys.set(key);
    }

    /// Create (or truncate) the credential file at `path` and bind it.
    ///
    /// # Errors
    ///
    /// See [`create_file_with`](Self::create_file_with).
    pub fn create_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.create_file_with(path, std::iter::empty::<(&str, &str)>())
    }

    /// Create the credential file at `path` seeded with `entries`, and bind it.
    ///
    /// Every entry is validated and encrypted before anything is written. The
    /// file content is written to `<path>.tmp` and renamed over `path`, so a
    /// crash leaves either the old file or the complete new one. On success
    /// the in-memory map holds exactly `entries` (later duplicates win) and
    /// the previously bound file, if any, is left untouched on disk.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoActiveKey` before touching anything if no key is
    /// active, `Error::Validation` for a bad site, `Error::Cipher` if the key
    /// is malformed, and `Error::Io` if the file cannot be written.
    pub fn create_file_with<I, S, P>(&mut self, path: impl AsRef<Path>, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (S, P)>,
        S: AsRef<str>,
        P: AsRef<str>,
    {
        let path = path.as_ref();
        let key = self.keys.require()?;
        debug!(path = %path.display(), "creating credential file");

        let mut contents = Zeroizing::new(String::new());
        let mut seeded = BTreeMap::new();
        for (site, secret) in entries {
            let (site, secret) = (site.as_ref(), secret.as_ref());
            validate_site(site)?;
            let ciphertext = self.cipher.encrypt(secret, key)?;
            contents.push_str(&record::format_line(site, &ciphertext));
            seeded.insert(site.to_string(), Zeroizing::new(secret.to_string()));
        }

        files::replace_private(path, contents.as_bytes(), "create credential file")?;

        debug!(path = %path.display(), entries = seeded.len(), "credential file created");
        self.file = Some(path.to_path_buf());
        self.entries = seeded;
        Ok(())
    }

    /// Bind the credential file at `path` and load every entry into memory.
    ///
    /// The map is cleared first. Blank lines, comments, and lines without a
    /// `:` are skipped. Loading stops at the first entry that fails to
    /// decrypt; entries read before it stay in memory.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoActiveKey` before touching anything if no key is
    /// active, `Error::Io` if the file cannot be read, and
    /// `Error::Decryption` if any entry does not decrypt under the active key.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let key = self.keys.require()?;
        debug!(path = %path.display(), "loading credential file");

        self.entries.clear();
        self.file = Some(path.to_path_buf());

        let file = File::open(path).map_err(Error::io("open credential file", path))?;
        let mut skipped = 0usize;

        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = Zeroizing::new(line.map_err(Error::io("read credential file", path))?);

            match record::parse_line(&line) {
                Line::Blank | Line::Comment => {}
                Line::Malformed => {
                    trace!(line = index + 1, "skipping line without separator");
                    skipped += 1;
                }
                Line::Entry { site, ciphertext } => {
                    let secret =
                        self.cipher
                            .decrypt(ciphertext, key)
                            .map_err(|source| Error::Decryption {
                                path: path.to_path_buf(),
                                line: index + 1,
                                source,
                            })?;
                    self.entries.insert(site.to_string(), secret);
                }
            }
        }

        debug!(entries = self.entries.len(), skipped, "credential file loaded");
        Ok(())
    }

    /// Store `secret` for `site`, appending an encrypted line if a file is bound.
    ///
    /// The in-memory map is updated first. If the append then fails, the
    /// error is returned and memory keeps the new value. With no bound file
    /// the entry lives only in memory.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoActiveKey` if no key is active and
    /// `Error::Validation` for a bad site (nothing is changed in either
    /// case), `Error::Cipher` if encryption fails, and `Error::Io` if the
    /// append fails.
    pub fn add_password(&mut self, site: &str, secret: &str) -> Result<()> {
        let key = self.keys.require()?;
        validate_site(site)?;

        self.entries
            .insert(site.to_string(), Zeroizing::new(secret.to_string()));

        if let Some(path) = &self.file {
            let ciphertext = self.cipher.encrypt(secret, key)?;
            let line = record::format_line(site, &ciphertext);
            files::append_private(path, line.as_bytes(), "append to credential file")?;
            debug!(path = %path.display(), "credential appended");
        } else {
            debug!("no credential file bound, kept in memory");
        }

        Ok(())
    }

    /// Look up the secret for `site`.
    pub fn get_password<'a>(&'a self, site: &'a str) -> Lookup<'a> {
        match self.entries.get(site) {
            Some(secret) => Lookup::Found(secret.as_str()),
            None => Lookup::Missing(site),
        }
    }

    /// Whether a secret is stored for `site`.
    pub fn contains(&self, site: &str) -> bool {
        self.entries.contains_key(site)
    }

    /// Stored site names in sorted order.
    pub fn sites(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a key is active.
    pub fn has_key(&self) -> bool {
        self.keys.has_key()
    }

    /// The bound credential file, if any.
    pub fn bound_file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

}

impl<C: Cipher> std::fmt::Debug for CredentialStore<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore")
            .field("cipher", &self.cipher.name())
            .field("has_key", &self.keys.has_key())
            .field("file", &self.file)
            .field("sites", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

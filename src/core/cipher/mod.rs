//! Cryptographic operations.
//!
//! Every credential is sealed individually under the active key. The
//! `Cipher` trait is the seam between the store and the algorithm; the
//! default (and only) backend is XChaCha20-Poly1305.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Cipher` trait in a new file
//! 2. Re-export it from this module
//! 3. Use it with `CredentialStore::with_cipher`

use zeroize::Zeroizing;

use crate::core::key::Key;
use crate::core::types::CiphertextText;
use crate::error::CipherError;

mod xchacha;

pub use xchacha::XChaCha;

/// Symmetric authenticated encryption backend.
pub trait Cipher {
    /// Encrypt `plaintext` under `key`.
    ///
    /// Output must be a single line of text and must differ between calls
    /// for the same plaintext.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::MalformedKey` if the key bytes are unusable.
    fn encrypt(&self, plaintext: &str, key: &Key) -> Result<CiphertextText, CipherError>;

    /// Decrypt a token produced by `encrypt` with the same key.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::DecryptionFailed` if the token is malformed or
    /// does not authenticate under `key`.
    fn decrypt(&self, token: &str, key: &Key) -> Result<Zeroizing<String>, CipherError>;

    /// Backend name for display.
    fn name(&self) -> &'static str;
}

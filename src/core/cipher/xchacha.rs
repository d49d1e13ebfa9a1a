//! XChaCha20-Poly1305 backend.
//!
//! Token layout before base64 (URL-safe, padded):
//!
//! ```text
//! version (1 byte) || nonce (24 bytes) || ciphertext + tag
//! ```

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use chacha20poly1305::aead::{Aead, KeyInit};
use chacha20poly1305::{XChaCha20Poly1305, XNonce};
use rand::Rng;
use tracing::trace;
use zeroize::Zeroizing;

use super::Cipher;
use crate::core::constants::{FORMAT_VERSION, NONCE_LEN};
use crate::core::key::Key;
use crate::core::types::CiphertextText;
use crate::error::CipherError;

/// XChaCha20-Poly1305 with a random nonce per message.
#[derive(Debug, Default, Clone, Copy)]
pub struct XChaCha;

impl XChaCha {
    fn aead(key: &Key) -> Result<XChaCha20Poly1305, CipherError> {
        let material = key.material()?;
        XChaCha20Poly1305::new_from_slice(&material[..])
            .map_err(|e| CipherError::MalformedKey(e.to_string()))
    }
}

impl Cipher for XChaCha {
    fn name(&self) -> &'static str {
        "xchacha20poly1305"
    }

    fn encrypt(&self, plaintext: &str, key: &Key) -> Result<CiphertextText, CipherError> {
        trace!(plaintext_len = plaintext.len(), "encrypting");

        let aead = Self::aead(key)?;

        let mut nonce = [0u8; NONCE_LEN];
        rand::thread_rng().fill(&mut nonce);

        let sealed = aead
            .encrypt(XNonce::from_slice(&nonce), plaintext.as_bytes())
            .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;

        let mut raw = Vec::with_capacity(1 + NONCE_LEN + sealed.len());
        raw.push(FORMAT_VERSION);
        raw.extend_from_slice(&nonce);
        raw.extend_from_slice(&sealed);

        let token = URL_SAFE.encode(raw);
        trace!(token_len = token.len(), "encrypted");
        Ok(token)
    }

    fn decrypt(&self, token: &str, key: &Key) -> Result<Zeroizing<String>, CipherError> {
        trace!(token_len = token.len(), "decrypting");

        let aead = Self::aead(key)?;

        let raw = URL_SAFE
            .decode(token.trim())
            .map_err(|e| CipherError::DecryptionFailed(format!("invalid base64: {}", e)))?;

        let (version, rest) = raw
            .split_first()
            .ok_or_else(|| CipherError::DecryptionFailed("empty token".to_string()))?;
        if *version != FORMAT_VERSION {
            return Err(CipherError::DecryptionFailed(format!(
                "unsupported token version {:#04x}",
                version
            )));
        }
        if rest.len() < NONCE_LEN {
            return Err(CipherError::DecryptionFailed("token is truncated".to_string()));
        }

        let (nonce, sealed) = rest.split_at(NONCE_LEN);
        let plaintext = Zeroizing::new(
            aead.decrypt(XNonce::from_slice(nonce), sealed)
                .map_err(|_| CipherError::DecryptionFailed("authentication failed".to_string()))?,
        );

        let text = std::str::from_utf8(&plaintext).map_err(|_| {
            CipherError::DecryptionFailed("plaintext is not valid UTF-8".to_string())
        })?;

        trace!(plaintext_len = text.len(), "decrypted");
        Ok(Zeroizing::new(text.to_string()))
    }
}

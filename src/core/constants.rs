//! Constants used throughout sitepass.
//!
//! Centralizes magic strings and format parameters.

/// Config file name inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Application directory name under the platform config dir.
pub const APP_DIR: &str = "sitepass";

/// Overrides the config file location.
pub const CONFIG_ENV: &str = "SITEPASS_CONFIG";

/// Default key file path.
pub const KEY_ENV: &str = "SITEPASS_KEY";

/// Default credential file path.
pub const FILE_ENV: &str = "SITEPASS_FILE";

/// Log filter for the binary.
pub const LOG_ENV: &str = "SITEPASS_LOG";

/// Raw key length in bytes (XChaCha20-Poly1305 key).
pub const KEY_LEN: usize = 32;

/// Nonce length in bytes (XChaCha20-Poly1305).
pub const NONCE_LEN: usize = 24;

/// Leading byte of every ciphertext token.
pub const FORMAT_VERSION: u8 = 0x01;

/// Separator between site and ciphertext on a credential line.
pub const SEPARATOR: char = ':';

/// Prefix marking a comment line in a credential file.
pub const COMMENT_PREFIX: char = '#';

/// Permissions for key and credential files (Unix only).
pub const FILE_MODE: u32 = 0o600;

//! Sitepass - a local, file-backed credential store.
//!
//! Each secret is encrypted on its own under a symmetric key and appended to
//! a plain text file as a `site:ciphertext` line.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── key           # keygen
//! │   ├── credentials   # create, add, get, list
//! │   ├── menu          # interactive session
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── cipher/       # Cipher trait + XChaCha20-Poly1305
//!     ├── config        # config.toml with default paths
//!     ├── key           # Key + KeyManager
//!     ├── record        # credential line format, Lookup
//!     ├── store         # CredentialStore
//!     └── validation    # site name rules
//! ```
//!
//! # Example
//!
//! ```no_run
//! use sitepass::CredentialStore;
//!
//! # fn main() -> sitepass::error::Result<()> {
//! let mut store = CredentialStore::new();
//! store.generate_key("site.key")?;
//! store.create_file_with("sites.txt", [("email", "1234567")])?;
//! store.add_password("YouTube", "youtubepassword")?;
//!
//! println!("{}", store.get_password("email"));
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::key::{Key, KeyManager};
pub use crate::core::record::Lookup;
pub use crate::core::store::CredentialStore;
pub use crate::error::{Error, Result};

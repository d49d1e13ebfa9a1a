//! Core library components.
//!
//! Key management, the credential line format, encryption, and the
//! credential store itself. Nothing here prints; callers decide how to
//! report results and errors.

pub mod cipher;
pub mod config;
pub mod constants;
mod files;
pub mod key;
pub mod record;
pub mod store;
pub mod types;
pub mod validation;

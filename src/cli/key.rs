//! Keygen command.

use std::path::Path;

use tracing::info;

use crate::cli::{output, Context};
use crate::core::store::CredentialStore;
use crate::error::Result;

/// Generate a key at `path`, or at the resolved key path.
pub fn generate(ctx: &Context, path: Option<&Path>) -> Result<()> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => ctx.key_path()?,
    };
    info!(path = %path.display(), "generating key");

    let mut store = CredentialStore::new();
    store.generate_key(&path)?;

    output::success(&format!(
        "key written to {}",
        output::path(&path.display().to_string())
    ));
    output::dimmed("keep this file private: losing it makes every stored password unreadable");
    Ok(())
}

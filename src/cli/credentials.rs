//! Credential commands (create, add, get, list).

use std::io::{self, IsTerminal};

use dialoguer::Password;
use tracing::info;

use crate::cli::{output, Context};
use crate::core::record;
use crate::error::{Error, Result};

/// Create (or truncate) the credential file, seeded with `SITE=SECRET` entries.
pub fn create(ctx: &Context, entries: &[String]) -> Result<()> {
    let entries = entries
        .iter()
        .map(|arg| record::parse_entry(arg))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let path = ctx.store_path()?;
    info!(path = %path.display(), entries = entries.len(), "creating credential file");

    let mut store = ctx.keyed_store()?;
    store.create_file_with(&path, entries)?;

    output::success(&format!(
        "credential file created at {} ({} entries)",
        output::path(&path.display().to_string()),
        store.len()
    ));
    Ok(())
}

/// Add or replace the password for `site`.
///
/// Without `secret`, reads one line from piped stdin or prompts with hidden
/// input.
pub fn add(ctx: &Context, site: &str, secret: Option<String>) -> Result<()> {
    let mut store = ctx.loaded_store()?;

    let secret = match secret {
        Some(s) => s,
        None => read_secret(site)?,
    };

    store.add_password(site, &secret)?;
    output::success(&format!("password for {} added", output::site(site)));
    Ok(())
}

/// Print the password for `site`, or the not-found message.
pub fn get(ctx: &Context, site: &str) -> Result<()> {
    let store = ctx.loaded_store()?;

    match store.get_password(site) {
        found @ record::Lookup::Found(_) => println!("{}", found),
        missing => output::warn(&missing.to_string()),
    }
    Ok(())
}

/// List stored site names. Secrets are never printed.
pub fn list(ctx: &Context, json: bool) -> Result<()> {
    let store = ctx.loaded_store()?;
    let sites: Vec<&str> = store.sites().collect();

    if json {
        let output = serde_json::json!({
            "sites": sites,
            "count": sites.len()
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if sites.is_empty() {
        output::dimmed("no passwords stored");
    } else {
        println!("{} sites:", sites.len());
        for site in sites {
            output::list_item(site);
        }
    }

    Ok(())
}

/// Read a secret from piped stdin, or prompt for it.
pub(crate) fn read_secret(site: &str) -> Result<String> {
    if !io::stdin().is_terminal() {
        let mut input = String::new();
        io::stdin()
            .read_line(&mut input)
            .map_err(Error::io("read password from", "stdin"))?;
        return Ok(input.trim_end_matches(['\n', '\r']).to_string());
    }

    Ok(Password::new()
        .with_prompt(format!("Password for {}", output::site(site)))
        .interact()?)
}

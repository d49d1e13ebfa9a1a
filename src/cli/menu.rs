//! Interactive session.
//!
//! Keeps one `CredentialStore` for the whole session, so a key or file
//! loaded in one step is used by the next. Operation errors are printed and
//! the menu is shown again; only a failed prompt ends the session.

use std::path::PathBuf;

use dialoguer::{Input, Password, Select};
use tracing::debug;

use crate::cli::{output, Context};
use crate::core::store::CredentialStore;
use crate::error::{Error, Result};

/// One menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    GenerateKey,
    LoadKey,
    CreateFile,
    LoadFile,
    Add,
    Get,
    Quit,
}

impl Action {
    const ALL: [Action; 7] = [
        Action::GenerateKey,
        Action::LoadKey,
        Action::CreateFile,
        Action::LoadFile,
        Action::Add,
        Action::Get,
        Action::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            Action::GenerateKey => "Create a new key file",
            Action::LoadKey => "Load an existing key",
            Action::CreateFile => "Create a new password file (requires key)",
            Action::LoadFile => "Load an existing password file (requires key)",
            Action::Add => "Add a new password (requires key; file optional)",
            Action::Get => "Get a password",
            Action::Quit => "Quit",
        }
    }
}

/// Run the menu until the user quits.
pub fn run(ctx: &Context) -> Result<()> {
    let labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();
    let mut store = CredentialStore::new();

    loop {
        let choice = Select::new()
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact()?;

        let action = Action::ALL[choice];
        debug!(?action, "menu selection");

        if action == Action::Quit {
            output::dimmed("Thank you for using sitepass.");
            return Ok(());
        }

        match perform(&mut store, action, ctx) {
            Ok(()) => {}
            Err(Error::Prompt(e)) => return Err(Error::Prompt(e)),
            Err(e) => output::error(&e.to_string()),
        }
    }
}

fn perform(store: &mut CredentialStore, action: Action, ctx: &Context) -> Result<()> {
    match action {
        Action::GenerateKey => {
            let path = prompt_path("Path for new key file", ctx.key_hint())?;
            store.generate_key(&path)?;
            output::success(&format!(
                "key created at {}",
                output::path(&path.display().to_string())
            ));
        }
        Action::LoadKey => {
            let path = prompt_path("Path to existing key file", ctx.key_hint())?;
            store.load_key(&path)?;
            output::success("key loaded");
        }
        Action::CreateFile => {
            let path = prompt_path("Path for new password file", ctx.store_hint())?;
            let entries = prompt_entries()?;
            store.create_file_with(&path, entries)?;
            output::success(&format!(
                "password file created at {} ({} entries)",
                output::path(&path.display().to_string()),
                store.len()
            ));
        }
        Action::LoadFile => {
            let path = prompt_path("Path to existing password file", ctx.store_hint())?;
            store.load_file(&path)?;
            output::success(&format!("password file loaded ({} entries)", store.len()));
        }
        Action::Add => {
            let site = prompt_site()?;
            let secret = Password::new()
                .with_prompt(format!("Password for {}", output::site(&site)))
                .allow_empty_password(true)
                .interact()?;
            store.add_password(&site, &secret)?;
            if store.bound_file().is_none() {
                output::warn("no password file loaded: kept in memory only");
            }
            output::success(&format!("password for {} added", output::site(&site)));
        }
        Action::Get => {
            let site = prompt_site()?;
            let lookup = store.get_password(&site);
            if lookup.is_found() {
                println!("Password for {}: {}", output::site(&site), lookup);
            } else {
                output::warn(&lookup.to_string());
            }
        }
        Action::Quit => {}
    }
    Ok(())
}

fn prompt_path(prompt: &str, default: Option<PathBuf>) -> Result<PathBuf> {
    let mut input = Input::<String>::new().with_prompt(prompt);
    if let Some(path) = default {
        input = input.default(path.display().to_string());
    }
    let answer = input.interact_text()?;
    Ok(PathBuf::from(answer.trim()))
}

fn prompt_site() -> Result<String> {
    let site: String = Input::new().with_prompt("Site").interact_text()?;
    Ok(site.trim().to_string())
}

/// Ask for initial entries until a blank site is given.
fn prompt_entries() -> Result<Vec<(String, String)>> {
    let mut entries = Vec::new();
    loop {
        let site: String = Input::new()
            .with_prompt("Initial site (blank to finish)")
            .allow_empty(true)
            .interact_text()?;
        let site = site.trim().to_string();
        if site.is_empty() {
            return Ok(entries);
        }

        let secret = Password::new()
            .with_prompt(format!("Password for {}", output::site(&site)))
            .allow_empty_password(true)
            .interact()?;
        entries.push((site, secret));
    }
}

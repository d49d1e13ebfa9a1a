//! Command-line interface.
//!
//! Every one-shot command builds a fresh `CredentialStore`, loads the key and
//! credential file it needs, runs one operation, and exits. `menu` keeps a
//! single store alive across an interactive session.

pub mod completions;
pub mod credentials;
pub mod key;
pub mod menu;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::config::Config;
use crate::core::constants;
use crate::core::store::CredentialStore;
use crate::error::Result;

/// Sitepass - a local, file-backed credential store.
#[derive(Parser)]
#[command(
    name = "sitepass",
    about = "A local, file-backed credential store",
    version,
    after_help = "Each password is encrypted separately. Keep the key file safe: without it nothing can be recovered."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Key file (overrides the config file)
    #[arg(short, long, global = true, env = constants::KEY_ENV)]
    pub key: Option<PathBuf>,

    /// Credential file (overrides the config file)
    #[arg(short, long, global = true, env = constants::FILE_ENV)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate a new key file (overwrites an existing one)
    Keygen {
        /// Where to write the key (defaults to --key / config)
        path: Option<PathBuf>,
    },

    /// Create a new, empty credential file (truncates an existing one)
    Create {
        /// Initial entry as SITE=SECRET (repeatable)
        #[arg(short, long = "entry", value_name = "SITE=SECRET")]
        entries: Vec<String>,
    },

    /// Add or replace a password
    Add {
        /// Site name
        site: String,
        /// Password (read from stdin or prompted when omitted)
        secret: Option<String>,
    },

    /// Print a stored password
    Get {
        /// Site name
        site: String,
    },

    /// List stored site names
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start an interactive session
    Menu,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Paths given on the command line plus the loaded config.
pub struct Context {
    config: Config,
    key: Option<PathBuf>,
    file: Option<PathBuf>,
}

impl Context {
    /// Load the config file and remember explicit paths.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file is unreadable or malformed.
    pub fn new(key: Option<PathBuf>, file: Option<PathBuf>) -> Result<Self> {
        Ok(Self {
            config: Config::load()?,
            key,
            file,
        })
    }

    /// Resolved key file path.
    pub fn key_path(&self) -> Result<PathBuf> {
        self.config.key_path(self.key.as_deref())
    }

    /// Resolved credential file path.
    pub fn store_path(&self) -> Result<PathBuf> {
        self.config.store_path(self.file.as_deref())
    }

    /// Key path if one is known, for prompt defaults.
    pub fn key_hint(&self) -> Option<PathBuf> {
        self.key_path().ok()
    }

    /// Credential path if one is known, for prompt defaults.
    pub fn store_hint(&self) -> Option<PathBuf> {
        self.store_path().ok()
    }

    /// Store with the resolved key loaded.
    pub fn keyed_store(&self) -> Result<CredentialStore> {
        let mut store = CredentialStore::new();
        store.load_key(self.key_path()?)?;
        Ok(store)
    }

    /// Store with the resolved key and credential file loaded.
    pub fn loaded_store(&self) -> Result<CredentialStore> {
        let mut store = self.keyed_store()?;
        store.load_file(self.store_path()?)?;
        Ok(store)
    }
}

/// Execute a parsed command line.
pub fn execute(cli: Cli) -> Result<()> {
    use Command::*;

    if let Completions { shell } = &cli.command {
        return completions::execute(shell.clone());
    }

    let ctx = Context::new(cli.key, cli.file)?;

    match cli.command {
        Keygen { path } => key::generate(&ctx, path.as_deref()),
        Create { entries } => credentials::create(&ctx, &entries),
        Add { site, secret } => credentials::add(&ctx, &site, secret),
        Get { site } => credentials::get(&ctx, &site),
        List { json } => credentials::list(&ctx, json),
        Menu => menu::run(&ctx),
        Completions { shell } => completions::execute(shell),
    }
}

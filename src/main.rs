//! Sitepass - a local, file-backed credential store.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sitepass::cli::output;
use sitepass::cli::{execute, Cli};
use sitepass::core::constants::LOG_ENV;
use sitepass::error::{ConfigError, Error, ValidationError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("sitepass=debug")
        } else {
            EnvFilter::new("sitepass=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::NoActiveKey => Some("run: sitepass keygen <path>"),
            Error::Decryption { .. } => {
                Some("check that --key is the key this file was written with")
            }
            Error::Config(ConfigError::MissingPath("key")) => {
                Some("pass --key <path> or set SITEPASS_KEY")
            }
            Error::Config(ConfigError::MissingPath(_)) => {
                Some("pass --file <path> or set SITEPASS_FILE")
            }
            Error::Validation(ValidationError::InvalidSite { .. }) => {
                Some("site names cannot contain ':' or line breaks, or start with '#'")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}

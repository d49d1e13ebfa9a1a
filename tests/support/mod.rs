//! Test support utilities for sitepass integration tests.
//!
//! Provides an isolated environment and helper commands.

#![allow(dead_code)]

pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own working dir and home dir, and `SITEPASS_CONFIG`
/// points inside the working dir so a user's real config is never read.
/// Child processes use `.current_dir()`, so tests can run in parallel.
pub struct Test {
    /// Working directory (key, credential, and config files live here)
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Create a test environment with a key generated at `site.key`.
    pub fn keyed() -> Self {
        let t = Self::new();
        let output = t.keygen();
        assert!(
            output.status.success(),
            "Failed to generate key: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Create a test environment with a key and a credential file seeded
    /// with `entries`.
    pub fn with_entries(entries: &[(&str, &str)]) -> Self {
        let t = Self::keyed();
        let output = t.create(entries);
        assert!(
            output.status.success(),
            "Failed to create credential file: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Absolute path to a file inside the working directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Default key file.
    pub fn key_path(&self) -> PathBuf {
        self.path(KEY_FILE)
    }

    /// Default credential file.
    pub fn store_path(&self) -> PathBuf {
        self.path(STORE_FILE)
    }

    /// Contents of the default credential file.
    pub fn store_contents(&self) -> String {
        std::fs::read_to_string(self.store_path()).expect("failed to read credential file")
    }
}

//! Command helper methods for Test.

use super::{Test, KEY_FILE};
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a sitepass command with an isolated environment.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - SITEPASS_CONFIG pointing at a file inside the working directory
    /// - SITEPASS_KEY / SITEPASS_FILE pointing at the default fixtures
    /// - NO_COLOR so output is plain text
    /// - Current directory set to the working directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("sitepass").expect("failed to find sitepass binary");
        cmd.env("HOME", self.home.path());
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("SITEPASS_CONFIG", self.path("config.toml"));
        cmd.env("SITEPASS_KEY", self.key_path());
        cmd.env("SITEPASS_FILE", self.store_path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("SITEPASS_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Same as `cmd` but without default key/file paths.
    pub fn bare_cmd(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.env_remove("SITEPASS_KEY");
        cmd.env_remove("SITEPASS_FILE");
        cmd
    }

    /// Shortcut for `sitepass keygen`.
    pub fn keygen(&self) -> Output {
        self.cmd()
            .args(["keygen", KEY_FILE])
            .output()
            .expect("failed to run sitepass keygen")
    }

    /// Shortcut for `sitepass create --entry SITE=SECRET...`.
    pub fn create(&self, entries: &[(&str, &str)]) -> Output {
        let mut cmd = self.cmd();
        cmd.arg("create");
        for (site, secret) in entries {
            cmd.arg("--entry").arg(format!("{}={}", site, secret));
        }
        cmd.output().expect("failed to run sitepass create")
    }

    /// Shortcut for `sitepass add SITE SECRET`.
    pub fn add(&self, site: &str, secret: &str) -> Output {
        self.cmd()
            .args(["add", site, secret])
            .output()
            .expect("failed to run sitepass add")
    }

    /// Shortcut for `sitepass get SITE`.
    pub fn get(&self, site: &str) -> Output {
        self.cmd()
            .args(["get", site])
            .output()
            .expect("failed to run sitepass get")
    }

    /// Shortcut for `sitepass list`.
    pub fn list(&self) -> Output {
        self.cmd()
            .arg("list")
            .output()
            .expect("failed to run sitepass list")
    }

    /// Shortcut for `sitepass list --json`.
    pub fn list_json(&self) -> Output {
        self.cmd()
            .args(["list", "--json"])
            .output()
            .expect("failed to run sitepass list --json")
    }
}

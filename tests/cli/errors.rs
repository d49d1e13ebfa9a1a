//! Tests for error reporting and global flags.

use crate::support::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "Usage");
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "sitepass");
}

#[test]
fn test_missing_key_file() {
    let t = Test::new();

    let output = t.create(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to read key file");
    assert!(!t.store_path().exists());
}

#[test]
fn test_missing_credential_file() {
    let t = Test::keyed();

    let output = t.get("email");
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to open credential file");
}

#[test]
fn test_wrong_key_reports_mismatch() {
    let t = Test::with_entries(STANDARD_ENTRIES);

    let output = t
        .cmd()
        .args(["keygen", "other.key"])
        .output()
        .unwrap();
    assert_success(&output);

    let output = t
        .cmd()
        .args(["--key", "other.key", "get", "email"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "key mismatch likely");
    assert_stderr_contains(&output, "line 1");
    assert_stderr_contains(&output, "check that --key is the key this file was written with");
    assert_stdout_excludes(&output, "1234567");
}

#[test]
fn test_no_paths_configured() {
    let t = Test::new();

    let output = t.bare_cmd().arg("keygen").output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "no key path given");
    assert_stderr_contains(&output, "pass --key <path> or set SITEPASS_KEY");
}

#[test]
fn test_verbose_flag_accepted() {
    let t = Test::with_entries(&[]);

    let output = t.cmd().args(["--verbose", "list"]).output().unwrap();
    assert_success(&output);
}

#[test]
fn test_default_no_log_output() {
    let t = Test::with_entries(&[("email", "1234567")]);

    let output = t.list();
    assert_success(&output);

    let err = stderr(&output);
    assert!(
        !err.contains("DEBUG") && !err.contains("TRACE"),
        "Default mode should not show debug/trace output"
    );
}

#[test]
fn test_log_env_var_never_leaks_secrets() {
    let t = Test::with_entries(&[("email", "1234567")]);

    let output = t
        .cmd()
        .env("SITEPASS_LOG", "trace")
        .arg("list")
        .output()
        .unwrap();
    assert_success(&output);
    assert!(!stderr(&output).contains("1234567"));
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "_sitepass");
}

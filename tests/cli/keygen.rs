//! Tests for `sitepass keygen`.

use crate::support::*;

#[test]
fn test_keygen_writes_key_file() {
    let t = Test::new();

    let output = t.keygen();
    assert_success(&output);
    assert_stdout_contains(&output, "key written to");

    let key = std::fs::read(t.key_path()).unwrap();
    assert_eq!(key.len(), 44);
    assert!(!key.contains(&b'\n'));
}

#[test]
fn test_keygen_uses_resolved_path_without_argument() {
    let t = Test::new();

    let output = t.cmd().arg("keygen").output().unwrap();
    assert_success(&output);
    assert!(t.key_path().exists());
}

#[test]
fn test_keygen_overwrites_existing_key() {
    let t = Test::keyed();
    let first = std::fs::read(t.key_path()).unwrap();

    assert_success(&t.keygen());
    let second = std::fs::read(t.key_path()).unwrap();

    assert_ne!(first, second);
}

#[test]
fn test_keygen_missing_directory_fails() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["keygen", "no/such/dir/site.key"])
        .output()
        .unwrap();

    assert_failure(&output);
    assert_stderr_contains(&output, "failed to write key file");
}

#[cfg(unix)]
#[test]
fn test_keygen_file_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::keyed();
    let mode = std::fs::metadata(t.key_path()).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o600);
}

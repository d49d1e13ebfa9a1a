//! Tests for config file and environment path resolution.

use crate::support::*;

#[test]
fn test_paths_from_config_file() {
    let t = Test::new();
    std::fs::write(
        t.path("config.toml"),
        format!(
            "[paths]\nkey = {:?}\nstore = {:?}\n",
            t.path("configured.key").display().to_string(),
            t.path("configured.txt").display().to_string()
        ),
    )
    .unwrap();

    assert_success(&t.bare_cmd().arg("keygen").output().unwrap());
    assert_success(
        &t.bare_cmd()
            .args(["create", "--entry", "email=1234567"])
            .output()
            .unwrap(),
    );

    assert!(t.path("configured.key").exists());
    assert!(t.path("configured.txt").exists());

    let output = t.bare_cmd().args(["get", "email"]).output().unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output), "1234567\n");
}

#[test]
fn test_flag_overrides_environment() {
    let t = Test::keyed();

    let output = t
        .cmd()
        .args(["--file", "flagged.txt", "create"])
        .output()
        .unwrap();
    assert_success(&output);

    assert!(t.path("flagged.txt").exists());
    assert!(!t.store_path().exists());
}

#[test]
fn test_malformed_config_fails() {
    let t = Test::new();
    std::fs::write(t.path("config.toml"), "[paths\nkey = ").unwrap();

    let output = t.cmd().arg("keygen").output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse config");
}

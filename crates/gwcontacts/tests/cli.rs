//! Binary tests for configuration failures.
//!
//! These run the real executable with the user config root pointed at a
//! temporary directory, so they never reach the network.

#![cfg(target_os = "linux")]
#![allow(clippy::unwrap_used)]

use std::path::Path;
use std::process::{Command, Output};

fn run_with_config_root(root: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gwcontacts"))
        .env("XDG_CONFIG_HOME", root)
        .env("HOME", root)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn missing_credentials_exits_non_zero() {
    let root = tempfile::tempdir().unwrap();

    let output = run_with_config_root(root.path());
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Unable to read client secret file"), "{stderr}");
    assert!(stderr.contains("credentials.json"), "{stderr}");
    assert!(output.stdout.is_empty());

    // The config directory is prepared, but no token was ever written
    let app_dir = root.path().join("google-workspace-contacts");
    assert!(app_dir.is_dir());
    assert!(!app_dir.join("token.json").exists());
}

#[test]
fn unparsable_credentials_exits_non_zero() {
    let root = tempfile::tempdir().unwrap();
    let app_dir = root.path().join("google-workspace-contacts");
    std::fs::create_dir_all(&app_dir).unwrap();
    std::fs::write(app_dir.join("credentials.json"), r#"{"something": "else"}"#).unwrap();

    let output = run_with_config_root(root.path());
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(
        stderr.contains("Unable to parse client secret file"),
        "{stderr}"
    );
    assert!(!app_dir.join("token.json").exists());
}

#[test]
fn help_lists_flags() {
    let output = Command::new(env!("CARGO_BIN_EXE_gwcontacts"))
        .arg("--help")
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("--output-file"));
    assert!(stdout.contains("--verbose"));
}

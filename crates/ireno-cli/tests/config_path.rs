use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_config_path_command() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("ireno")
        .env("IRENO_HOME", dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("settings.json"));
}

#[test]
fn test_config_show_prints_defaults_without_a_file() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("ireno")
        .env("IRENO_HOME", dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""theme": "auto""#))
        .stdout(predicate::str::contains(r#""refreshInterval": 60"#));
}

#[test]
fn test_config_reset_writes_default_blob() {
    let dir = tempdir().unwrap();
    let settings_path = dir.path().join("settings.json");

    assert!(!settings_path.exists());

    cargo_bin_cmd!("ireno")
        .env("IRENO_HOME", dir.path())
        .args(["config", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings reset at"));

    assert!(settings_path.exists());

    let contents = fs::read_to_string(&settings_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value["theme"], "auto");
    assert_eq!(value["alertNotifications"], true);
    assert_eq!(value["systemNotifications"], true);
    assert_eq!(value["refreshInterval"], 60);
}

#[test]
fn test_config_show_reads_saved_settings() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("settings.json"),
        r#"{"theme":"dark"}"#,
    )
    .unwrap();

    // Saved theme wins; missing fields come back defaulted.
    cargo_bin_cmd!("ireno")
        .env("IRENO_HOME", dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""theme": "dark""#))
        .stdout(predicate::str::contains(r#""refreshInterval": 60"#));
}

#[test]
fn test_config_show_survives_corrupted_blob() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("settings.json"), "{broken").unwrap();

    cargo_bin_cmd!("ireno")
        .env("IRENO_HOME", dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""theme": "auto""#));
}

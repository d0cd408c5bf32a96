use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_respond_greeting() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("ireno")
        .env("IRENO_HOME", dir.path())
        .args(["chat", "respond", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello! I can help you with"));
}

#[test]
fn test_respond_rule_precedence() {
    let dir = tempdir().unwrap();

    // "critical" is matched before "brooklyn".
    cargo_bin_cmd!("ireno")
        .env("IRENO_HOME", dir.path())
        .args(["chat", "respond", "critical brooklyn"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 critical alerts"));
}

#[test]
fn test_respond_fallback() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("ireno")
        .env("IRENO_HOME", dir.path())
        .args(["chat", "respond", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Could you be more specific"));
}

#[test]
fn test_export_writes_artifact() {
    let home = tempdir().unwrap();
    let out = tempdir().unwrap();

    cargo_bin_cmd!("ireno")
        .env("IRENO_HOME", home.path())
        .args(["chat", "export", "--out"])
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported chat to"));

    let entries: Vec<_> = std::fs::read_dir(out.path())
        .unwrap()
        .map(|e| e.unwrap())
        .collect();
    assert_eq!(entries.len(), 1);

    let name = entries[0].file_name().into_string().unwrap();
    assert!(name.starts_with("ireno-chat-"));
    assert!(name.ends_with(".json"));

    let contents = std::fs::read_to_string(entries[0].path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert!(value["exportDate"].is_string());
    let messages = value["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["type"], "bot");
    assert!(
        messages[0]["text"]
            .as_str()
            .unwrap()
            .contains("IRENO AI Assistant")
    );
}

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_help_lists_subcommands() {
    cargo_bin_cmd!("ireno")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("chat"));
}

#[test]
fn test_chat_help_lists_subcommands() {
    cargo_bin_cmd!("ireno")
        .args(["chat", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("respond"))
        .stdout(predicate::str::contains("export"));
}

#[test]
fn test_dashboard_requires_a_terminal() {
    let dir = tempdir().unwrap();

    // With no subcommand the dashboard starts, which needs a TTY.
    cargo_bin_cmd!("ireno")
        .env("IRENO_HOME", dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));
}

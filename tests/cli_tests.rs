//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cli(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("initiative-import"));
    // Keep a developer's .env out of the run.
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn test_cli_version() {
    let tmp = TempDir::new().expect("tmp");
    cli(&tmp).arg("--version").assert().success().stdout(predicate::str::contains("initiative-import"));
}

#[test]
fn test_cli_help() {
    let tmp = TempDir::new().expect("tmp");
    cli(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Import initiatives from a CSV"))
        .stdout(predicate::str::contains("--purge"))
        .stdout(predicate::str::contains("--status"))
        .stdout(predicate::str::contains("--user-id"))
        .stdout(predicate::str::contains("[default: approved]"))
        .stdout(predicate::str::contains("[default: 2]"));
}

#[test]
fn test_csv_path_is_required() {
    let tmp = TempDir::new().expect("tmp");
    cli(&tmp).assert().failure().stderr(predicate::str::contains("CSV_PATH"));
}

#[test]
fn test_user_id_must_be_an_integer() {
    let tmp = TempDir::new().expect("tmp");
    cli(&tmp)
        .args(["data.csv", "--user-id", "admin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'admin'"));
}

#[test]
fn test_invalid_port_fails_before_connecting() {
    let tmp = TempDir::new().expect("tmp");
    fs::write(tmp.path().join("data.csv"), "Nom de l'initiative\nTest\n").expect("write csv");
    cli(&tmp)
        .env("DB_PORT", "not-a-port")
        .args(["data.csv", "--purge"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Import terminé").not())
        .stderr(predicate::str::contains("invalid database configuration"));
}

#[test]
fn test_dotenv_file_is_read() {
    let tmp = TempDir::new().expect("tmp");
    fs::write(tmp.path().join(".env"), "DB_PORT=not-a-port\n").expect("write .env");
    cli(&tmp)
        .env_remove("DB_PORT")
        .arg("data.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid database configuration"));
}

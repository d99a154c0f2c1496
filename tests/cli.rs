use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn signup(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("signup").unwrap();
    cmd.env("SIGNUP_WIZARD_DIR", dir.path())
        .env_remove("RUST_LOG")
        .env_remove("SIGNUP_WIZARD_PASSWORD");
    cmd
}

#[test]
fn check_passes_with_valid_values() {
    let dir = TempDir::new().unwrap();
    signup(&dir)
        .args([
            "check",
            "--name",
            "Alice",
            "--email",
            "a@b.com",
            "--username",
            "bobby",
            "--password",
            "secret",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("All steps passed."))
        .stdout(predicate::str::contains("Username: bobby"))
        .stdout(predicate::str::contains("secret").not());
}

#[test]
fn check_reports_invalid_email() {
    let dir = TempDir::new().unwrap();
    signup(&dir)
        .args(["check", "--name", "Bob", "--email", "bad"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Step 1: Personal Details: validation failed"))
        .stdout(predicate::str::contains("email: Invalid email format"))
        .stdout(predicate::str::contains("name:").not());
}

#[test]
fn check_accepts_minimum_lengths() {
    let dir = TempDir::new().unwrap();
    signup(&dir)
        .args([
            "check",
            "--name",
            "Alice",
            "--email",
            "a@b.com",
            "--username",
            "abc",
            "--password",
            "123456",
        ])
        .assert()
        .success();
}

#[test]
fn check_rejects_short_username() {
    let dir = TempDir::new().unwrap();
    signup(&dir)
        .args([
            "check",
            "--name",
            "Alice",
            "--email",
            "a@b.com",
            "--username",
            "ab",
            "--password",
            "123456",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "username: Username must be more than 3 characters",
        ));
}

#[test]
fn check_reports_missing_fields() {
    let dir = TempDir::new().unwrap();
    signup(&dir)
        .args(["check", "--name", "Alice"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("fill in every field to continue"))
        .stdout(predicate::str::contains("email: missing"));
}

#[test]
fn check_does_not_touch_journal() {
    let dir = TempDir::new().unwrap();
    signup(&dir)
        .args(["check", "--name", "Alice", "--email", "a@b.com"])
        .assert()
        .code(1);

    let journal = dir.path().join("journal.log");
    assert!(!journal.exists());
}

#[test]
fn init_writes_settings() {
    let dir = TempDir::new().unwrap();
    signup(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings written to"));

    assert!(dir.path().join("config.json").exists());
}

#[test]
fn init_keeps_existing_settings() {
    let dir = TempDir::new().unwrap();
    let settings = dir.path().join("config.json");
    signup(&dir).arg("init").assert().success();
    std::fs::write(&settings, r##"{"mask_char": "#"}"##).unwrap();

    signup(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings already exist"));
    assert!(std::fs::read_to_string(&settings).unwrap().contains("\"#\""));

    signup(&dir)
        .args(["init", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings written to"));
    assert!(std::fs::read_to_string(&settings).unwrap().contains("\"*\""));
}

#[test]
fn invalid_settings_point_at_init_force() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{not json").unwrap();

    signup(&dir)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("signup init --force"));

    signup(&dir).args(["init", "--force"]).assert().success();
    signup(&dir).arg("config").assert().success();
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();
    signup(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Signup Wizard Configuration"))
        .stdout(predicate::str::contains("journal.log"));
}

#[test]
fn journal_empty() {
    let dir = TempDir::new().unwrap();
    signup(&dir)
        .arg("journal")
        .assert()
        .success()
        .stdout(predicate::str::contains("No journal entries found."));
}

use assert_cmd::Command;
use predicates::prelude::*;

fn garmin() -> Command {
    Command::cargo_bin("garmin").unwrap()
}

#[test]
fn test_help_command() {
    garmin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Garmin Connect"))
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("sleep-week"));
}

#[test]
fn test_version_command() {
    garmin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_login_requires_both_arguments() {
    // Malformed argument counts are a usage error, not an envelope
    garmin()
        .args(["login", "athlete@example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_data_commands_without_credentials_return_guidance() {
    let home = tempfile::tempdir().unwrap();

    for command in ["status", "today", "sleep", "summary"] {
        garmin()
            .env("HOME", home.path())
            .arg(command)
            .assert()
            .failure()
            .stdout(predicate::str::contains(r#""status":"error""#))
            .stdout(predicate::str::contains("login"))
            .stdout(predicate::str::contains("credentials"));
    }
}

#[test]
fn test_error_envelope_in_text_format() {
    let home = tempfile::tempdir().unwrap();

    garmin()
        .env("HOME", home.path())
        .args(["status", "--format", "text"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("error:"))
        .stdout(predicate::str::contains("login"));
}

#[test]
fn test_sleep_end_to_end_against_mock_server() {
    let mut server = mockito::Server::new();

    server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token": "token-1"}"#)
        .create();

    server
        .mock("GET", "/wellness-service/wellness/dailySleepData")
        .match_query(mockito::Matcher::UrlEncoded(
            "date".into(),
            "2026-01-17".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"dailySleepDTO": {"sleepTimeSeconds": 27000}}"#)
        .create();

    let home = tempfile::tempdir().unwrap();
    let config_dir = home.path().join(".config").join("garmin");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        format!("[api]\nbase_url = \"{}\"\ntimeout_seconds = 5\n", server.url()),
    )
    .unwrap();
    std::fs::write(
        config_dir.join("credentials.json"),
        r#"{"email": "athlete@example.com", "password": "hunter2"}"#,
    )
    .unwrap();

    garmin()
        .env("HOME", home.path())
        .args(["sleep", "2026-01-17"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""status":"success""#))
        .stdout(predicate::str::contains(r#""total_formatted":"7h 30m""#))
        .stdout(predicate::str::contains(r#""date":"2026-01-17""#));
}

#[test]
fn test_login_failure_surfaces_upstream_message() {
    let mut server = mockito::Server::new();

    server
        .mock("POST", "/auth/login")
        .with_status(401)
        .with_body("Invalid username or password")
        .create();

    let home = tempfile::tempdir().unwrap();
    let config_dir = home.path().join(".config").join("garmin");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        format!("[api]\nbase_url = \"{}\"\ntimeout_seconds = 5\n", server.url()),
    )
    .unwrap();

    garmin()
        .env("HOME", home.path())
        .args(["login", "athlete@example.com", "wrong"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            r#"{"status":"error","message":"Invalid username or password"}"#,
        ));

    // a rejected login must not persist credentials
    assert!(!config_dir.join("credentials.json").exists());
}

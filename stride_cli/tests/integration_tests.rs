//! Integration tests for the stride binary.
//!
//! These tests verify end-to-end behavior including:
//! - Built-in sample output
//! - Package files, error policies and output formats
//! - Config file handling

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a test directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
///
/// Points the config lookup at an empty directory so a developer's
/// own config never leaks into the tests.
fn cli(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("stride"));
    cmd.env("XDG_CONFIG_HOME", temp_dir.path())
        .env("HOME", temp_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn write_packages(temp_dir: &TempDir, json: &str) -> PathBuf {
    let path = temp_dir.path().join("packages.json");
    fs::write(&path, json).expect("Failed to write packages");
    path
}

#[test]
fn test_cli_help() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Workout statistics from tracker readings",
        ));
}

#[test]
fn test_default_samples() {
    let temp_dir = setup_test_dir();
    let expected = "\
Activity type: Swimming; Duration: 1.000 h; Distance: 0.994 km; Mean speed: 1.000 km/h; Calories: 336.000.
Activity type: Running; Duration: 12.000 h; Distance: 0.784 km; Mean speed: 0.065 km/h; Calories: -81.320.
Activity type: Walking; Duration: 1.000 h; Distance: 5.850 km; Mean speed: 5.850 km/h; Calories: 157.500.
";

    cli(&temp_dir).assert().success().stdout(expected);
}

#[test]
fn test_input_file_skips_bad_entries() {
    let temp_dir = setup_test_dir();
    let input = write_packages(
        &temp_dir,
        r#"[
            {"workout_type": "XYZ", "data": [1, 2, 3]},
            {"workout_type": "RUN", "data": [15000, 1, 75]}
        ]"#,
    );

    cli(&temp_dir)
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Activity type: Running;"))
        .stdout(predicate::str::contains("XYZ").not())
        .stderr(predicate::str::contains("Unsupported activity type"));
}

#[test]
fn test_skipped_entry_reported_once() {
    let temp_dir = setup_test_dir();
    let input = write_packages(
        &temp_dir,
        r#"[{"workout_type": "XYZ", "data": [1, 2, 3]}]"#,
    );

    let output = cli(&temp_dir)
        .arg("--input")
        .arg(&input)
        .output()
        .expect("Failed to run stride");
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.matches("Unsupported activity type").count(), 1);
}

#[test]
fn test_halt_on_error_fails() {
    let temp_dir = setup_test_dir();
    let input = write_packages(
        &temp_dir,
        r#"[
            {"workout_type": "SWM", "data": [720, 1, 80, 25, 40]},
            {"workout_type": "WLK", "data": [9000, 1, 75]},
            {"workout_type": "RUN", "data": [1206, 12, 6]}
        ]"#,
    );

    cli(&temp_dir)
        .arg("--input")
        .arg(&input)
        .arg("--halt-on-error")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Activity type: Swimming;"))
        .stdout(predicate::str::contains("Running").not())
        .stderr(predicate::str::contains("Malformed readings"));
}

#[test]
fn test_json_output() {
    let temp_dir = setup_test_dir();
    let output = cli(&temp_dir)
        .arg("--json")
        .output()
        .expect("Failed to run stride");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let summaries: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(summaries.len(), 3);
    assert_eq!(summaries[0]["training_type"], "Swimming");
    assert_eq!(summaries[2]["calories"], 157.5);
}

#[test]
fn test_russian_language_flag() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("--language")
        .arg("ru")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Тип тренировки: Swimming; Длительность: 1.000 ч.;",
        ));
}

#[test]
fn test_unknown_language_rejected() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("--language")
        .arg("fr")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown message language"));
}

#[test]
fn test_config_file_sets_policy() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("stride.toml");
    fs::write(&config_path, "[runner]\non_error = \"halt\"\n").unwrap();
    let input = write_packages(
        &temp_dir,
        r#"[{"workout_type": "RUN", "data": [1206, 0, 6]}]"#,
    );

    cli(&temp_dir)
        .arg("--config")
        .arg(&config_path)
        .arg("--input")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Division by zero"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_default_config_location_is_read() {
    let temp_dir = setup_test_dir();
    let config_dir = temp_dir.path().join("stride");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[report]\nformat = \"json\"\n").unwrap();

    cli(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"));
}

#[test]
fn test_missing_input_file_fails() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("--input")
        .arg(temp_dir.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

//! End-to-end tests for the `triplog` binary.
//!
//! Each test runs the real binary against a file in a temp directory
//! and checks stdout plus the documented exit code for its failure
//! kind.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn triplog_binary() -> String {
    env!("CARGO_BIN_EXE_triplog").to_string()
}

/// Builds a command isolated from the host's config and environment.
fn triplog(home: &Path) -> Command {
    let mut cmd = Command::new(triplog_binary());
    cmd.env("HOME", home)
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("TRIPLOG_BASE_DIR");
    cmd
}

fn write_input(temp: &TempDir, contents: &str) -> String {
    let path = temp.path().join("trips.txt");
    std::fs::write(&path, contents).unwrap();
    path.display().to_string()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn reports_sorted_totals_for_a_valid_file() {
    let temp = TempDir::new().unwrap();
    let input = write_input(
        &temp,
        "Driver Dan\n\
         Driver Lauren\n\
         Driver Kumi\n\
         Trip Dan 07:15 07:45 17.3\n\
         Trip Dan 06:12 06:32 21.8\n\
         Trip Lauren 12:01 13:16 42.0\n",
    );

    let output = triplog(temp.path()).arg(&input).output().unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        stdout_of(&output),
        "Lauren: 42 miles @ 34 mph\nDan: 39 miles @ 47 mph\nKumi: 0 miles\n"
    );
}

#[test]
fn implausible_trips_are_dropped_not_fatal() {
    let temp = TempDir::new().unwrap();
    let input = write_input(
        &temp,
        "Driver Dan\n\
         Trip Dan 07:15 07:20 1000\n\
         Trip Dan 07:15 07:15 10\n",
    );

    let output = triplog(temp.path()).arg(&input).output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Dan: 0 miles\n");
}

#[test]
fn missing_path_exits_255() {
    let temp = TempDir::new().unwrap();
    let output = triplog(temp.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(255));
    assert!(output.stdout.is_empty());
}

#[test]
fn unreadable_file_exits_1() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.txt");
    let output = triplog(temp.path())
        .arg(missing.display().to_string())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn unknown_record_kind_exits_2() {
    let temp = TempDir::new().unwrap();
    let input = write_input(&temp, "Driver Dan\nPassenger Bob\n");
    let output = triplog(temp.path()).arg(&input).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty(), "no partial report");
}

#[test]
fn malformed_driver_record_exits_3() {
    let temp = TempDir::new().unwrap();
    let input = write_input(&temp, "Driver Dan Smith\n");
    let output = triplog(temp.path()).arg(&input).output().unwrap();
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn duplicate_driver_exits_4() {
    let temp = TempDir::new().unwrap();
    let input = write_input(&temp, "Driver Dan\nDriver Dan\n");
    let output = triplog(temp.path()).arg(&input).output().unwrap();
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn malformed_trip_record_exits_5() {
    let temp = TempDir::new().unwrap();
    let input = write_input(&temp, "Driver Dan\nTrip Dan 25:00 08:15 10\n");
    let output = triplog(temp.path()).arg(&input).output().unwrap();
    assert_eq!(output.status.code(), Some(5));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid trip entry"), "stderr: {stderr}");
}

#[test]
fn json_flag_emits_the_same_rows_as_json() {
    let temp = TempDir::new().unwrap();
    let input = write_input(
        &temp,
        "Driver Dan\n\
         Driver Lauren\n\
         Trip Lauren 12:00 14:00 80\n",
    );

    let output = triplog(temp.path())
        .arg("--json")
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    let drivers = value["drivers"].as_array().unwrap();
    assert_eq!(drivers.len(), 2);
    assert_eq!(drivers[0]["name"], "Lauren");
    assert_eq!(drivers[1]["name"], "Dan");
}

#[test]
fn input_resolves_against_configured_base_dir() {
    let temp = TempDir::new().unwrap();
    write_input(&temp, "Driver Dan\n");

    let output = triplog(temp.path())
        .env("TRIPLOG_BASE_DIR", temp.path())
        .arg("trips.txt")
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(stdout_of(&output), "Dan: 0 miles\n");
}

//! Exit status and stderr of the `rehearse` binary.

mod common;

use std::process::{Command, Output, Stdio};

use rehearse_test_support::fixtures;

fn rehearse(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rehearse"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("REHEARSE_SEED")
        .env_remove("REHEARSE_AUTO_DELAY_MS")
        .env_remove("REHEARSE_ENFORCE_TIMER")
        .env_remove("REHEARSE_LOG_FORMAT")
        .stdin(Stdio::null())
        .output()
        .unwrap()
}

#[test]
fn test_auto_run_of_clean_scene_exits_zero() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let scene = common::write_file(&dir, "cafe.json", fixtures::CAFE_SCENE_JSON);

    // Act
    let output = rehearse(&[
        scene.to_str().unwrap(),
        "--auto",
        "--auto-delay-ms",
        "0",
    ]);

    // Assert
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("  CUTIN_ORDER: reaction time="));
    assert!(stdout.contains("result=Best"));
}

#[test]
fn test_missing_cutin_exits_one_with_error_message() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let scene = common::write_file(&dir, "dangling.json", fixtures::DANGLING_CUTIN_SCENE_JSON);

    // Act
    let output = rehearse(&[
        scene.to_str().unwrap(),
        "--auto",
        "--auto-delay-ms",
        "0",
    ]);

    // Assert
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("error: cut-in not found: CUTIN_MISSING"));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("Session Summary"));
}

#[test]
fn test_check_with_issues_exits_one() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let scene = common::write_file(&dir, "dangling.json", fixtures::DANGLING_CUTIN_SCENE_JSON);

    // Act
    let output = rehearse(&[scene.to_str().unwrap(), "--check"]);

    // Assert
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Scene dangling: 1 issue(s)\n"));
}

#[test]
fn test_check_of_clean_scene_exits_zero() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let scene = common::write_file(&dir, "cafe.json", fixtures::CAFE_SCENE_JSON);

    // Act
    let output = rehearse(&[scene.to_str().unwrap(), "--check"]);

    // Assert
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_missing_scene_argument_exits_two() {
    // Act
    let output = rehearse(&[]);

    // Assert
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_unreadable_scene_file_exits_one() {
    // Act
    let output = rehearse(&["/nonexistent/scene.json", "--auto"]);

    // Assert
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("error: failed to read /nonexistent/scene.json"));
}

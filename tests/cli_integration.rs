//! CLI integration tests.
//!
//! These tests invoke the questioner binary with piped stdin and verify
//! output, exit codes, and retry behaviour.

#![allow(deprecated)] // cargo_bin is deprecated but still works

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to get a Command for the questioner binary.
fn questioner() -> Command {
    Command::cargo_bin("questioner").unwrap()
}

// ============================================================================
// Basic CLI tests
// ============================================================================

#[test]
fn test_no_args_shows_quick_start() {
    questioner()
        .assert()
        .success()
        .stdout(predicate::str::contains("questioner"))
        .stdout(predicate::str::contains("Quick start"));
}

#[test]
fn test_version_flag() {
    questioner().arg("--version").assert().success();
}

#[test]
fn test_completions_bash() {
    questioner()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("questioner"));
}

#[test]
fn test_completions_rejects_unknown_shell() {
    questioner()
        .args(["completions", "tcsh"])
        .assert()
        .failure();
}

// ============================================================================
// ask command
// ============================================================================

#[test]
fn test_ask_yes_exits_zero() {
    questioner()
        .args(["ask", "Are you happy?"])
        .write_stdin("yes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Are you happy?"));
}

#[test]
fn test_ask_no_exits_one() {
    questioner()
        .args(["ask", "Are you happy?"])
        .write_stdin("no\n")
        .assert()
        .code(1);
}

#[test]
fn test_ask_is_case_insensitive() {
    questioner()
        .args(["ask", "Proceed?"])
        .write_stdin("YES\n")
        .assert()
        .success();

    questioner()
        .args(["ask", "Proceed?"])
        .write_stdin("N\n")
        .assert()
        .code(1);
}

#[test]
fn test_ask_retries_until_recognised() {
    questioner()
        .args(["ask", "Are you happy?"])
        .write_stdin("blah\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("I don't understand your response."))
        .stdout(predicate::str::contains("Are you happy?").count(2));
}

#[test]
fn test_ask_exhausted_input_exits_two() {
    questioner()
        .args(["ask", "Are you happy?"])
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "Input closed before a recognised answer",
        ));
}

// ============================================================================
// happiness command
// ============================================================================

#[test]
fn test_happiness_yes_prints_glad() {
    questioner()
        .arg("happiness")
        .write_stdin("yes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Are you happy?"))
        .stdout(predicate::str::contains("Good I'm glad."));
}

#[test]
fn test_happiness_no_prints_too_bad() {
    questioner()
        .arg("happiness")
        .write_stdin("no\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("That's too bad."));
}

#[test]
fn test_happiness_retries_then_answers() {
    questioner()
        .arg("happiness")
        .write_stdin("maybe\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("I don't understand your response."))
        .stdout(predicate::str::contains("That's too bad."));
}

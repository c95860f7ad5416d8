//! End-to-end tests for the `preflight` binary.
//!
//! The formatter, test runner, and linter are stand-in shell scripts placed
//! at the front of a scratch `PATH`, so every scenario exercises real process
//! spawning, output routing, and exit-code mapping.

#![cfg(unix)]
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::TempDir;

const CLEAN_REPORT: &str = "\
------------------------------------------------------------------
Your code has been rated at 9.50/10 (previous run: 9.00/10, +0.50)

";

fn fake_tool(dir: &Path, name: &str, script: &str) {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{script}")).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
}

/// Script that prints a lint report ending in the given summary line.
fn lint_script(summary: &str, exit_code: i32) -> String {
    format!(
        "cat <<'EOF'\n\
------------------------------------------------------------------\n\
{summary}\n\
\n\
EOF\nexit {exit_code}"
    )
}

fn preflight(tools: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("preflight").unwrap();
    cmd.env(
        "PATH",
        format!("{}:/usr/bin:/bin", tools.path().display()),
    );
    cmd
}

#[test]
fn all_gates_passing_exits_zero() {
    let tools = TempDir::new().unwrap();
    fake_tool(tools.path(), "black", "exit 0");
    fake_tool(tools.path(), "pytest", "exit 0");
    fake_tool(
        tools.path(),
        "pylint",
        &lint_script(
            "Your code has been rated at 9.50/10 (previous run: 9.00/10, +0.50)",
            0,
        ),
    );

    preflight(&tools)
        .assert()
        .success()
        .stdout(predicate::str::contains("rated at 9.50/10"));
}

#[test]
fn lint_report_is_mirrored_verbatim() {
    let tools = TempDir::new().unwrap();
    fake_tool(tools.path(), "black", "exit 0");
    fake_tool(tools.path(), "pytest", "exit 0");
    fake_tool(
        tools.path(),
        "pylint",
        &lint_script(
            "Your code has been rated at 9.50/10 (previous run: 9.00/10, +0.50)",
            0,
        ),
    );

    // The passthrough steps print nothing, so the process stdout is exactly
    // the captured lint report.
    preflight(&tools)
        .assert()
        .success()
        .stdout(predicate::eq(CLEAN_REPORT));
}

#[test]
fn format_failure_is_fatal_and_skips_later_steps() {
    let tools = TempDir::new().unwrap();
    let markers = TempDir::new().unwrap();
    fake_tool(tools.path(), "black", "exit 1");
    fake_tool(tools.path(), "pytest", ": > \"$MARKER_DIR/pytest-ran\"\nexit 0");
    fake_tool(tools.path(), "pylint", ": > \"$MARKER_DIR/pylint-ran\"\nexit 0");

    preflight(&tools)
        .env("MARKER_DIR", markers.path())
        .assert()
        .code(1);

    assert!(!markers.path().join("pytest-ran").exists());
    assert!(!markers.path().join("pylint-ran").exists());
}

#[test]
fn formatter_exit_code_propagates_unchanged() {
    let tools = TempDir::new().unwrap();
    fake_tool(tools.path(), "black", "exit 123");

    preflight(&tools).assert().code(123);
}

#[test]
fn test_failure_stops_before_lint() {
    let tools = TempDir::new().unwrap();
    let markers = TempDir::new().unwrap();
    fake_tool(tools.path(), "black", "exit 0");
    fake_tool(tools.path(), "pytest", "exit 2");
    fake_tool(tools.path(), "pylint", ": > \"$MARKER_DIR/pylint-ran\"\nexit 0");

    preflight(&tools)
        .env("MARKER_DIR", markers.path())
        .assert()
        .code(2);

    assert!(!markers.path().join("pylint-ran").exists());
}

#[test]
fn low_score_exits_one() {
    let tools = TempDir::new().unwrap();
    fake_tool(tools.path(), "black", "exit 0");
    fake_tool(tools.path(), "pytest", "exit 0");
    fake_tool(
        tools.path(),
        "pylint",
        &lint_script(
            "Your code has been rated at 8.75/10 (previous run: 9.00/10, -0.25)",
            0,
        ),
    );

    preflight(&tools).assert().code(1);
}

#[test]
fn linter_exit_code_does_not_decide() {
    let tools = TempDir::new().unwrap();
    fake_tool(tools.path(), "black", "exit 0");
    fake_tool(tools.path(), "pytest", "exit 0");
    fake_tool(
        tools.path(),
        "pylint",
        &lint_script(
            "Your code has been rated at 9.50/10 (previous run: 9.00/10, +0.50)",
            28,
        ),
    );

    preflight(&tools).assert().success();
}

#[test]
fn perfect_score_fails_the_byte_order_gate() {
    let tools = TempDir::new().unwrap();
    fake_tool(tools.path(), "black", "exit 0");
    fake_tool(tools.path(), "pytest", "exit 0");
    fake_tool(
        tools.path(),
        "pylint",
        &lint_script(
            "Your code has been rated at 10.00/10 (previous run: 9.97/10, +0.03)",
            0,
        ),
    );

    preflight(&tools).assert().code(1);
}

#[test]
fn garbled_report_reports_a_hard_error() {
    let tools = TempDir::new().unwrap();
    fake_tool(tools.path(), "black", "exit 0");
    fake_tool(tools.path(), "pytest", "exit 0");
    fake_tool(tools.path(), "pylint", "echo 'pylint: fatal: unable to import'");

    preflight(&tools)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("preflight:"));
}

#[test]
fn missing_formatter_reports_a_hard_error() {
    let tools = TempDir::new().unwrap();

    // PATH holds only the empty scratch dir, so no formatter can resolve.
    Command::cargo_bin("preflight")
        .unwrap()
        .env("PATH", tools.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("black"));
}

#[test]
fn help_describes_the_gate() {
    Command::cargo_bin("preflight")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quality gates for the grepme project"));
}

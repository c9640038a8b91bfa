//! Integration tests for the millipede binary.
//!
//! These tests run the compiled binary and compare its output with the
//! expected artwork.

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_millipede"))
        .args(args)
        .output()
        .expect("Failed to run binary")
}

/// Run the binary with the given CLI args. Returns stdout.
fn run_binary(args: &[&str]) -> String {
    let output = run(args);
    assert!(
        output.status.success(),
        "Binary exited with {:?}:\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("Non-UTF8 output")
}

// ─── Artwork ────────────────────────────────────────────────────────────────

#[test]
fn test_simple_usage() {
    let expected = "\n Hello World!\n\n    ╚⊙ ⊙╝\n ╚═(███)═╝\n  ╚═(███)═╝\n   ╚═(███)═╝\n    ╚═(███)═╝\n   ╚═(███)═╝\n\n";
    let output = run_binary(&["--curve", "4", "--size", "5", "--comment", "Hello World!"]);
    assert_eq!(output, expected);
}

#[test]
fn test_default_line_count() {
    let output = run_binary(&[]);
    assert_eq!(output.lines().count(), 23);
}

#[test]
fn test_reverse_puts_head_last() {
    let output = run_binary(&["--size", "3", "--reverse", "--curve", "0", "-c", "up"]);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec!["", "╔═(███)═╗", "╔═(███)═╗", "╔═(███)═╗", "  ╔⊙ ⊙╗", "", " up", ""]
    );
}

#[test]
fn test_negative_numbers_fall_back_to_defaults() {
    let output = run_binary(&["--size", "-3", "--width", "-1", "--curve", "-2"]);
    assert_eq!(output, run_binary(&[]));
}

#[test]
fn test_escaped_skin() {
    let output = run_binary(&["--size", "1", "--curve", "0", "--skin", "\\u2593"]);
    assert!(output.contains("╚═(▓▓▓)═╝"), "got:\n{}", output);
}

// ─── Errors ─────────────────────────────────────────────────────────────────

#[test]
fn test_invalid_skin_fails() {
    let output = run(&["--skin", "foobar"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("skin pattern must be a single character"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_invalid_head_fails() {
    let output = run(&["--head", ""]);
    assert_eq!(output.status.code(), Some(1));
}

// ─── Colours ────────────────────────────────────────────────────────────────

#[test]
fn test_color_wraps_every_line() {
    let output = run_binary(&["--size", "2", "--color", "red"]);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 5);
    for line in lines {
        assert!(line.starts_with(" \x1b[31m"), "line: {:?}", line);
        assert!(line.ends_with("\x1b[0m"), "line: {:?}", line);
    }
}

#[test]
fn test_no_color_strips_escapes() {
    let output = run_binary(&["--size", "2", "--rainbow", "--no-color"]);
    assert!(!output.contains('\x1b'));
    assert!(output.contains(" ╚═(███)═╝"));
}

#[test]
fn test_rainbow_conflicts_with_random() {
    let output = run(&["--rainbow", "--random"]);
    assert!(!output.status.success());
}

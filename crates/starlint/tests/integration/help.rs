use std::process::Command;

use crate::helpers::CommandExt;
use crate::helpers::binary_path;

#[test]
fn test_help() {
    let output = Command::new(binary_path()).arg("--help").run();

    assert_eq!(output.status.code(), Some(0));
    let stdout = output.plain_stdout();
    assert!(stdout.contains("Find and Fix Documentation Comment Layout in JavaScript Code"));
    assert!(stdout.contains("check"));
}

#[test]
fn test_check_help() {
    let output = Command::new(binary_path())
        .arg("check")
        .arg("--help")
        .run();

    assert_eq!(output.status.code(), Some(0));
    let stdout = output.plain_stdout();
    assert!(stdout.contains("--fix"));
    assert!(stdout.contains("--allow-no-vcs"));
    assert!(stdout.contains("--output-format"));
}

#[test]
fn test_check_without_files_shows_help() {
    let output = Command::new(binary_path()).arg("check").run();

    // `arg_required_else_help` prints the usage and exits with an error code
    assert_eq!(output.status.code(), Some(2));
    let all = format!("{}{}", output.plain_stdout(), output.plain_stderr());
    assert!(all.contains("Usage"));
}

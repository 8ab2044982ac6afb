use std::process::Command;
use tempfile::TempDir;

use crate::helpers::CommandExt;
use crate::helpers::binary_path;

const BAD_COMMENT: &str = "/**\n* A\n*/\nclass A {}\n";

#[test]
fn test_no_git_repo_does_not_block_lint() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::create_dir_all(directory.join("demos"))?;
    std::fs::write(directory.join("demos/test.js"), BAD_COMMENT)?;

    let output = Command::new(binary_path())
        .current_dir(directory)
        .arg("check")
        .arg(".")
        .env("NO_COLOR", "1")
        .run();

    // Reporting is fine without VCS, only fixing is blocked
    assert_eq!(output.status.code(), Some(1));
    assert!(
        output
            .plain_stdout()
            .contains("stars must have identical indent")
    );

    Ok(())
}

#[test]
fn test_no_git_repo_blocks_fix() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    // Ensure that the message is printed only once and not once per file
    let test_path = directory.join("demos/test.js");
    let test_path_2 = directory.join("demos/test_2.js");
    std::fs::create_dir_all(directory.join("demos"))?;
    std::fs::write(&test_path, BAD_COMMENT)?;
    std::fs::write(&test_path_2, BAD_COMMENT)?;

    let output = Command::new(binary_path())
        .current_dir(directory)
        .arg("check")
        .arg(".")
        .arg("--fix")
        .env("NO_COLOR", "1")
        .run();

    assert_eq!(output.status.code(), Some(2));
    let stderr = output.plain_stderr();
    assert_eq!(stderr.matches("no Version Control System").count(), 1);
    assert!(stderr.contains("Add `--allow-no-vcs` to the call to apply the fixes."));

    // Files are untouched
    assert_eq!(std::fs::read_to_string(&test_path)?, BAD_COMMENT);
    assert_eq!(std::fs::read_to_string(&test_path_2)?, BAD_COMMENT);

    Ok(())
}

#[test]
fn test_no_git_repo_allow_no_vcs() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    let test_path = directory.join("demos/test.js");
    std::fs::create_dir_all(directory.join("demos"))?;
    std::fs::write(&test_path, BAD_COMMENT)?;

    let output = Command::new(binary_path())
        .current_dir(directory)
        .arg("check")
        .arg(".")
        .arg("--fix")
        .arg("--allow-no-vcs")
        .run();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        std::fs::read_to_string(&test_path)?,
        "/**\n * A\n */\nclass A {}\n"
    );

    Ok(())
}

#[test]
fn test_mixed_vcs_coverage_blocks_fix() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    // Create two subdirectories
    let git_subdir = directory.join("git_covered");
    let no_git_subdir = directory.join("not_covered");
    std::fs::create_dir_all(&git_subdir)?;
    std::fs::create_dir_all(&no_git_subdir)?;

    // Create test files in both subdirs
    std::fs::write(git_subdir.join("test.js"), BAD_COMMENT)?;
    std::fs::write(no_git_subdir.join("test.js"), BAD_COMMENT)?;

    // Only initialize git in one subdir
    let _ = git2::Repository::init(&git_subdir)?;

    // Try to fix both subdirs - should fail because one is not in VCS
    let output = Command::new(binary_path())
        .current_dir(directory)
        .arg("check")
        .arg(".")
        .arg("--fix")
        .env("NO_COLOR", "1")
        .run();

    assert_eq!(output.status.code(), Some(2));
    assert!(
        output
            .plain_stderr()
            .contains("no Version Control System")
    );

    Ok(())
}

use std::process::Command;
use tempfile::TempDir;

use crate::helpers::CommandExt;
use crate::helpers::binary_path;
use crate::helpers::create_commit;

const BAD_COMMENT: &str = "/**\n* A\n*/\nclass A {}\n";
const FIXED_COMMENT: &str = "/**\n * A\n */\nclass A {}\n";

#[test]
fn test_dirty_repo_blocks_fix() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    let test_path = directory.join("test.js");
    std::fs::write(&test_path, BAD_COMMENT)?;

    // The repo has an untracked file, so the worktree is dirty
    let _ = git2::Repository::init(directory)?;

    let output = Command::new(binary_path())
        .current_dir(directory)
        .arg("check")
        .arg(".")
        .arg("--fix")
        .env("NO_COLOR", "1")
        .run();

    assert_eq!(output.status.code(), Some(2));
    let stderr = output.plain_stderr();
    assert!(stderr.contains("uncommitted changes"));
    assert!(stderr.contains("test.js (dirty)"));

    // File is untouched
    assert_eq!(std::fs::read_to_string(&test_path)?, BAD_COMMENT);

    Ok(())
}

#[test]
fn test_dirty_repo_allow_dirty() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    let test_path = directory.join("test.js");
    std::fs::write(&test_path, BAD_COMMENT)?;

    let _ = git2::Repository::init(directory)?;

    let output = Command::new(binary_path())
        .current_dir(directory)
        .arg("check")
        .arg(".")
        .arg("--fix")
        .arg("--allow-dirty")
        .run();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(std::fs::read_to_string(&test_path)?, FIXED_COMMENT);

    Ok(())
}

#[test]
fn test_clean_repo_does_not_block_fix() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    let test_path = directory.join("test.js");
    std::fs::write(&test_path, BAD_COMMENT)?;

    let repo = git2::Repository::init(directory)?;
    create_commit(test_path.clone(), repo)?;

    let output = Command::new(binary_path())
        .current_dir(directory)
        .arg("check")
        .arg(".")
        .arg("--fix")
        .run();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(std::fs::read_to_string(&test_path)?, FIXED_COMMENT);

    Ok(())
}

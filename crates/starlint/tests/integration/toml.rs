use std::process::Command;
use tempfile::TempDir;

use crate::helpers::CommandExt;
use crate::helpers::binary_path;

const BAD_COMMENT: &str = "/**\n* A\n*/\nclass A {}\n";

#[test]
fn test_exclude_patterns() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(
        directory.join("starlint.toml"),
        "[lint]\nexclude = [\"ignored/\"]\n",
    )?;
    std::fs::write(directory.join("test.js"), BAD_COMMENT)?;
    std::fs::create_dir_all(directory.join("ignored"))?;
    std::fs::write(directory.join("ignored/skip.js"), BAD_COMMENT)?;

    let output = Command::new(binary_path())
        .current_dir(directory)
        .arg("check")
        .arg(".")
        .arg("--output-format")
        .arg("concise")
        .env("NO_COLOR", "1")
        .run();

    assert_eq!(output.status.code(), Some(1));
    let stdout = output.plain_stdout();
    assert!(stdout.contains("test.js"));
    assert!(!stdout.contains("skip.js"));
    assert!(stdout.contains("Found 1 error."));

    Ok(())
}

#[test]
fn test_hidden_toml_variant() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(
        directory.join(".starlint.toml"),
        "[lint]\nexclude = [\"ignored/\"]\n",
    )?;
    std::fs::write(directory.join("test.js"), BAD_COMMENT)?;
    std::fs::create_dir_all(directory.join("ignored"))?;
    std::fs::write(directory.join("ignored/skip.js"), BAD_COMMENT)?;

    let output = Command::new(binary_path())
        .current_dir(directory)
        .arg("check")
        .arg(".")
        .arg("--output-format")
        .arg("concise")
        .env("NO_COLOR", "1")
        .run();

    assert_eq!(output.status.code(), Some(1));
    assert!(!output.plain_stdout().contains("skip.js"));

    Ok(())
}

#[test]
fn test_default_exclude_skips_node_modules() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(
        directory.join("test.js"),
        "/**\n * A\n */\nclass A {}\n",
    )?;
    std::fs::create_dir_all(directory.join("node_modules/dep"))?;
    std::fs::write(directory.join("node_modules/dep/index.js"), BAD_COMMENT)?;

    let output = Command::new(binary_path())
        .current_dir(directory)
        .arg("check")
        .arg(".")
        .env("NO_COLOR", "1")
        .run();

    assert_eq!(output.status.code(), Some(0));
    assert!(output.plain_stdout().contains("All checks passed!"));

    Ok(())
}

#[test]
fn test_no_default_exclude() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::create_dir_all(directory.join("node_modules/dep"))?;
    std::fs::write(directory.join("node_modules/dep/index.js"), BAD_COMMENT)?;

    let output = Command::new(binary_path())
        .current_dir(directory)
        .arg("check")
        .arg(".")
        .arg("--no-default-exclude")
        .env("NO_COLOR", "1")
        .run();

    assert_eq!(output.status.code(), Some(1));
    assert!(
        output
            .plain_stdout()
            .contains("stars must have identical indent")
    );

    Ok(())
}

#[test]
fn test_invalid_toml_field_is_an_error() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(
        directory.join("starlint.toml"),
        "[lint]\nselect = [\"typo\"]\n",
    )?;
    std::fs::write(directory.join("test.js"), BAD_COMMENT)?;

    let output = Command::new(binary_path())
        .current_dir(directory)
        .arg("check")
        .arg(".")
        .env("NO_COLOR", "1")
        .run();

    assert_eq!(output.status.code(), Some(2));
    let stderr = output.plain_stderr();
    assert!(stderr.contains("starlint failed"));
    assert!(stderr.contains("Failed to parse"));

    Ok(())
}

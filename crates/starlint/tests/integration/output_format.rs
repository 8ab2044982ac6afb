use std::process::Command;
use tempfile::TempDir;

use crate::helpers::CommandExt;
use crate::helpers::binary_path;

const BAD_COMMENT: &str = "/**\n* A\n* B\n*/\nclass A {}\n";

#[test]
fn test_json_output() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("test.js"), BAD_COMMENT)?;

    let output = Command::new(binary_path())
        .current_dir(directory)
        .arg("check")
        .arg(".")
        .arg("--output-format")
        .arg("json")
        .run();

    assert_eq!(output.status.code(), Some(1));

    let parsed: serde_json::Value = serde_json::from_str(&output.stdout)?;
    let diagnostics = parsed["diagnostics"].as_array().unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0]["message"]["name"], "star_indent");
    assert_eq!(
        diagnostics[0]["message"]["body"],
        "stars must have identical indent"
    );
    assert!(diagnostics[0]["fix"]["content"].as_str().unwrap().starts_with("/**"));
    assert_eq!(parsed["errors"].as_array().unwrap().len(), 0);

    Ok(())
}

#[test]
fn test_json_output_reports_parse_errors() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("test.js"), "const = ;\n")?;

    let output = Command::new(binary_path())
        .current_dir(directory)
        .arg("check")
        .arg(".")
        .arg("--output-format")
        .arg("json")
        .run();

    assert_eq!(output.status.code(), Some(2));

    let parsed: serde_json::Value = serde_json::from_str(&output.stdout)?;
    let errors = parsed["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0]["error"].as_str().unwrap().contains("Failed to parse"));

    Ok(())
}

#[test]
fn test_github_output() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("test.js"), BAD_COMMENT)?;

    let output = Command::new(binary_path())
        .current_dir(directory)
        .arg("check")
        .arg(".")
        .arg("--output-format")
        .arg("github")
        .run();

    assert_eq!(output.status.code(), Some(1));
    let stdout = output.plain_stdout();
    assert!(stdout.contains("::warning title=Starlint (star_indent),file=test.js,line=1,col=1::"));
    assert!(stdout.contains("[star_indent] stars must have identical indent"));

    Ok(())
}

#[test]
fn test_full_output() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("test.js"), BAD_COMMENT)?;

    let output = Command::new(binary_path())
        .current_dir(directory)
        .arg("check")
        .arg(".")
        .env("NO_COLOR", "1")
        .run();

    assert_eq!(output.status.code(), Some(1));
    let stdout = output.plain_stdout();
    // Annotated snippet: rule header, file origin, and the offending source
    assert!(stdout.contains("warning: star_indent"));
    assert!(stdout.contains("test.js"));
    assert!(stdout.contains("stars must have identical indent"));

    Ok(())
}

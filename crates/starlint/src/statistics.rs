use colored::Colorize;
use starlint_core::diagnostic::Diagnostic;
use std::{collections::HashMap, path::PathBuf};

use crate::status::ExitStatus;

pub fn print_statistics(
    diagnostics: &[&Diagnostic],
    parent_config_path: Option<PathBuf>,
) -> anyhow::Result<ExitStatus> {
    if diagnostics.is_empty() {
        println!("All checks passed!");
        return Ok(ExitStatus::Success);
    }

    // Hashmap with violation kind as key, and (number of occurrences, has_fix)
    // as value.
    let mut hm: HashMap<&String, (usize, bool)> = HashMap::new();

    for diagnostic in diagnostics {
        let kind = &diagnostic.message.name;
        let entry = hm.entry(kind).or_default();
        entry.0 += 1;
        entry.1 |= diagnostic.has_fix();
    }

    let mut sorted: Vec<_> = hm.iter().collect();
    sorted.sort_by_key(|a| a.1.0);
    sorted.reverse();

    for (key, value) in sorted {
        let star = if value.1 { "*" } else { " " };
        println!(
            "{:>5} [{}] {}",
            value.0.to_string().bold(),
            star,
            key.bold().red()
        );
    }

    println!("\nViolations with `[*]` have an automatic fix.");

    // Inform the user if the config file used comes from a parent directory.
    if let Some(config_path) = parent_config_path {
        println!("\nUsed '{}'", config_path.display());
    }

    Ok(ExitStatus::Failure)
}

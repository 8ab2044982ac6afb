use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use crate::analyze::leading_comments::LeadingCommentVisitor;
use crate::config::Config;
use crate::diagnostic::*;
use crate::fix::apply_fixes;
use crate::fs::relativize_path;
use crate::location::{compute_lints_location, find_new_lines};
use crate::parse::{ParsedSource, parse_js};
use crate::vcs::check_version_control;
use swc_ecma_visit::VisitWith;

pub fn check(config: Config) -> Vec<(String, Result<Vec<Diagnostic>, anyhow::Error>)> {
    // Ensure that all paths are covered by VCS before rewriting anything.
    // This is conservative: we could apply fixes on the covered paths and
    // error for the others, but it is safer to force the user to deal with
    // that before any file is touched.
    if config.apply_fixes && !config.paths.is_empty() {
        let path_strings: Vec<String> = config.paths.iter().map(relativize_path).collect();
        if let Err(e) = check_version_control(&path_strings, &config) {
            let first_path = path_strings.first().unwrap().clone();
            return vec![(first_path, Err(e))];
        }
    }

    // Wrap config in Arc to avoid expensive clones in parallel execution
    let config = Arc::new(config);

    config
        .paths
        .par_iter()
        .map(|file| {
            let res = check_path(file, Arc::clone(&config));
            (relativize_path(file), res)
        })
        .collect()
}

pub fn check_path(path: &PathBuf, config: Arc<Config>) -> Result<Vec<Diagnostic>, anyhow::Error> {
    if config.apply_fixes {
        lint_fix(path)
    } else {
        lint_only(path)
    }
}

pub fn lint_only(path: &PathBuf) -> Result<Vec<Diagnostic>, anyhow::Error> {
    let path = relativize_path(path);
    let contents = fs::read_to_string(Path::new(&path))
        .with_context(|| format!("Failed to read file: {path}"))?;

    let checks = get_checks(&contents, &PathBuf::from(&path))
        .with_context(|| format!("Failed to get checks for file: {path}"))?;

    Ok(checks)
}

pub fn lint_fix(path: &PathBuf) -> Result<Vec<Diagnostic>, anyhow::Error> {
    let path = relativize_path(path);
    let contents = fs::read_to_string(Path::new(&path))
        .with_context(|| format!("Failed to read file: {path}"))?;

    let checks = get_checks(&contents, &PathBuf::from(&path))
        .with_context(|| format!("Failed to get checks for file: {path}"))?;

    if checks.is_empty() {
        return Ok(checks);
    }

    // Comment ranges never overlap and the formatter's output always
    // validates, so a single rewrite pass converges. Check once more on the
    // rewritten text to report anything left over.
    let fixed_text = apply_fixes(&checks, &contents);
    fs::write(&path, &fixed_text).with_context(|| format!("Failed to write file: {path}"))?;

    let checks = get_checks(&fixed_text, &PathBuf::from(&path))
        .with_context(|| format!("Failed to get checks for file: {path}"))?;

    Ok(checks)
}

// The object that collects diagnostics while walking one parsed file.
pub struct Checker<'src> {
    // The diagnostics to report (possibly empty).
    pub diagnostics: Vec<Diagnostic>,
    // The parsed file, used to resolve comments and source positions.
    pub(crate) source: &'src ParsedSource,
}

impl<'src> Checker<'src> {
    fn new(source: &'src ParsedSource) -> Self {
        Self { diagnostics: vec![], source }
    }

    // This takes an Option<Diagnostic> because each check reports a
    // Some(Diagnostic) or None.
    pub(crate) fn report_diagnostic(&mut self, diagnostic: Option<Diagnostic>) {
        if let Some(diagnostic) = diagnostic {
            self.diagnostics.push(diagnostic);
        }
    }
}

// Takes the JavaScript code as a string, parses it, and obtains a (possibly
// empty) vector of `Diagnostic`s.
//
// If there are diagnostics to report, this is also where their range in the
// string is converted to their location (row, column).
pub fn get_checks(contents: &str, file: &Path) -> Result<Vec<Diagnostic>> {
    let source = parse_js(contents, file)?;

    let mut checker = Checker::new(&source);
    let mut visitor = LeadingCommentVisitor::new(&mut checker);
    source.program.visit_with(&mut visitor);

    let diagnostics: Vec<Diagnostic> = checker
        .diagnostics
        .into_iter()
        .map(|mut x| {
            x.filename = file.to_path_buf();
            x
        })
        .collect();

    let loc_new_lines = find_new_lines(contents);
    let diagnostics = compute_lints_location(diagnostics, &loc_new_lines);

    Ok(diagnostics)
}

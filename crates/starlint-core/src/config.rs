use anyhow::Result;
use std::path::PathBuf;

use crate::resolve::PathResolver;
use crate::settings::Settings;

#[derive(Clone, Debug)]
/// Arguments provided in the CLI.
pub struct ArgsConfig {
    /// Paths to files to lint.
    pub files: Vec<PathBuf>,
    /// Did the user pass the --fix flag?
    pub fix: bool,
    /// Did the user pass the --fix-only flag?
    pub fix_only: bool,
    /// Apply fixes even if the Git branch still has uncommitted files?
    pub allow_dirty: bool,
    /// Apply fixes even if there is no version control system?
    pub allow_no_vcs: bool,
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Paths to files to lint, after discovery and exclusion.
    pub paths: Vec<PathBuf>,
    /// Apply the fixes instead of only reporting the violations?
    pub apply_fixes: bool,
    /// Apply fixes without reporting leftover violations?
    pub fix_only: bool,
    /// Apply fixes even if the Git branch still has uncommitted files?
    pub allow_dirty: bool,
    /// Apply fixes even if there is no version control system?
    pub allow_no_vcs: bool,
}

pub fn build_config(
    check_config: &ArgsConfig,
    resolver: &PathResolver<Settings>,
    paths: Vec<PathBuf>,
) -> Result<Config> {
    let root_path = resolver
        .items()
        .iter()
        .map(|x| x.path())
        .collect::<Vec<_>>();

    if root_path.len() > 1 {
        todo!("Don't know how to handle multiple TOML")
    }

    // `--fix-only` implies `--fix`.
    let apply_fixes = check_config.fix || check_config.fix_only;

    Ok(Config {
        paths,
        apply_fixes,
        fix_only: check_config.fix_only,
        allow_dirty: check_config.allow_dirty,
        allow_no_vcs: check_config.allow_no_vcs,
    })
}

use crate::config::Config;
use anyhow::{Result, bail};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Check version control status once for multiple paths.
///
/// It is completely possible that starlint is called from a directory where
/// subdirs are different projects, some not covered by VCS, some covered by
/// VCS but dirty, and some clean. Therefore we cannot just take the first
/// path, check if it's covered by VCS and then get the statuses of all our
/// paths in this repo. We have to loop through paths.
///
/// What takes time is getting the statuses, so the paths are first grouped by
/// repository and the statuses are queried only once per repository.
pub fn check_version_control(paths: &[String], config: &Config) -> Result<()> {
    if config.allow_no_vcs {
        return Ok(());
    }

    // Group paths by their repository root, keeping the repository handle
    // around so it doesn't have to be discovered a second time.
    let mut repos: HashMap<PathBuf, git2::Repository> = HashMap::new();
    let mut paths_without_repo: Vec<String> = Vec::new();

    for path in paths {
        match git2::Repository::discover(Path::new(path)) {
            Ok(repo) => {
                let repo_root = repo
                    .path()
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_default();
                repos.entry(repo_root).or_insert(repo);
            }
            Err(_) => {
                paths_without_repo.push(path.clone());
            }
        }
    }

    // Check if any paths are not in a repo
    if !paths_without_repo.is_empty() {
        bail!(
            "`starlint check --fix` can potentially perform destructive changes but no \
            Version Control System (e.g. Git) was found on this project, so no fixes \
            were applied. \n\
            Add `--allow-no-vcs` to the call to apply the fixes."
        )
    }

    if config.allow_dirty {
        return Ok(());
    }

    // Check each repository once
    let mut all_dirty_files = Vec::new();

    for repo in repos.values() {
        let mut repo_opts = git2::StatusOptions::new();
        repo_opts.include_ignored(false);
        repo_opts.include_untracked(true);

        for status in repo.statuses(Some(&mut repo_opts))?.iter() {
            if let Some(path) = status.path()
                && status.status() != git2::Status::CURRENT
            {
                all_dirty_files.push(path.to_string());
            }
        }
    }

    if !all_dirty_files.is_empty() {
        let mut files_list = String::new();
        for file in &all_dirty_files {
            files_list.push_str("  * ");
            files_list.push_str(file);
            files_list.push_str(" (dirty)\n");
        }

        bail!(
            "`starlint check --fix` can potentially perform destructive changes but the working \
            directory of this project has uncommitted changes, so no fixes were applied. \n\
            To apply the fixes, either add `--allow-dirty` to the call, or commit the changes \
            to these files:\n\
             \n\
             {}\n\
             ",
            files_list
        );
    }

    Ok(())
}

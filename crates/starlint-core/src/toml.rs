//
// Adapted from Air
// https://github.com/posit-dev/air/blob/main/crates/workspace/src/toml.rs
// and
// https://github.com/posit-dev/air/blob/main/crates/workspace/src/toml_options.rs
//
// MIT License - Posit PBC

use std::fmt::Display;
use std::fmt::Formatter;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use crate::settings::LinterSettings;
use crate::settings::Settings;

#[derive(Debug)]
pub enum ParseTomlError {
    Read(PathBuf, io::Error),
    Deserialize(PathBuf, toml::de::Error),
}

impl std::error::Error for ParseTomlError {}

impl Display for ParseTomlError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            // It's nicer if we don't make these paths relative, so we can quickly
            // jump to the TOML file to see what is wrong
            Self::Read(path, err) => {
                write!(f, "Failed to read {path}:\n{err}", path = path.display())
            }
            Self::Deserialize(path, err) => {
                write!(f, "Failed to parse {path}:\n{err}", path = path.display())
            }
        }
    }
}

pub fn parse_starlint_toml(path: &Path) -> Result<TomlOptions, ParseTomlError> {
    let toml = fs::read_to_string(path)
        .map_err(|err| ParseTomlError::Read(path.to_path_buf(), err))?;
    toml::from_str(&toml).map_err(|err| ParseTomlError::Deserialize(path.to_path_buf(), err))
}

#[derive(Clone, Debug, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct TomlOptions {
    pub lint: Option<LinterTomlOptions>,
}

#[derive(Clone, Debug, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct LinterTomlOptions {
    /// # Patterns to exclude from checking
    ///
    /// Exclude patterns are modeled after what you can provide in a
    /// [.gitignore](https://git-scm.com/docs/gitignore), and are resolved
    /// relative to the parent directory that your `starlint.toml` is contained
    /// within. For example, if your `starlint.toml` was located at
    /// `root/starlint.toml`, then:
    ///
    /// - `file.js` excludes a file named `file.js` located anywhere below
    ///   `root/`. This is equivalent to `**/file.js`.
    ///
    /// - `folder/` excludes a directory named `folder` (and all of its
    ///   children) located anywhere below `root/`.
    ///
    /// - `/file.js` excludes a file named `file.js` located at `root/file.js`.
    ///
    /// - `file-*.js` excludes JS files named like `file-this.js` and
    ///   `file-that.js` located anywhere below `root/`.
    ///
    /// - `folder/**/*.js` excludes all JS files located anywhere below
    ///   `root/folder/`.
    pub exclude: Option<Vec<String>>,

    /// # Whether or not to use default exclude patterns
    ///
    /// starlint automatically excludes a default set of folders and files. If
    /// this option is set to `false`, these files will be checked as well.
    ///
    /// The default set of excluded patterns are:
    /// - `.git/`
    /// - `node_modules/`
    /// - `dist/`
    /// - `build/`
    /// - `coverage/`
    /// - `vendor/`
    /// - `*.min.js`
    pub default_exclude: Option<bool>,
}

/// Return the path to the `starlint.toml` or `.starlint.toml` file in a given directory.
pub fn find_starlint_toml_in_directory<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
    // Check for `starlint.toml` first, as we prioritize the "visible" one.
    let toml = path.as_ref().join("starlint.toml");
    if toml.is_file() {
        return Some(toml);
    }

    // Now check for `.starlint.toml` as well
    let toml = path.as_ref().join(".starlint.toml");
    if toml.is_file() {
        return Some(toml);
    }

    // Didn't find a configuration file
    None
}

/// Find the path to the closest `starlint.toml` or `.starlint.toml` if one
/// exists, walking up the filesystem
pub fn find_starlint_toml<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
    for directory in path.as_ref().ancestors() {
        if let Some(toml) = find_starlint_toml_in_directory(directory) {
            return Some(toml);
        }
    }
    None
}

impl TomlOptions {
    pub fn into_settings(self, _root: &Path) -> anyhow::Result<Settings> {
        let linter = self.lint.unwrap_or_default();

        let linter = LinterSettings {
            exclude: linter.exclude,
            default_exclude: linter.default_exclude,
        };

        Ok(Settings { linter })
    }
}

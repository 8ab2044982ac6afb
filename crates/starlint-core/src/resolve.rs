use std::path::{Path, PathBuf};

use crate::fs::normalize_path;

/// Maps a directory to the value resolved for it, typically [crate::settings::Settings].
#[derive(Debug)]
pub struct PathEntry<T> {
    path: PathBuf,
    value: T,
}

impl<T> PathEntry<T> {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn value(&self) -> &T {
        &self.value
    }
}

/// Resolves a path to the value registered for its closest registered
/// ancestor directory, falling back to a default.
#[derive(Debug)]
pub struct PathResolver<T> {
    fallback: T,
    entries: Vec<PathEntry<T>>,
}

impl<T> PathResolver<T> {
    pub fn new(fallback: T) -> Self {
        Self { fallback, entries: Vec::new() }
    }

    pub fn add<P: AsRef<Path>>(&mut self, directory: P, value: T) {
        self.entries.push(PathEntry {
            path: normalize_path(directory),
            value,
        });
    }

    pub fn items(&self) -> &[PathEntry<T>] {
        &self.entries
    }

    /// The value registered for the longest ancestor of `path`, or the
    /// fallback when no registered directory contains it.
    pub fn resolve<P: AsRef<Path>>(&self, path: P) -> &T {
        let path = normalize_path(path);
        self.entries
            .iter()
            .filter(|entry| path.starts_with(&entry.path))
            .max_by_key(|entry| entry.path.components().count())
            .map(|entry| &entry.value)
            .unwrap_or(&self.fallback)
    }
}

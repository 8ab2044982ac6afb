use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Turn a possibly-relative path into an absolute, normalized one without
/// touching the filesystem.
pub fn normalize_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    path.absolutize()
        .map(|p| p.into_owned())
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Render a path relative to the current working directory when possible.
/// Used for display and for keeping diagnostics stable across machines.
pub fn relativize_path<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    if let Ok(cwd) = std::env::current_dir()
        && let Ok(stripped) = path.strip_prefix(&cwd)
    {
        return stripped.display().to_string();
    }
    path.display().to_string()
}

/// Whether the path has one of the JavaScript source extensions.
pub fn has_js_extension(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("js" | "mjs" | "cjs")
    )
}

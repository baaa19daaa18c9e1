//! Path utilities: expand ~, resolve report destinations.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Explicit `--file` wins; otherwise `<export_dir>/<default_name>`.
pub fn resolve_output(file: Option<&str>, export_dir: &str, default_name: &str) -> PathBuf {
    match file {
        Some(f) => expand_tilde(f),
        None => Path::new(&expand_tilde(export_dir)).join(default_name),
    }
}

use crate::result::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve the extension project root from the optional --path argument,
/// defaulting to the current directory.
pub fn find_project_root(path: Option<&Path>) -> Result<PathBuf> {
    let root = path
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if !root.is_dir() {
        return Err(crate::error::Error::ProjectNotFound(
            root.display().to_string(),
        ));
    }

    Ok(root)
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Archive size in megabytes, for the success report
pub fn size_mb(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}

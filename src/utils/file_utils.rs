use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Ensures a string ends with a newline character.
/// This is a helper to maintain POSIX compliance for generated files.
pub fn ensure_trailing_newline(content: impl Into<String>) -> String {
    let content = content.into();
    if content.ends_with('\n') {
        content
    } else {
        format!("{content}\n")
    }
}

pub fn ensure_directory(dir: &Path, label: &str) -> Result<()> {
    if !dir.exists() {
        anyhow::bail!("{label} directory not found: {}", dir.display());
    }
    if !dir.is_dir() {
        anyhow::bail!("{label} path is not a directory: {}", dir.display());
    }
    fs::read_dir(dir)
        .with_context(|| format!("Failed to read {label} directory: {}", dir.display()))?;
    Ok(())
}

pub fn write_file(file_path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(file_path, content)
        .with_context(|| format!("Failed to write {}", file_path.display()))?;
    Ok(())
}

/// Path relative to `root` for display, falling back to the full path.
pub fn display_relative(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}

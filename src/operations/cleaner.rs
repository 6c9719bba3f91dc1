use crate::constants::YEAR_DIR_PATTERN;
use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level directories of `site_dir` named like a year (`2020`), sorted.
pub fn find_year_directories(site_dir: &Path) -> Result<Vec<PathBuf>> {
    let year_pattern = Regex::new(YEAR_DIR_PATTERN)?;
    let mut dirs = Vec::new();

    for entry in fs::read_dir(site_dir)
        .with_context(|| format!("Failed to read site directory: {}", site_dir.display()))?
    {
        let path = entry?.path();
        if !path.is_dir() || path.is_symlink() {
            continue;
        }
        let is_year = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| year_pattern.is_match(name));
        if is_year {
            dirs.push(path);
        }
    }

    dirs.sort();
    Ok(dirs)
}

pub fn remove_directories(dirs: &[PathBuf]) -> Result<()> {
    for dir in dirs {
        fs::remove_dir_all(dir)
            .with_context(|| format!("Failed to remove {}", dir.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_utils::helpers::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_year_directories_matches_four_digits_only() {
        let temp_dir = TempDir::new().unwrap();
        let site = temp_dir.path();
        create_file(site, "2020/06/01/post/index.html", "redirect");
        create_file(site, "2021/05/post/index.html", "redirect");
        create_file(site, "202/index.html", "keep");
        create_file(site, "20210/index.html", "keep");
        create_file(site, "blog/2021/index.html", "keep");
        create_file(site, "1999.html", "keep");

        let dirs = find_year_directories(site).unwrap();

        assert_eq!(dirs, vec![site.join("2020"), site.join("2021")]);
    }

    #[test]
    fn test_find_year_directories_missing_site_is_error() {
        let temp_dir = TempDir::new().unwrap();
        assert!(find_year_directories(&temp_dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_remove_directories() {
        let temp_dir = TempDir::new().unwrap();
        let site = temp_dir.path();
        create_file(site, "2020/06/post/index.html", "redirect");
        create_file(site, "about/index.html", "keep");

        remove_directories(&[site.join("2020")]).unwrap();

        assert_file_not_exists(site, "2020");
        assert_file_exists(site, "about/index.html");
    }
}

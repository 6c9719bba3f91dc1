use crate::constants::REDIRECT_CONFIG_FILENAME;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub blog: Option<PathBuf>,
    pub site: Option<PathBuf>,
    pub base: Option<String>,
    pub exclude: Option<Vec<String>>,
    pub overwrite: Option<bool>,
    pub pretty_urls: Option<bool>,
    pub follow_symlinks: Option<bool>,
}

pub fn default_config_path(current_dir: &Path) -> PathBuf {
    current_dir.join(REDIRECT_CONFIG_FILENAME)
}

/// Loads the config file at `config_path`.
///
/// A missing file is only an error when the path was given explicitly.
pub fn load_config(config_path: &Path, explicit: bool) -> Result<Option<Config>> {
    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found: {}", config_path.display());
        }
        return Ok(None);
    }

    let config_content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

    let mut config: Config = serde_yaml::from_str(&config_content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

    if let Some(config_dir) = config_path.parent() {
        config.resolve_paths(config_dir);
    }

    Ok(Some(config))
}

impl Config {
    fn resolve_paths(&mut self, config_dir: &Path) {
        for path in [&mut self.blog, &mut self.site].into_iter().flatten() {
            if path.is_relative() {
                *path = config_dir.join(&*path);
            }
        }
    }
}

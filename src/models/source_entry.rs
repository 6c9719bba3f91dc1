use crate::constants::INDEX_HTML;
use crate::models::BaseUrl;
use anyhow::{anyhow, Result};
use std::path::{Component, Path, PathBuf};

/// One published page of the built blog, e.g. `2021/05/my-post/index.html`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    pub relative_path: PathBuf,
    /// Relative directory of the page, `/`-separated. Empty for the blog root.
    pub slug: String,
}

impl SourceEntry {
    pub fn from_path(source_root: &Path, path: &Path) -> Result<Self> {
        let relative_path = path.strip_prefix(source_root).map_err(|_| {
            anyhow!(
                "{} is not inside source directory {}",
                path.display(),
                source_root.display()
            )
        })?;
        Ok(Self::new(relative_path.to_path_buf()))
    }

    pub fn new(relative_path: PathBuf) -> Self {
        let slug = relative_path
            .parent()
            .map(to_url_path)
            .unwrap_or_default();
        Self {
            relative_path,
            slug,
        }
    }

    pub fn is_source_root(&self) -> bool {
        self.slug.is_empty()
    }

    pub fn url_path(&self) -> String {
        to_url_path(&self.relative_path)
    }

    /// `base` + relative path. With `pretty_urls` a trailing `index.html` is
    /// replaced by the directory URL.
    pub fn target_url(&self, base: &BaseUrl, pretty_urls: bool) -> String {
        let is_index = self
            .relative_path
            .file_name()
            .is_some_and(|name| name == INDEX_HTML);

        if pretty_urls && is_index {
            if self.slug.is_empty() {
                base.to_string()
            } else {
                base.join(&format!("{}/", self.slug))
            }
        } else {
            base.join(&self.url_path())
        }
    }

    pub fn destination_path(&self, site_root: &Path) -> PathBuf {
        site_root.join(&self.relative_path)
    }
}

fn to_url_path(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

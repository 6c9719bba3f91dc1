use super::args::{
    CleanArgs, GenerateArgs, ResolvedCleanArgs, ResolvedGenerateArgs, ResolvedStatusArgs,
    SourceArgs, StatusArgs,
};
use crate::config;
use crate::constants::{DEFAULT_BASE_URL, REDIRECT_CONFIG_FILENAME};
use crate::models::{BaseUrl, ExclusionSet};
use crate::operations::{RedirectSettings, WriteMode};
use anyhow::{anyhow, Result};
use std::path::PathBuf;

fn resolve_dir(
    cli_value: Option<PathBuf>,
    config_value: Option<&PathBuf>,
    name: &str,
) -> Result<PathBuf> {
    cli_value.or_else(|| config_value.cloned()).ok_or_else(|| {
        anyhow!("Missing --{name} (or `{name}:` in {REDIRECT_CONFIG_FILENAME})")
    })
}

impl SourceArgs {
    pub fn with_config(self, config: Option<&config::Config>) -> Result<RedirectSettings> {
        let blog_dir = resolve_dir(self.blog, config.and_then(|c| c.blog.as_ref()), "blog")?;
        let site_dir = resolve_dir(self.site, config.and_then(|c| c.site.as_ref()), "site")?;

        let base = self
            .base
            .or_else(|| config?.base.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        // CLI exclusions replace the config list rather than extending it.
        let exclude = if self.exclude.is_empty() {
            config.and_then(|c| c.exclude.clone()).unwrap_or_default()
        } else {
            self.exclude
        };

        let pretty_urls = self.pretty_urls || config.and_then(|c| c.pretty_urls).unwrap_or(false);
        let follow_symlinks = if self.no_follow_symlinks {
            false
        } else {
            config.and_then(|c| c.follow_symlinks).unwrap_or(true)
        };

        Ok(RedirectSettings {
            blog_dir,
            site_dir,
            base: BaseUrl::new(&base),
            exclusions: ExclusionSet::new(exclude),
            pretty_urls,
            follow_symlinks,
        })
    }
}

impl GenerateArgs {
    pub fn with_config(self, config: Option<&config::Config>) -> Result<ResolvedGenerateArgs> {
        let overwrite = self.overwrite || config.and_then(|c| c.overwrite).unwrap_or(false);

        // --dry-run beats an overwrite coming from the config file.
        let mode = if self.dry_run {
            WriteMode::DryRun
        } else if overwrite {
            WriteMode::Overwrite
        } else {
            WriteMode::Normal
        };

        Ok(ResolvedGenerateArgs {
            settings: self.source.with_config(config)?,
            mode,
            json: self.json,
        })
    }
}

impl StatusArgs {
    pub fn with_config(self, config: Option<&config::Config>) -> Result<ResolvedStatusArgs> {
        Ok(ResolvedStatusArgs {
            settings: self.source.with_config(config)?,
            json: self.json,
        })
    }
}

impl CleanArgs {
    pub fn with_config(self, config: Option<&config::Config>) -> Result<ResolvedCleanArgs> {
        Ok(ResolvedCleanArgs {
            site_dir: resolve_dir(self.site, config.and_then(|c| c.site.as_ref()), "site")?,
            dry_run: self.dry_run,
            force: self.force,
        })
    }
}

use crate::operations::{RedirectSettings, WriteMode};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "blog-redirects",
    about = format!("Blog Redirects - {}", super::SUMMARY),
    version
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        value_name = "FILE",
        help = "Config file to read defaults from (default: ./redirects.yaml if present)"
    )]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate redirect pages in the site directory
    Generate(GenerateArgs),
    /// Show which redirect pages are missing or out of date
    Status(StatusArgs),
    /// Remove generated year directories from the site directory
    Clean(CleanArgs),
}

#[derive(Args, Default, Clone)]
pub struct SourceArgs {
    #[arg(
        long,
        value_name = "DIR",
        help = "Built blog output directory (e.g. blog/public)"
    )]
    pub blog: Option<PathBuf>,
    #[arg(long, value_name = "DIR", help = "Site repository root to write redirects into")]
    pub site: Option<PathBuf>,
    #[arg(
        long,
        value_name = "URL",
        help = "URL prefix the blog is now served under (default: /blog/)"
    )]
    pub base: Option<String>,
    #[arg(
        long,
        value_name = "NAME",
        value_delimiter = ',',
        help = "Path component or relative path to skip; can be repeated"
    )]
    pub exclude: Vec<String>,
    #[arg(long, help = "Redirect to the page directory instead of its index.html")]
    pub pretty_urls: bool,
    #[arg(long, help = "Do not follow symlinks while walking the blog directory")]
    pub no_follow_symlinks: bool,
}

#[derive(Args, Default, Clone)]
#[command(after_help = "Examples:
  blog-redirects generate --blog blog/public --site site             # Create missing redirects
  blog-redirects generate --blog blog/public --site site --dry-run   # Preview without writing
  blog-redirects generate --blog blog/public --site site --overwrite # Rewrite every redirect

Configuration Precedence (highest to lowest):
  1. CLI options
  2. Config file: redirects.yaml
  3. Default values (base /blog/, no exclusions, no overwrite)")]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: SourceArgs,
    #[arg(
        long,
        conflicts_with = "overwrite",
        help = "Print what would be done without writing any file"
    )]
    pub dry_run: bool,
    #[arg(long, help = "Replace redirect files that already exist")]
    pub overwrite: bool,
    #[arg(long, help = "Print the report as JSON")]
    pub json: bool,
}

#[derive(Args, Default, Clone)]
pub struct StatusArgs {
    #[command(flatten)]
    pub source: SourceArgs,
    #[arg(long, help = "Print the report as JSON")]
    pub json: bool,
}

#[derive(Args, Default, Clone)]
#[command(after_help = "Examples:
  blog-redirects clean --site site --dry-run   # List year directories that would be removed
  blog-redirects clean --site site --force     # Remove them without asking")]
pub struct CleanArgs {
    #[arg(long, value_name = "DIR", help = "Site repository root")]
    pub site: Option<PathBuf>,
    #[arg(long, help = "List directories without removing them")]
    pub dry_run: bool,
    #[arg(long, help = "Skip confirmation prompt and assume yes")]
    pub force: bool,
}

#[derive(Debug, Clone)]
pub struct ResolvedGenerateArgs {
    pub settings: RedirectSettings,
    pub mode: WriteMode,
    pub json: bool,
}

#[derive(Debug, Clone)]
pub struct ResolvedStatusArgs {
    pub settings: RedirectSettings,
    pub json: bool,
}

#[derive(Debug, Clone)]
pub struct ResolvedCleanArgs {
    pub site_dir: PathBuf,
    pub dry_run: bool,
    pub force: bool,
}

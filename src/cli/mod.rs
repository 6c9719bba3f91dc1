mod args;
mod config_resolution;


pub use args::*;

use crate::commands::{run_clean, run_generate, run_status};
use crate::config;
use clap::Parser;

const SUMMARY: &str = "Generate static redirect pages for a moved blog";

pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let current_dir = std::env::current_dir()?;

    let config = match &cli.config {
        Some(config_path) => config::load_config(&current_dir.join(config_path), true)?,
        None => config::load_config(&config::default_config_path(&current_dir), false)?,
    };

    match cli.command {
        Some(Commands::Generate(args)) => run_generate(args.with_config(config.as_ref())?),
        Some(Commands::Status(args)) => run_status(args.with_config(config.as_ref())?),
        Some(Commands::Clean(args)) => run_clean(args.with_config(config.as_ref())?),
        None => run_generate(cli.generate.with_config(config.as_ref())?),
    }
}

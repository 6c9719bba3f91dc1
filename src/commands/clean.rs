use crate::cli::ResolvedCleanArgs;
use crate::operations;
use crate::utils::file_utils::{display_relative, ensure_directory};
use crate::utils::print_utils::{print_info, print_success};
use crate::utils::prompt_utils::prompt_yes_no;
use anyhow::Result;

pub fn run_clean(args: ResolvedCleanArgs) -> Result<()> {
    ensure_directory(&args.site_dir, "site")?;
    println!(
        "📋 Cleaning generated year directories in {}",
        args.site_dir.display()
    );

    let year_dirs = operations::find_year_directories(&args.site_dir)?;
    if year_dirs.is_empty() {
        print_info("No generated year directories found");
        return Ok(());
    }

    let verb = if args.dry_run { "Would remove" } else { "Remove" };
    for dir in &year_dirs {
        println!(
            "    {verb}: {}/",
            display_relative(dir, &args.site_dir).display()
        );
    }

    if args.dry_run {
        print_info("Dry-run mode; nothing was removed.");
        return Ok(());
    }

    let prompt_message = format!("Remove {} year directories?", year_dirs.len());
    if !args.force && !prompt_yes_no(&prompt_message)? {
        print_info("Clean cancelled");
        return Ok(());
    }

    operations::remove_directories(&year_dirs)?;
    print_success(&format!("Removed {} year directories", year_dirs.len()));

    Ok(())
}

use crate::cli::ResolvedStatusArgs;
use crate::operations;
use crate::utils::print_utils::{print_success, print_warning};
use anyhow::Result;

#[derive(Debug)]
struct RedirectsOutOfSync;

impl std::fmt::Display for RedirectsOutOfSync {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Redirects are out of sync")
    }
}

impl std::error::Error for RedirectsOutOfSync {}

pub fn run_status(args: ResolvedStatusArgs) -> Result<()> {
    let settings = &args.settings;
    if !args.json {
        println!(
            "🔍 Redirect status for {} -> {}, base: {}",
            settings.blog_dir.display(),
            settings.site_dir.display(),
            settings.base
        );
    }

    let report = operations::check_redirect_status(settings)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.display(&settings.site_dir);
    }

    if !report.is_in_sync() {
        if !args.json {
            print_warning("Run 'blog-redirects generate' (with --overwrite for stale files)");
        }
        return Err(RedirectsOutOfSync.into());
    }

    if !args.json {
        print_success("All redirects are in sync");
    }
    Ok(())
}

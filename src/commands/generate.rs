use crate::cli::ResolvedGenerateArgs;
use crate::operations::{self, RedirectAction};
use crate::utils::print_utils::print_warning;
use anyhow::Result;

#[derive(Debug)]
pub struct RedirectWriteFailures {
    pub failed: usize,
}

impl std::fmt::Display for RedirectWriteFailures {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} redirect file(s) could not be written", self.failed)
    }
}

impl std::error::Error for RedirectWriteFailures {}

pub fn run_generate(args: ResolvedGenerateArgs) -> Result<()> {
    let settings = &args.settings;
    if !args.json {
        println!(
            "Generating redirects from {} into {}, base: {}, exclude: {}, mode: {}",
            settings.blog_dir.display(),
            settings.site_dir.display(),
            settings.base,
            settings.exclusions,
            args.mode
        );
    }

    let result = operations::generate_redirects(settings, args.mode)?;

    if args.json {
        println!("{}", result.to_json()?);
    } else {
        result.display(&settings.site_dir);
    }

    let failed = result.count(RedirectAction::Failed);
    if failed > 0 {
        if !args.json {
            print_warning("Some redirects failed; see the lines marked ❌ above");
        }
        return Err(RedirectWriteFailures { failed }.into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::WriteMode;
    use crate::utils::test_utils::helpers::*;
    use tempfile::TempDir;

    fn resolved(blog: &std::path::Path, site: &std::path::Path, mode: WriteMode) -> ResolvedGenerateArgs {
        ResolvedGenerateArgs {
            settings: test_settings(blog, site),
            mode,
            json: false,
        }
    }

    #[test]
    fn test_run_generate_writes_redirects() {
        let temp_dir = TempDir::new().unwrap();
        let blog = temp_dir.path().join("blog");
        let site = temp_dir.path().join("site");
        create_sample_blog(&blog);
        std::fs::create_dir_all(&site).unwrap();

        run_generate(resolved(&blog, &site, WriteMode::Normal)).unwrap();

        assert_file_exists(&site, "2021/05/my-post/index.html");
        assert_file_not_exists(&site, "index.html");
        assert_file_not_exists(&site, "tags");
    }

    #[test]
    fn test_run_generate_missing_blog_fails() {
        let temp_dir = TempDir::new().unwrap();
        let site = temp_dir.path().join("site");
        std::fs::create_dir_all(&site).unwrap();

        let result = run_generate(resolved(&temp_dir.path().join("missing"), &site, WriteMode::Normal));

        assert!(result.is_err());
        assert_eq!(list_files(&site), Vec::<String>::new());
    }

    #[test]
    fn test_run_generate_dry_run_json_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let blog = temp_dir.path().join("blog");
        let site = temp_dir.path().join("site");
        create_sample_blog(&blog);
        std::fs::create_dir_all(&site).unwrap();
        let mut args = resolved(&blog, &site, WriteMode::DryRun);
        args.json = true;

        run_generate(args).unwrap();

        assert_eq!(list_files(&site), Vec::<String>::new());
    }

    #[test]
    fn test_run_generate_write_failure_is_error_after_batch() {
        let temp_dir = TempDir::new().unwrap();
        let blog = temp_dir.path().join("blog");
        let site = temp_dir.path().join("site");
        create_sample_blog(&blog);
        create_file(&site, "2021", "blocks the 2021 tree");

        let err = run_generate(resolved(&blog, &site, WriteMode::Normal)).unwrap_err();

        let failures = err.downcast_ref::<RedirectWriteFailures>().unwrap();
        assert_eq!(failures.failed, 1);
        assert_file_exists(&site, "2020/06/01/first-post/index.html");
        assert_file_exists(&site, "about/index.html");
    }

    #[test]
    fn test_write_failures_error_message() {
        let error: anyhow::Error = RedirectWriteFailures { failed: 2 }.into();
        assert_eq!(error.to_string(), "2 redirect file(s) could not be written");
    }
}

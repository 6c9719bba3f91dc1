use crate::models::{BaseUrl, ExclusionSet, SourceEntry};
use crate::operations::find_source_entries;
use crate::utils::file_utils::ensure_directory;
use anyhow::Result;
use std::path::PathBuf;

/// Everything a generate or status run needs to know about the two trees.
#[derive(Debug, Clone)]
pub struct RedirectSettings {
    pub blog_dir: PathBuf,
    pub site_dir: PathBuf,
    pub base: BaseUrl,
    pub exclusions: ExclusionSet,
    pub pretty_urls: bool,
    pub follow_symlinks: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedRedirect {
    /// The blog's own home page; never mirrored onto the site root.
    SourceRoot(SourceEntry),
    Excluded {
        entry: SourceEntry,
        rule: String,
    },
    Redirect {
        entry: SourceEntry,
        destination: PathBuf,
        target: String,
    },
}

/// Resolves every source entry to what should happen to it.
///
/// Fails before touching anything if either root is missing or unreadable.
pub fn plan_redirects(settings: &RedirectSettings) -> Result<Vec<PlannedRedirect>> {
    ensure_directory(&settings.blog_dir, "blog")?;
    ensure_directory(&settings.site_dir, "site")?;

    let entries = find_source_entries(&settings.blog_dir, settings.follow_symlinks)?;

    let plan = entries
        .into_iter()
        .map(|entry| {
            if entry.is_source_root() {
                return PlannedRedirect::SourceRoot(entry);
            }
            if let Some(rule) = settings.exclusions.find_match(&entry.relative_path) {
                return PlannedRedirect::Excluded {
                    rule: rule.to_string(),
                    entry,
                };
            }
            PlannedRedirect::Redirect {
                destination: entry.destination_path(&settings.site_dir),
                target: entry.target_url(&settings.base, settings.pretty_urls),
                entry,
            }
        })
        .collect();

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_utils::helpers::*;
    use tempfile::TempDir;

    #[test]
    fn test_plan_redirects_classifies_entries() {
        let temp_dir = TempDir::new().unwrap();
        let blog = temp_dir.path().join("blog");
        let site = temp_dir.path().join("site");
        create_sample_blog(&blog);
        std::fs::create_dir_all(&site).unwrap();

        let plan = plan_redirects(&test_settings(&blog, &site)).unwrap();

        let redirects: Vec<(String, String)> = plan
            .iter()
            .filter_map(|planned| match planned {
                PlannedRedirect::Redirect {
                    entry, target, ..
                } => Some((entry.url_path(), target.clone())),
                _ => None,
            })
            .collect();
        assert_eq!(
            redirects,
            vec![
                (
                    "2020/06/01/first-post/index.html".to_string(),
                    "/blog/2020/06/01/first-post/index.html".to_string()
                ),
                (
                    "2021/05/my-post/index.html".to_string(),
                    "/blog/2021/05/my-post/index.html".to_string()
                ),
                (
                    "about/index.html".to_string(),
                    "/blog/about/index.html".to_string()
                ),
            ]
        );

        let excluded: Vec<String> = plan
            .iter()
            .filter_map(|planned| match planned {
                PlannedRedirect::Excluded { rule, .. } => Some(rule.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(excluded, vec!["categories", "css", "tags"]);

        assert!(plan
            .iter()
            .any(|planned| matches!(planned, PlannedRedirect::SourceRoot(_))));
    }

    #[test]
    fn test_plan_redirects_destination_mirrors_source() {
        let temp_dir = TempDir::new().unwrap();
        let blog = temp_dir.path().join("blog");
        let site = temp_dir.path().join("site");
        create_file(&blog, "2021/05/my-post/index.html", "post");
        std::fs::create_dir_all(&site).unwrap();

        let plan = plan_redirects(&test_settings(&blog, &site)).unwrap();

        match &plan[..] {
            [PlannedRedirect::Redirect { destination, .. }] => {
                assert_eq!(destination, &site.join("2021/05/my-post/index.html"));
            }
            other => panic!("unexpected plan: {other:?}"),
        }
    }

    #[test]
    fn test_plan_redirects_missing_blog_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let site = temp_dir.path().join("site");
        std::fs::create_dir_all(&site).unwrap();

        let err = plan_redirects(&test_settings(&temp_dir.path().join("nope"), &site)).unwrap_err();

        assert!(err.to_string().contains("blog directory not found"));
    }

    #[test]
    fn test_plan_redirects_missing_site_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let blog = temp_dir.path().join("blog");
        create_sample_blog(&blog);

        let err = plan_redirects(&test_settings(&blog, &temp_dir.path().join("nope"))).unwrap_err();

        assert!(err.to_string().contains("site directory not found"));
    }
}

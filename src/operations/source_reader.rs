use crate::constants::INDEX_HTML;
use crate::models::SourceEntry;
use crate::utils::file_utils::ensure_directory;
use crate::utils::print_utils::eprint_warning;
use anyhow::Result;
use ignore::WalkBuilder;
use std::path::Path;

/// Finds every `index.html` under `source_root`, sorted by path.
///
/// Hidden files and ignore files are not special: the blog output is walked
/// as-is. Only an unreadable `source_root` is an error; broken links and
/// unreadable subdirectories are reported on stderr and skipped.
pub fn find_source_entries(source_root: &Path, follow_symlinks: bool) -> Result<Vec<SourceEntry>> {
    ensure_directory(source_root, "blog")?;

    let mut builder = WalkBuilder::new(source_root);
    builder
        .standard_filters(false)
        .follow_links(follow_symlinks)
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut entries = Vec::new();
    for result in builder.build() {
        let dir_entry = match result {
            Ok(dir_entry) => dir_entry,
            Err(e) => {
                eprint_warning(&format!("Skipping unreadable source path: {e}"));
                continue;
            }
        };

        let is_file = dir_entry.file_type().is_some_and(|file_type| file_type.is_file());
        if !is_file || dir_entry.file_name() != INDEX_HTML {
            continue;
        }

        entries.push(SourceEntry::from_path(source_root, dir_entry.path())?);
    }

    // Walk order interleaves files and directories; sort for stable reports.
    entries.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

    Ok(entries)
}

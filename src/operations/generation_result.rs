use crate::utils::file_utils::display_relative;
use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RedirectAction {
    Created,
    Overwritten,
    SkippedExisting,
    SkippedRoot,
    Excluded,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct RedirectRecord {
    pub action: RedirectAction,
    pub source: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Matching exclusion rule, or the error for failed writes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GenerationSummary {
    pub created: usize,
    pub overwritten: usize,
    pub skipped: usize,
    pub failed: usize,
}

#[derive(Debug, Default)]
pub struct GenerationResult {
    pub dry_run: bool,
    pub records: Vec<RedirectRecord>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    dry_run: bool,
    summary: GenerationSummary,
    records: &'a [RedirectRecord],
}

impl GenerationResult {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            records: Vec::new(),
        }
    }

    pub fn add(&mut self, record: RedirectRecord) {
        self.records.push(record);
    }

    pub fn count(&self, action: RedirectAction) -> usize {
        self.records
            .iter()
            .filter(|record| record.action == action)
            .count()
    }

    pub fn summary(&self) -> GenerationSummary {
        GenerationSummary {
            created: self.count(RedirectAction::Created),
            overwritten: self.count(RedirectAction::Overwritten),
            skipped: self.count(RedirectAction::SkippedExisting)
                + self.count(RedirectAction::SkippedRoot)
                + self.count(RedirectAction::Excluded),
            failed: self.count(RedirectAction::Failed),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        let report = JsonReport {
            dry_run: self.dry_run,
            summary: self.summary(),
            records: &self.records,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }

    pub fn display(&self, site_dir: &Path) {
        for record in &self.records {
            println!("{}", self.format_record(record, site_dir));
        }

        let summary = self.summary();
        println!();
        println!("Summary:");
        println!("  created: {}", summary.created);
        println!("  overwritten: {}", summary.overwritten);
        println!("  skipped: {}", summary.skipped);
        if summary.failed > 0 {
            println!("  failed: {}", summary.failed);
        }
        if self.dry_run {
            println!("Note: dry-run mode; no files were written.");
        }
    }

    fn format_record(&self, record: &RedirectRecord, site_dir: &Path) -> String {
        let source = record.source.display();
        let destination = record
            .destination
            .as_deref()
            .map(|path| display_relative(path, site_dir).display().to_string())
            .unwrap_or_default();
        let target = record.target.as_deref().unwrap_or_default();
        let detail = record.detail.as_deref().unwrap_or_default();
        let skip = if self.dry_run { "Would skip" } else { "Skipping" };

        match record.action {
            RedirectAction::Created if self.dry_run => {
                format!("✅ Would generate redirect: {destination} -> {target}")
            }
            RedirectAction::Created => format!("✅ Generated redirect: {destination} -> {target}"),
            RedirectAction::Overwritten => format!("✏️  Overwritten: {destination} -> {target}"),
            RedirectAction::SkippedExisting => {
                format!("⚠️  {skip} (exists): {destination} -> {target}")
            }
            RedirectAction::SkippedRoot => {
                format!("⤴️  {skip} blog root: {source} (no site root redirect)")
            }
            RedirectAction::Excluded => format!("⤴️  Excluded by '{detail}': {source}"),
            RedirectAction::Failed => format!("❌ Failed: {destination} -> {target}: {detail}"),
        }
    }
}

use crate::constants::{REDIRECT_TEMPLATE, TARGET_PLACEHOLDER};
use crate::operations::generation_result::RedirectRecord;
use crate::operations::{
    plan_redirects, GenerationResult, PlannedRedirect, RedirectAction, RedirectSettings,
};
use crate::utils::file_utils::{ensure_trailing_newline, write_file};
use anyhow::Result;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Write only artifacts that do not exist yet.
    #[default]
    Normal,
    /// Report what would be written; touch nothing.
    DryRun,
    /// Write every artifact, replacing existing content.
    Overwrite,
}

impl fmt::Display for WriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WriteMode::Normal => "normal",
            WriteMode::DryRun => "dry-run",
            WriteMode::Overwrite => "overwrite",
        };
        f.write_str(name)
    }
}

pub fn render_redirect(target: &str) -> String {
    let escaped = escape_attribute(target);
    ensure_trailing_newline(REDIRECT_TEMPLATE.replace(TARGET_PLACEHOLDER, &escaped))
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Writes one redirect artifact per planned redirect according to `mode`.
///
/// Write failures are recorded and do not stop the batch.
pub fn generate_redirects(settings: &RedirectSettings, mode: WriteMode) -> Result<GenerationResult> {
    let plan = plan_redirects(settings)?;
    let mut result = GenerationResult::new(mode == WriteMode::DryRun);

    for planned in plan {
        let record = match planned {
            PlannedRedirect::SourceRoot(entry) => RedirectRecord {
                action: RedirectAction::SkippedRoot,
                source: entry.relative_path,
                destination: None,
                target: None,
                detail: None,
            },
            PlannedRedirect::Excluded { entry, rule } => RedirectRecord {
                action: RedirectAction::Excluded,
                source: entry.relative_path,
                destination: None,
                target: None,
                detail: Some(rule),
            },
            PlannedRedirect::Redirect {
                entry,
                destination,
                target,
            } => {
                let (action, detail) = apply_write_policy(&destination, &target, mode);
                RedirectRecord {
                    action,
                    source: entry.relative_path,
                    destination: Some(destination),
                    target: Some(target),
                    detail,
                }
            }
        };
        result.add(record);
    }

    Ok(result)
}

fn apply_write_policy(
    destination: &Path,
    target: &str,
    mode: WriteMode,
) -> (RedirectAction, Option<String>) {
    let exists = destination.exists();
    match mode {
        WriteMode::Normal | WriteMode::DryRun if exists => (RedirectAction::SkippedExisting, None),
        WriteMode::DryRun => (RedirectAction::Created, None),
        WriteMode::Normal | WriteMode::Overwrite => {
            let action = if exists {
                RedirectAction::Overwritten
            } else {
                RedirectAction::Created
            };
            match write_file(destination, &render_redirect(target)) {
                Ok(()) => (action, None),
                Err(e) => (RedirectAction::Failed, Some(format!("{e:#}"))),
            }
        }
    }
}

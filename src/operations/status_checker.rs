use crate::operations::{plan_redirects, render_redirect, PlannedRedirect, RedirectSettings};
use crate::utils::file_utils::display_relative;
use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RedirectState {
    InSync,
    Stale,
    Missing,
    /// Exists but could not be read; `detail` holds the error.
    Unreadable,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusEntry {
    pub state: RedirectState,
    pub destination: PathBuf,
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct StatusReport {
    pub entries: Vec<StatusEntry>,
}

impl StatusReport {
    pub fn is_in_sync(&self) -> bool {
        self.entries
            .iter()
            .all(|entry| entry.state == RedirectState::InSync)
    }

    pub fn count(&self, state: RedirectState) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.state == state)
            .count()
    }

    pub fn display(&self, site_dir: &Path) {
        for entry in &self.entries {
            let destination = display_relative(&entry.destination, site_dir);
            let marker = match entry.state {
                RedirectState::InSync => "✅ in sync",
                RedirectState::Stale => "✏️  stale",
                RedirectState::Missing => "❌ missing",
                RedirectState::Unreadable => "❌ unreadable",
            };
            match &entry.detail {
                Some(detail) => println!(
                    "{marker}: {} -> {} ({detail})",
                    destination.display(),
                    entry.target
                ),
                None => println!("{marker}: {} -> {}", destination.display(), entry.target),
            }
        }

        println!();
        println!(
            "in sync: {}, stale: {}, missing: {}, unreadable: {}",
            self.count(RedirectState::InSync),
            self.count(RedirectState::Stale),
            self.count(RedirectState::Missing),
            self.count(RedirectState::Unreadable)
        );
    }
}

/// Compares the site tree with what a generate run would write. Never writes.
pub fn check_redirect_status(settings: &RedirectSettings) -> Result<StatusReport> {
    let mut report = StatusReport::default();

    for planned in plan_redirects(settings)? {
        let PlannedRedirect::Redirect {
            destination,
            target,
            ..
        } = planned
        else {
            continue;
        };

        let (state, detail) = redirect_state(&destination, &target);
        report.entries.push(StatusEntry {
            state,
            destination,
            target,
            detail,
        });
    }

    Ok(report)
}

fn redirect_state(destination: &Path, target: &str) -> (RedirectState, Option<String>) {
    if !destination.exists() {
        return (RedirectState::Missing, None);
    }

    match fs::read(destination) {
        Ok(actual) if actual == render_redirect(target).as_bytes() => (RedirectState::InSync, None),
        Ok(_) => (RedirectState::Stale, None),
        Err(e) => (RedirectState::Unreadable, Some(e.to_string())),
    }
}

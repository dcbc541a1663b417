//! Differ Domain Service
//!
//! Renders the difference between two versions of an artifact file so that
//! a detected change can be explained in the logs.

use similar::{ChangeTag, TextDiff};

/// Result of a diff operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffSummary {
    /// Number of lines added
    pub additions: usize,
    /// Number of lines deleted
    pub deletions: usize,
}

impl DiffSummary {
    pub fn has_changes(&self) -> bool {
        self.additions > 0 || self.deletions > 0
    }

    /// Get a short summary (e.g., "+5, -3")
    pub fn summary(&self) -> String {
        format!("+{}, -{}", self.additions, self.deletions)
    }
}

/// Differ service for explaining file differences
#[derive(Debug, Clone, Copy, Default)]
pub struct Differ;

impl Differ {
    pub fn new() -> Self {
        Self
    }

    /// Count changed lines between two normalized line lists
    pub fn summarize(&self, old: &[String], new: &[String]) -> DiffSummary {
        let old: Vec<&str> = old.iter().map(String::as_str).collect();
        let new: Vec<&str> = new.iter().map(String::as_str).collect();
        let diff = TextDiff::from_slices(&old, &new);

        let mut summary = DiffSummary::default();
        for change in diff.iter_all_changes() {
            match change.tag() {
                ChangeTag::Delete => summary.deletions += 1,
                ChangeTag::Insert => summary.additions += 1,
                ChangeTag::Equal => {}
            }
        }
        summary
    }

    /// Unified diff of two normalized line lists
    pub fn unified(&self, old: &[String], new: &[String], old_label: &str, new_label: &str) -> String {
        let old = join_lines(old);
        let new = join_lines(new);
        TextDiff::from_lines(&old, &new)
            .unified_diff()
            .context_radius(2)
            .header(old_label, new_label)
            .to_string()
    }
}

fn join_lines(lines: &[String]) -> String {
    lines.iter().map(|l| format!("{}\n", l)).collect()
}

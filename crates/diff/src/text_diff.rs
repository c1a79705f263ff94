use anyhow::Result;

use crate::config::DiffConfig;
use crate::diff_change::{DiffChange, DiffStats};
use crate::diff_result::DiffResult;
use crate::inline_diff::InlineDiff;

/// Wrapper around text diff operations with the default configuration
pub struct TextDiff;

impl TextDiff {
    /// Create a word level diff between two texts
    pub fn diff(original: &str, modified: &str) -> DiffResult {
        DiffConfig::default().diff(original, modified)
    }

    /// Create a word level diff, refusing pairs above the default size limit
    pub fn try_diff(original: &str, modified: &str) -> Result<DiffResult> {
        DiffConfig::default().try_diff(original, modified)
    }

    /// Highlight two short strings character by character
    pub fn inline_diff(original: &str, modified: &str) -> InlineDiff {
        DiffConfig::default().inline_diff(original, modified)
    }

    /// Summarize a change list, e.g. "1 addition, 1 modification"
    pub fn summarize(changes: &[DiffChange]) -> String {
        DiffStats::from_changes(changes).to_string()
    }
}

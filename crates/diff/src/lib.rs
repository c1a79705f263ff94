// Word level text comparison with HTML markup
// This crate computes change lists, stats and marked-up HTML for two texts

mod config;
mod diff_change;
mod diff_result;
mod error;
mod inline_diff;
mod lcs;
mod markup;
mod segment;
mod text_diff;
mod tokenize;

pub use config::{DiffConfig, DEFAULT_MAX_TABLE_CELLS};
pub use diff_change::{ChangeKind, DiffChange, DiffStats};
pub use diff_result::DiffResult;
pub use error::DiffError;
pub use inline_diff::InlineDiff;
pub use lcs::{longest_common_subsequence, myers_common_subsequence, table_cells, DiffAlgorithm};
pub use markup::{escape_html, render_markup, MarkupClasses};
pub use text_diff::TextDiff;
pub use tokenize::{tokenize, Granularity};

/// Compare `original` with `modified` at word level
pub fn compute_diff(original: &str, modified: &str) -> DiffResult {
    TextDiff::diff(original, modified)
}

/// Character level markup of both strings
pub fn compute_inline_diff(original: &str, modified: &str) -> InlineDiff {
    TextDiff::inline_diff(original, modified)
}

/// Summarize a change list, e.g. "2 additions, 1 deletion"
pub fn summarize_changes(changes: &[DiffChange]) -> String {
    TextDiff::summarize(changes)
}

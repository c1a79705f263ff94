#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::diff_change::{ChangeKind, DiffChange, DiffStats};

/// The outcome of comparing an original text with a modified text
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DiffResult {
    /// The classified segments, in modified-text order
    pub changes: Vec<DiffChange>,

    /// Counts of each change kind
    pub stats: DiffStats,

    /// The modified text as HTML with a span around every change
    pub marked_up_text: String,
}

impl DiffResult {
    /// Assemble a result, deriving the stats from `changes`
    pub fn new(changes: Vec<DiffChange>, marked_up_text: String) -> Self {
        let stats = DiffStats::from_changes(&changes);
        Self {
            changes,
            stats,
            marked_up_text,
        }
    }

    /// Get the changes
    pub fn changes(&self) -> &[DiffChange] {
        &self.changes
    }

    /// Get the number of segments, unchanged ones included
    pub fn change_count(&self) -> usize {
        self.changes.len()
    }

    /// Get a segment by index
    pub fn change(&self, index: usize) -> Option<&DiffChange> {
        self.changes.get(index)
    }

    /// Iterate over the segments of one kind
    pub fn changes_of(&self, kind: ChangeKind) -> impl Iterator<Item = &DiffChange> + '_ {
        self.changes.iter().filter(move |c| c.kind == kind)
    }

    /// Check if the diff has any changes
    pub fn has_changes(&self) -> bool {
        self.stats.has_changes()
    }

    /// Human readable summary of the stats
    pub fn summary(&self) -> String {
        self.stats.summary()
    }
}

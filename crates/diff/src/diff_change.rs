use derive_more::Display;
use std::fmt;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents the kind of a diff change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ChangeKind {
    /// Text present in both versions
    #[display(fmt = "unchanged")]
    Unchanged,

    /// Text only present in the modified version
    #[display(fmt = "addition")]
    Addition,

    /// Text only present in the original version
    #[display(fmt = "deletion")]
    Deletion,

    /// Original text replaced by different modified text at the same spot
    #[display(fmt = "modification")]
    Modification,
}

/// One classified segment of a comparison
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DiffChange {
    /// The kind of this segment
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: ChangeKind,

    /// The segment as it appears in the modified text (empty for deletions)
    pub content: String,

    /// The replaced or removed original text, for deletions and modifications
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub original_content: Option<String>,

    /// Character offset into the modified text where the segment begins
    pub position: usize,

    /// Length of `content` in characters
    pub length: usize,
}

impl DiffChange {
    /// Create a segment present in both versions
    pub fn unchanged(content: impl Into<String>, position: usize) -> Self {
        Self::new(ChangeKind::Unchanged, content.into(), None, position)
    }

    /// Create a segment only present in the modified version
    pub fn addition(content: impl Into<String>, position: usize) -> Self {
        Self::new(ChangeKind::Addition, content.into(), None, position)
    }

    /// Create a segment removed from the original version.
    ///
    /// Deletions occupy no space in the modified text, so `length` is always 0.
    pub fn deletion(original: impl Into<String>, position: usize) -> Self {
        Self::new(
            ChangeKind::Deletion,
            String::new(),
            Some(original.into()),
            position,
        )
    }

    /// Create a segment where `original` was replaced by `content`
    pub fn modification(
        content: impl Into<String>,
        original: impl Into<String>,
        position: usize,
    ) -> Self {
        Self::new(
            ChangeKind::Modification,
            content.into(),
            Some(original.into()),
            position,
        )
    }

    fn new(
        kind: ChangeKind,
        content: String,
        original_content: Option<String>,
        position: usize,
    ) -> Self {
        let length = content.chars().count();
        Self {
            kind,
            content,
            original_content,
            position,
            length,
        }
    }

    /// Check if this segment is an actual change
    pub fn is_change(&self) -> bool {
        self.kind != ChangeKind::Unchanged
    }

    /// The character range this segment covers in the modified text
    pub fn range(&self) -> Range<usize> {
        self.position..(self.position + self.length)
    }

    /// Get the end of the segment in the modified text (exclusive)
    pub fn end(&self) -> usize {
        self.position + self.length
    }
}

/// Aggregate counts over a list of changes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DiffStats {
    pub additions: usize,
    pub deletions: usize,
    pub modifications: usize,
    pub total_changes: usize,
}

impl DiffStats {
    /// Count every non-unchanged segment by kind
    pub fn from_changes(changes: &[DiffChange]) -> Self {
        let mut stats = changes.iter().fold(Self::default(), |mut acc, change| {
            match change.kind {
                ChangeKind::Addition => acc.additions += 1,
                ChangeKind::Deletion => acc.deletions += 1,
                ChangeKind::Modification => acc.modifications += 1,
                ChangeKind::Unchanged => {}
            }
            acc
        });
        stats.total_changes = stats.additions + stats.deletions + stats.modifications;
        stats
    }

    /// Check if any change was counted
    pub fn has_changes(&self) -> bool {
        self.total_changes > 0
    }

    /// Short human readable phrase, e.g. "2 additions, 1 deletion"
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DiffStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.total_changes == 0 {
            return f.write_str("No changes detected");
        }

        let parts = [
            (self.additions, "addition"),
            (self.deletions, "deletion"),
            (self.modifications, "modification"),
        ];

        let mut first = true;
        for (count, noun) in parts {
            if count == 0 {
                continue;
            }
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            let plural = if count == 1 { "" } else { "s" };
            write!(f, "{} {}{}", count, noun, plural)?;
        }
        Ok(())
    }
}

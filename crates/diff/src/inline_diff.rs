#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::diff_change::ChangeKind;
use crate::markup::{MarkupClasses, MarkupWriter};

/// Character level highlighting of two short strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct InlineDiff {
    /// The original text with removed characters wrapped
    pub original_marked: String,

    /// The modified text with inserted characters wrapped
    pub modified_marked: String,
}

impl InlineDiff {
    /// Mark up `old` and `new` from their character tokens and common subsequence
    pub(crate) fn from_alignment(
        old: &[&str],
        new: &[&str],
        lcs: &[&str],
        classes: &MarkupClasses,
    ) -> Self {
        let mut original = MarkupWriter::new(classes);
        let mut modified = MarkupWriter::new(classes);

        let mut i = 0;
        let mut j = 0;
        let mut k = 0;

        while i < old.len() || j < new.len() {
            let anchor = lcs.get(k);
            let old_on_anchor = i < old.len() && anchor == Some(&old[i]);
            let new_on_anchor = j < new.len() && anchor == Some(&new[j]);

            if old_on_anchor && new_on_anchor {
                original.push(ChangeKind::Unchanged, old[i]);
                modified.push(ChangeKind::Unchanged, new[j]);
                i += 1;
                j += 1;
                k += 1;
                continue;
            }

            let mut advanced = false;
            if i < old.len() && !old_on_anchor {
                original.push(ChangeKind::Deletion, old[i]);
                i += 1;
                advanced = true;
            }
            if j < new.len() && !new_on_anchor {
                modified.push(ChangeKind::Addition, new[j]);
                j += 1;
                advanced = true;
            }
            if !advanced {
                // `lcs` does not fit the inputs; mark whatever is left
                k = lcs.len();
            }
        }

        Self {
            original_marked: original.finish(),
            modified_marked: modified.finish(),
        }
    }
}

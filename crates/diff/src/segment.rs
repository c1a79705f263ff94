//! Turns an LCS alignment into classified change segments.

use log::trace;

use crate::diff_change::DiffChange;

/// Walk `old` and `new` against their common subsequence `lcs`.
///
/// Runs where both streams sit on the current LCS element become one
/// unchanged segment. Everything between two such runs is collected from both
/// streams and becomes an addition, a deletion, or a single modification when
/// both sides contributed text.
pub(crate) fn segment(old: &[&str], new: &[&str], lcs: &[&str]) -> Vec<DiffChange> {
    let mut changes = Vec::new();
    let mut i = 0;
    let mut j = 0;
    let mut k = 0;
    // Character offset into the modified text
    let mut position = 0;

    while i < old.len() || j < new.len() {
        if on_anchor(old, new, lcs, i, j, k) {
            let mut content = String::new();
            while on_anchor(old, new, lcs, i, j, k) {
                content.push_str(new[j]);
                i += 1;
                j += 1;
                k += 1;
            }
            trace!("unchanged at {}: {:?}", position, content);
            let change = DiffChange::unchanged(content, position);
            position += change.length;
            changes.push(change);
            continue;
        }

        let anchor = lcs.get(k);

        let mut removed = String::new();
        while i < old.len() && anchor != Some(&old[i]) {
            removed.push_str(old[i]);
            i += 1;
        }

        let mut inserted = String::new();
        while j < new.len() && anchor != Some(&new[j]) {
            inserted.push_str(new[j]);
            j += 1;
        }

        let change = match (removed.is_empty(), inserted.is_empty()) {
            (false, false) => DiffChange::modification(inserted, removed, position),
            (true, false) => DiffChange::addition(inserted, position),
            (false, true) => DiffChange::deletion(removed, position),
            (true, true) => {
                // `lcs` is not a subsequence of both streams; treat the rest as unaligned
                k = lcs.len();
                continue;
            }
        };

        trace!("{} at {}: {:?}", change.kind, position, change);
        position += change.length;
        changes.push(change);
    }

    changes
}

fn on_anchor(old: &[&str], new: &[&str], lcs: &[&str], i: usize, j: usize, k: usize) -> bool {
    match (old.get(i), new.get(j), lcs.get(k)) {
        (Some(a), Some(b), Some(anchor)) => a == anchor && b == anchor,
        _ => false,
    }
}

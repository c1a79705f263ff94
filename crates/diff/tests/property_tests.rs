use markup_diff::{
    compute_diff, compute_inline_diff, longest_common_subsequence, myers_common_subsequence,
    render_markup, tokenize, ChangeKind, DiffAlgorithm, DiffChange, DiffConfig, DiffResult,
    Granularity, MarkupClasses,
};
use proptest::prelude::*;
use regex::Regex;

// Small alphabet so that generated pairs share plenty of tokens
const TEXT: &str = "[ab <>&'\".,\n]{0,24}";

// Multi-byte characters, where character and byte offsets differ
const WIDE_TEXT: &str = "[aé🎉 <&.,\n]{0,24}";

fn strip_tags(html: &str) -> String {
    let tags = Regex::new(r#"<span class="[^"]*"( title="[^"]*")?>|</span>"#).unwrap();
    tags.replace_all(html, "").into_owned()
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

fn rebuild_modified(result: &DiffResult) -> String {
    result
        .changes
        .iter()
        .filter(|c| c.kind != ChangeKind::Deletion)
        .map(|c| c.content.as_str())
        .collect()
}

fn slice_chars(text: &str, change: &DiffChange) -> String {
    text.chars()
        .skip(change.position)
        .take(change.length)
        .collect()
}

fn rebuild_original(result: &DiffResult) -> String {
    result
        .changes
        .iter()
        .map(|c| match c.kind {
            ChangeKind::Unchanged => c.content.as_str(),
            _ => c.original_content.as_deref().unwrap_or_default(),
        })
        .collect()
}

proptest! {
    #[test]
    fn tokens_partition_input(text in "\\PC{0,40}") {
        for granularity in [Granularity::Word, Granularity::Character] {
            let tokens = tokenize(&text, granularity);
            prop_assert!(tokens.iter().all(|t| !t.is_empty()));
            prop_assert_eq!(tokens.concat(), text.clone());
        }
    }

    #[test]
    fn identical_texts_have_no_changes(text in TEXT) {
        let result = compute_diff(&text, &text);
        prop_assert_eq!(result.stats.total_changes, 0);
        prop_assert_eq!(result.changes.len(), 1);
        prop_assert_eq!(result.changes[0].kind, ChangeKind::Unchanged);
        prop_assert_eq!(&result.changes[0].content, &text);
    }

    #[test]
    fn changes_rebuild_both_texts(old in TEXT, new in TEXT) {
        let result = compute_diff(&old, &new);
        prop_assert_eq!(rebuild_modified(&result), new);
        prop_assert_eq!(rebuild_original(&result), old);
    }

    #[test]
    fn positions_are_contiguous(old in TEXT, new in TEXT) {
        let result = compute_diff(&old, &new);
        let mut offset = 0;
        for change in &result.changes {
            prop_assert_eq!(change.position, offset);
            prop_assert_eq!(change.length, change.content.chars().count());
            offset += change.length;
        }
        prop_assert_eq!(offset, new.chars().count());
    }

    #[test]
    fn positions_count_characters(old in WIDE_TEXT, new in WIDE_TEXT) {
        let result = compute_diff(&old, &new);
        let mut offset = 0;
        for change in &result.changes {
            prop_assert_eq!(change.position, offset);
            prop_assert_eq!(change.length, change.content.chars().count());
            prop_assert_eq!(slice_chars(&new, change), change.content.clone());
            offset += change.length;
        }
        prop_assert_eq!(offset, new.chars().count());
        prop_assert_eq!(rebuild_modified(&result), new);
        prop_assert_eq!(rebuild_original(&result), old);
    }

    #[test]
    fn markup_fills_gaps_from_modified_text(old in WIDE_TEXT, new in WIDE_TEXT) {
        // Rendering only the changes must take the unchanged text from `new`
        let result = compute_diff(&old, &new);
        let changed: Vec<DiffChange> = result
            .changes
            .iter()
            .filter(|c| c.is_change())
            .cloned()
            .collect();

        let html = render_markup(&new, &changed, &MarkupClasses::default());
        prop_assert_eq!(html, result.marked_up_text);
    }

    #[test]
    fn deletions_carry_removed_text(old in TEXT, new in TEXT) {
        let result = compute_diff(&old, &new);
        for change in result.changes_of(ChangeKind::Deletion) {
            prop_assert!(change.content.is_empty());
            let removed = change.original_content.as_deref().unwrap_or_default();
            prop_assert!(!removed.is_empty());
            prop_assert!(old.contains(removed));
        }
    }

    #[test]
    fn replacements_are_never_split(old in TEXT, new in TEXT) {
        // A deletion is never directly followed by an addition or vice versa
        let result = compute_diff(&old, &new);
        for pair in result.changes.windows(2) {
            prop_assert!(pair[0].kind == ChangeKind::Unchanged || pair[1].kind == ChangeKind::Unchanged);
        }
    }

    #[test]
    fn stats_count_change_kinds(old in TEXT, new in TEXT) {
        let result = compute_diff(&old, &new);
        let count = |kind: ChangeKind| result.changes_of(kind).count();
        prop_assert_eq!(result.stats.additions, count(ChangeKind::Addition));
        prop_assert_eq!(result.stats.deletions, count(ChangeKind::Deletion));
        prop_assert_eq!(result.stats.modifications, count(ChangeKind::Modification));
        prop_assert_eq!(
            result.stats.total_changes,
            result.stats.additions + result.stats.deletions + result.stats.modifications
        );
    }

    #[test]
    fn markup_has_no_raw_input_characters(old in TEXT, new in TEXT) {
        let result = compute_diff(&old, &new);
        let text = strip_tags(&result.marked_up_text);

        prop_assert!(!text.contains(&['<', '>', '"', '\''][..]));
        let entity = Regex::new("^&(amp|lt|gt|quot|#39);").unwrap();
        for (index, _) in text.match_indices('&') {
            prop_assert!(entity.is_match(&text[index..]));
        }
    }

    #[test]
    fn inline_markup_strips_back_to_inputs(old in TEXT, new in TEXT) {
        let diff = compute_inline_diff(&old, &new);
        prop_assert_eq!(unescape(&strip_tags(&diff.original_marked)), old);
        prop_assert_eq!(unescape(&strip_tags(&diff.modified_marked)), new);
    }

    #[test]
    fn lcs_length_matches_myers(old in "[abc]{0,16}", new in "[abc]{0,16}") {
        let old: Vec<char> = old.chars().collect();
        let new: Vec<char> = new.chars().collect();
        prop_assert_eq!(
            longest_common_subsequence(&old, &new).len(),
            myers_common_subsequence(&old, &new, None).len()
        );
    }

    #[test]
    fn myers_segmentation_rebuilds_modified(old in TEXT, new in TEXT) {
        let config = DiffConfig::default().algorithm(DiffAlgorithm::Myers).timeout(None);
        let result = config.diff(&old, &new);
        prop_assert_eq!(rebuild_modified(&result), new);
        prop_assert_eq!(rebuild_original(&result), old);
    }
}

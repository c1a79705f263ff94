use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::diff_change::{ChangeKind, DiffChange};

/// CSS class names put on the markup spans
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MarkupClasses {
    pub addition: String,
    pub deletion: String,
    pub modification: String,
}

impl Default for MarkupClasses {
    fn default() -> Self {
        Self {
            addition: "diff-addition".to_string(),
            deletion: "diff-deletion".to_string(),
            modification: "diff-modification".to_string(),
        }
    }
}

impl MarkupClasses {
    fn for_kind(&self, kind: ChangeKind) -> Option<&str> {
        match kind {
            ChangeKind::Addition => Some(self.addition.as_str()),
            ChangeKind::Deletion => Some(self.deletion.as_str()),
            ChangeKind::Modification => Some(self.modification.as_str()),
            ChangeKind::Unchanged => None,
        }
    }
}

/// Escape the five HTML-unsafe characters.
///
/// `&` is handled like any other character in a single pass, so entities
/// produced here are never escaped twice. Returns the input unchanged when
/// there is nothing to escape.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(&['&', '<', '>', '"', '\''][..]) else {
        return Cow::Borrowed(text);
    };

    let mut escaped = String::with_capacity(text.len() + 16);
    escaped.push_str(&text[..first]);
    for c in text[first..].chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Render `modified` as HTML with every change wrapped in a span.
///
/// `changes` must carry character positions into `modified`. Text not covered
/// by any change is emitted escaped and unwrapped.
pub fn render_markup(modified: &str, changes: &[DiffChange], classes: &MarkupClasses) -> String {
    // Byte offset of every character boundary, including the end of the text
    let boundaries: Vec<usize> = modified
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(modified.len()))
        .collect();
    let byte_at = |position: usize| boundaries.get(position).copied().unwrap_or(modified.len());

    let mut ordered: Vec<&DiffChange> = changes.iter().collect();
    // Stable, so a deletion keeps its place before the segment sharing its position
    ordered.sort_by_key(|change| change.position);

    let mut html = String::with_capacity(modified.len() * 2);
    let mut last_end = 0;

    for change in ordered {
        if change.position > last_end {
            if let Some(gap) = modified.get(byte_at(last_end)..byte_at(change.position)) {
                html.push_str(&escape_html(gap));
            }
        }

        match change.kind {
            ChangeKind::Unchanged => html.push_str(&escape_html(&change.content)),
            ChangeKind::Addition => {
                push_span(&mut html, &classes.addition, None, &change.content);
            }
            ChangeKind::Deletion => {
                let removed = change.original_content.as_deref().unwrap_or_default();
                push_span(&mut html, &classes.deletion, None, removed);
            }
            ChangeKind::Modification => {
                let title = change
                    .original_content
                    .as_deref()
                    .map(|original| format!("Original: {}", original));
                push_span(
                    &mut html,
                    &classes.modification,
                    title.as_deref(),
                    &change.content,
                );
            }
        }

        last_end = last_end.max(change.end());
    }

    if let Some(rest) = modified.get(byte_at(last_end)..) {
        html.push_str(&escape_html(rest));
    }

    html
}

fn push_span(html: &mut String, class: &str, title: Option<&str>, text: &str) {
    html.push_str("<span class=\"");
    html.push_str(&escape_html(class));
    html.push('"');
    if let Some(title) = title {
        html.push_str(" title=\"");
        html.push_str(&escape_html(title));
        html.push('"');
    }
    html.push('>');
    html.push_str(&escape_html(text));
    html.push_str("</span>");
}

/// Builds one side of an inline diff, merging consecutive characters of the
/// same kind into a single span.
pub(crate) struct MarkupWriter<'a> {
    classes: &'a MarkupClasses,
    html: String,
    run: String,
    run_kind: ChangeKind,
}

impl<'a> MarkupWriter<'a> {
    pub(crate) fn new(classes: &'a MarkupClasses) -> Self {
        Self {
            classes,
            html: String::new(),
            run: String::new(),
            run_kind: ChangeKind::Unchanged,
        }
    }

    pub(crate) fn push(&mut self, kind: ChangeKind, text: &str) {
        if kind != self.run_kind {
            self.flush();
            self.run_kind = kind;
        }
        self.run.push_str(text);
    }

    fn flush(&mut self) {
        if self.run.is_empty() {
            return;
        }
        let classes = self.classes;
        match classes.for_kind(self.run_kind) {
            Some(class) => push_span(&mut self.html, class, None, &self.run),
            None => self.html.push_str(&escape_html(&self.run)),
        }
        self.run.clear();
    }

    pub(crate) fn finish(mut self) -> String {
        self.flush();
        self.html
    }
}

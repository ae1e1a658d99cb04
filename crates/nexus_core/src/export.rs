//! Export surfaces consumed by the UI.
//!
//! # Responsibility
//! - Render a user's journal as one Markdown document.
//! - Render the persisted whole-store document as pretty JSON.
//!
//! Both renderers are pure; the caller selects and owns the data.

use crate::model::snapshot::StoreSnapshot;
use crate::model::wellbeing::JournalEntry;

/// Renders journal entries as Markdown, one dated section per entry in
/// creation order, each closed by a horizontal rule.
///
/// Section shape:
///
/// ```text
/// # 2026-03-10 08:15
///
/// <entry body>
///
/// Tags: a, b
///
/// ---
/// ```
pub fn journal_markdown(entries: &[&JournalEntry]) -> String {
    let mut ordered: Vec<&JournalEntry> = entries.to_vec();
    ordered.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

    let sections: Vec<String> = ordered
        .iter()
        .map(|entry| {
            format!(
                "# {}\n\n{}\n\nTags: {}\n\n---\n",
                entry.created_at.format("%Y-%m-%d %H:%M"),
                entry.content,
                entry.tags.join(", ")
            )
        })
        .collect();

    sections.join("\n")
}

/// Renders the whole-store document as pretty-printed JSON, identical in
/// shape to the persisted slot layout.
pub fn snapshot_json(snapshot: &StoreSnapshot) -> serde_json::Result<String> {
    serde_json::to_string_pretty(snapshot)
}

use datadex_core::{EntityRecord, slugify};

use crate::compose;

const EMPTY_INDEX: &str =
    "_No entities generated. Check that your workbook has an entity/table/view column._";

/// One line in the generated index document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub name: String,
    pub file: String,
}

/// Deduplicate records into index entries sorted case-insensitively by name.
///
/// Lowercase ties fall back to the raw name and file so the order stays
/// deterministic across runs.
pub fn build_index(records: &[EntityRecord]) -> Vec<IndexEntry> {
    let mut entries: Vec<IndexEntry> = records
        .iter()
        .map(|record| IndexEntry {
            name: record.name.clone(),
            file: format!("{}.md", slugify(&record.name)),
        })
        .collect();

    entries.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.file.cmp(&b.file))
    });
    entries.dedup();
    entries
}

/// Render the index document.
///
/// Always yields a document: with zero entries the index carries an explicit
/// empty-state message instead of a bare list, so a misconfigured column
/// mapping never produces silent, unexplained output.
pub fn render_index(entries: &[IndexEntry]) -> String {
    let mut lines: Vec<String> = vec![
        "# Entities".to_string(),
        String::new(),
        "These pages are generated from a data dictionary workbook.".to_string(),
        String::new(),
        "## Public-safe rule".to_string(),
        "- The source workbook is **not committed** to this public repo.".to_string(),
        "- Only the generated markdown pages are committed.".to_string(),
        String::new(),
        "## Index".to_string(),
        String::new(),
    ];

    if entries.is_empty() {
        lines.push(EMPTY_INDEX.to_string());
    } else {
        for entry in entries {
            lines.push(format!("- [{}]({})", entry.name, entry.file));
        }
    }

    compose(&lines)
}

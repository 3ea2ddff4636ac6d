use datadex_core::{EntityRecord, FieldTable};

use crate::compose;

const NO_DESCRIPTION: &str = "_No description found in this sheet._";
const NO_FIELDS: &str = "_No field metadata found in this sheet._";

/// Options that control page rendering.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Accepted for interface compatibility with callers that opt into
    /// dataset values elsewhere. The page renderer never emits literal
    /// dataset or schema values, whatever this is set to: suppressing real
    /// data is a privacy invariant, not a default.
    pub include_dataset_values: bool,
}

/// Render one entity page as markdown.
///
/// Structure is fixed: title, generated notice, metadata block (omitted when
/// empty), description, field table, and static usage guidance. Output is
/// byte-identical across runs for the same record.
pub fn render_entity_page(record: &EntityRecord, _options: &RenderOptions) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("# {}", record.name));
    lines.push(String::new());
    lines.push(
        "> Auto-generated from a data dictionary workbook. Output is public-safe by default."
            .to_string(),
    );
    lines.push(String::new());

    let metadata: Vec<String> = [
        ("Domain", &record.domain),
        ("Wrapper", &record.wrapper),
        ("Pipeline", &record.pipeline),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(key, value)| format!("**{key}:** {value}"))
    .collect();
    if !metadata.is_empty() {
        lines.extend(metadata);
        lines.push(String::new());
    }

    lines.push("## What it is".to_string());
    lines.push(String::new());
    if record.description.is_empty() {
        lines.push(NO_DESCRIPTION.to_string());
    } else {
        lines.push(record.description.clone());
    }
    lines.push(String::new());

    lines.push("## Fields".to_string());
    lines.push(String::new());
    if record.fields.is_empty() {
        lines.push(NO_FIELDS.to_string());
    } else {
        lines.extend(field_table_lines(&record.fields));
    }
    lines.push(String::new());

    lines.push("## How to use it".to_string());
    lines.push(String::new());
    lines.push("- Confirm the **grain** (what one row represents) before joining.".to_string());
    lines.push("- Join using **IDs/keys**, not labels.".to_string());
    lines.push("- Apply **partition/date filters** early (warehouse cost control).".to_string());
    lines.push("- Validate with a small reference sample before publishing dashboards.".to_string());
    lines.push(String::new());

    lines.push("## Gotchas".to_string());
    lines.push(String::new());
    lines.push(
        "- If this entity participates in many-to-many joins, document the safe join path here."
            .to_string(),
    );
    lines.push(
        "- If attributes are “current only,” document how to handle historical reporting here."
            .to_string(),
    );

    compose(&lines)
}

fn field_table_lines(fields: &FieldTable) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("| {} |", fields.columns.join(" | ")));
    lines.push(format!(
        "| {} |",
        vec!["---"; fields.columns.len()].join(" | ")
    ));
    for row in &fields.rows {
        lines.push(format!("| {} |", row.join(" | ")));
    }
    lines
}

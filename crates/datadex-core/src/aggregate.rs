use std::collections::{HashMap, HashSet};

use crate::pii::PiiPolicy;
use crate::roles::RoleMap;
use crate::workbook::Sheet;

/// Display order for per-entity field tables.
const FIELD_DISPLAY_ORDER: [&str; 5] = ["Field", "Type", "Nullable", "PK", "Description"];

/// Caps applied while building per-entity field tables.
#[derive(Debug, Clone)]
pub struct AggregateOptions {
    /// Upper bound on field rows kept per entity. A safety cap against
    /// pathologically wide dictionaries, not a sampling step.
    pub field_row_cap: usize,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self { field_row_cap: 500 }
    }
}

/// One documented entity with merged sheet metadata.
///
/// Scalar attributes hold the first non-empty value observed among the
/// entity's rows in original row order, or stay empty when the backing role
/// did not resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRecord {
    pub name: String,
    pub description: String,
    pub domain: String,
    pub wrapper: String,
    pub pipeline: String,
    pub fields: FieldTable,
}

/// Per-entity field metadata: ordered display columns and string rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl FieldTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Group a sheet's rows into entity records.
///
/// Rows whose entity cell is empty after trimming are skipped. Grouping is
/// by the raw trimmed entity string; case or whitespace variants stay
/// distinct, so callers wanting case folding must normalize upstream.
pub fn aggregate_sheet(
    sheet: &Sheet,
    roles: &RoleMap,
    pii: &PiiPolicy,
    options: &AggregateOptions,
) -> Vec<EntityRecord> {
    let Some(entity_index) = sheet.column_index(&roles.entity) else {
        return Vec::new();
    };

    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<usize>> = HashMap::new();
    for row in 0..sheet.rows.len() {
        let name = sheet.cell(row, entity_index);
        if name.is_empty() {
            continue;
        }
        if !groups.contains_key(name) {
            order.push(name.to_string());
        }
        groups.entry(name.to_string()).or_default().push(row);
    }

    order
        .into_iter()
        .map(|name| {
            let rows = &groups[&name];
            EntityRecord {
                description: scalar_attribute(sheet, rows, roles.description.as_deref(), pii),
                domain: scalar_attribute(sheet, rows, roles.domain.as_deref(), pii),
                wrapper: scalar_attribute(sheet, rows, roles.wrapper.as_deref(), pii),
                pipeline: scalar_attribute(sheet, rows, roles.pipeline.as_deref(), pii),
                fields: build_field_table(sheet, rows, roles, pii, options.field_row_cap),
                name,
            }
        })
        .collect()
}

/// First non-empty value of a resolved column across the entity's rows, in
/// original row order. Columns flagged by the PII policy contribute nothing:
/// their cell content must never reach rendered output.
fn scalar_attribute(
    sheet: &Sheet,
    rows: &[usize],
    column: Option<&str>,
    pii: &PiiPolicy,
) -> String {
    let Some(column) = column else {
        return String::new();
    };
    if pii.is_sensitive(column) {
        return String::new();
    }
    let Some(index) = sheet.column_index(column) else {
        return String::new();
    };

    rows.iter()
        .map(|&row| sheet.cell(row, index))
        .find(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_default()
}

fn build_field_table(
    sheet: &Sheet,
    rows: &[usize],
    roles: &RoleMap,
    pii: &PiiPolicy,
    row_cap: usize,
) -> FieldTable {
    let sources = [
        roles.field_name.as_deref(),
        roles.field_type.as_deref(),
        roles.field_nullable.as_deref(),
        roles.field_primary_key.as_deref(),
        roles.field_description.as_deref(),
    ];

    // Display columns backed by a resolved role, in fixed display order.
    let mut columns: Vec<(&'static str, &str, usize)> = Vec::new();
    for (display, source) in FIELD_DISPLAY_ORDER.into_iter().zip(sources) {
        if let Some(source) = source {
            if let Some(index) = sheet.column_index(source) {
                columns.push((display, source, index));
            }
        }
    }
    if columns.is_empty() {
        return FieldTable::default();
    }

    let mut table: Vec<Vec<String>> = rows
        .iter()
        .map(|&row| {
            columns
                .iter()
                .map(|&(_, _, index)| sheet.cell(row, index).to_string())
                .collect()
        })
        .collect();

    // Drop display columns with no informational content, then columns whose
    // display or source name matches the PII policy.
    let kept: Vec<usize> = (0..columns.len())
        .filter(|&col| table.iter().any(|row| !row[col].is_empty()))
        .filter(|&col| {
            let (display, source, _) = columns[col];
            !pii.is_sensitive(display) && !pii.is_sensitive(source)
        })
        .collect();
    if kept.is_empty() {
        return FieldTable::default();
    }

    table = table
        .into_iter()
        .map(|row| kept.iter().map(|&col| row[col].clone()).collect())
        .collect();
    let column_names: Vec<String> = kept
        .iter()
        .map(|&col| columns[col].0.to_string())
        .collect();

    // Rows without a field name carry no metadata worth rendering.
    if let Some(field_col) = column_names.iter().position(|name| name == "Field") {
        table.retain(|row| !row[field_col].is_empty());
    }

    let mut seen: HashSet<Vec<String>> = HashSet::new();
    table.retain(|row| seen.insert(row.clone()));
    table.truncate(row_cap);

    FieldTable {
        columns: column_names,
        rows: table,
    }
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Snapshot of a data dictionary workbook: named sheets in source order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

/// One sheet: an ordered column list and ordered rows with nullable cells.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Sheet {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl Sheet {
    /// Position of a column by its exact display name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Trimmed cell content; missing and null cells read as the empty string.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .and_then(|cell| cell.as_deref())
            .map(str::trim)
            .unwrap_or("")
    }
}

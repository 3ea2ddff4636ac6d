use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::workbook::Workbook;

/// Validate internal consistency of a workbook.
///
/// This checks:
/// - duplicate sheet names
/// - duplicate column names within a sheet
/// - rows whose cell count differs from the sheet's column count
pub fn validate_workbook(workbook: &Workbook) -> Result<()> {
    let mut sheets = BTreeSet::new();

    for sheet in &workbook.sheets {
        if !sheets.insert(sheet.name.as_str()) {
            return Err(Error::InvalidWorkbook(format!(
                "duplicate sheet name: {}",
                sheet.name
            )));
        }

        let mut columns = BTreeSet::new();
        for column in &sheet.columns {
            if !columns.insert(column.as_str()) {
                return Err(Error::InvalidWorkbook(format!(
                    "duplicate column name: {}.{}",
                    sheet.name, column
                )));
            }
        }

        for (index, row) in sheet.rows.iter().enumerate() {
            if row.len() != sheet.columns.len() {
                return Err(Error::InvalidWorkbook(format!(
                    "row {} in sheet {} has {} cells, expected {}",
                    index,
                    sheet.name,
                    row.len(),
                    sheet.columns.len()
                )));
            }
        }
    }

    Ok(())
}

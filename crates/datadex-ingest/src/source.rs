use std::fs;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use datadex_core::{Sheet, Workbook};

use crate::error::{IngestError, IngestResult};

/// Load a workbook from disk.
///
/// - a `.csv` file becomes a one-sheet workbook named by the file stem
/// - a directory contributes every `.csv` inside as one sheet each,
///   sorted by file name so sheet order is deterministic
/// - a `.json` file is parsed as a serialized [`Workbook`]
pub fn load_workbook(path: &Path) -> IngestResult<Workbook> {
    if path.is_dir() {
        return load_csv_dir(path);
    }

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("csv") => Ok(Workbook {
            sheets: vec![load_csv_sheet(path)?],
        }),
        Some("json") => load_json(path),
        _ => Err(IngestError::UnsupportedFormat(path.display().to_string())),
    }
}

fn load_json(path: &Path) -> IngestResult<Workbook> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn load_csv_dir(path: &Path) -> IngestResult<Workbook> {
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry_path = entry?.path();
        if entry_path.extension().and_then(|ext| ext.to_str()) == Some("csv") {
            files.push(entry_path);
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(IngestError::EmptyDirectory(path.display().to_string()));
    }

    let mut sheets = Vec::new();
    for file in &files {
        sheets.push(load_csv_sheet(file)?);
    }
    Ok(Workbook { sheets })
}

fn load_csv_sheet(path: &Path) -> IngestResult<Sheet> {
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sheet".to_string());

    let mut reader = ReaderBuilder::new().flexible(true).from_path(path)?;
    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row: Vec<Option<String>> = record
            .iter()
            .map(|cell| {
                if cell.is_empty() {
                    None
                } else {
                    Some(cell.to_string())
                }
            })
            .collect();
        // Short records are padded so sheet validation sees uniform widths;
        // stray trailing cells are dropped.
        row.resize(columns.len(), None);
        rows.push(row);
    }

    Ok(Sheet {
        name,
        columns,
        rows,
    })
}

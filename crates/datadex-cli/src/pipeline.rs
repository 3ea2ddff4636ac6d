use std::path::PathBuf;

use thiserror::Error;

use datadex_core::{
    AggregateOptions, PiiPolicy, RoleCandidates, Workbook, aggregate_sheet, resolve_roles,
    slugify, validate_workbook,
};
use datadex_render::{RenderOptions, build_index, render_entity_page, render_index};

use crate::output::write_text_atomic;

/// Options for one documentation run.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub out_dir: PathBuf,
    pub include_dataset_values: bool,
    pub candidates: RoleCandidates,
    pub pii: PiiPolicy,
    pub aggregate: AggregateOptions,
}

/// Counters reported after a run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub sheets_processed: usize,
    pub sheets_skipped: usize,
    pub entities_generated: usize,
}

/// Errors that abort a documentation run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("core error: {0}")]
    Core(#[from] datadex_core::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Run the whole pipeline: validate, resolve, aggregate, render, write.
///
/// Sheets without an entity-like column are skipped with an informational
/// event; the index document is always written, even when zero entities
/// were generated. I/O failures abort the run: half-written documentation
/// is worse than none.
pub fn run_pipeline(
    workbook: &Workbook,
    options: &PipelineOptions,
) -> Result<RunSummary, PipelineError> {
    validate_workbook(workbook)?;

    let render_options = RenderOptions {
        include_dataset_values: options.include_dataset_values,
    };
    let mut summary = RunSummary::default();
    let mut records = Vec::new();

    for sheet in &workbook.sheets {
        if sheet.rows.is_empty() {
            tracing::info!(event = "sheet_skipped", sheet = %sheet.name, reason = "empty");
            summary.sheets_skipped += 1;
            continue;
        }

        let Some(roles) = resolve_roles(&sheet.columns, &options.candidates) else {
            tracing::info!(
                event = "sheet_skipped",
                sheet = %sheet.name,
                reason = "no entity column"
            );
            summary.sheets_skipped += 1;
            continue;
        };

        let sheet_records = aggregate_sheet(sheet, &roles, &options.pii, &options.aggregate);
        for record in &sheet_records {
            let file = format!("{}.md", slugify(&record.name));
            let path = options.out_dir.join(&file);
            write_text_atomic(&path, &render_entity_page(record, &render_options))?;
            tracing::info!(event = "page_written", entity = %record.name, path = %path.display());
        }

        summary.sheets_processed += 1;
        records.extend(sheet_records);
    }

    let entries = build_index(&records);
    summary.entities_generated = entries.len();

    let index_path = options.out_dir.join("index.md");
    write_text_atomic(&index_path, &render_index(&entries))?;
    tracing::info!(
        event = "index_written",
        entities = entries.len(),
        path = %index_path.display()
    );

    Ok(summary)
}

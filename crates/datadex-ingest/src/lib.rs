//! Workbook ingestion adapters.
//!
//! Loads the abstract workbook model from CSV files, directories of CSV
//! sheets, or JSON workbook documents. The rest of the pipeline only ever
//! sees [`Workbook`] values.

pub mod error;
pub mod source;

pub use error::{IngestError, IngestResult};
pub use source::load_workbook;

pub use datadex_core::Workbook;

//! Pipeline orchestration for the datadex CLI.
//!
//! The binary in `main.rs` only parses arguments and delegates here, so
//! integration tests can drive full documentation runs in-process.

pub mod candidates;
pub mod output;
pub mod pipeline;

pub use candidates::load_candidates;
pub use pipeline::{PipelineError, PipelineOptions, RunSummary, run_pipeline};

//! Markdown rendering for entity pages and the index document.
//!
//! All renderers are pure string transforms; writing the documents to disk
//! is the caller's job.

pub mod index;
pub mod page;

pub use index::{IndexEntry, build_index, render_index};
pub use page::{RenderOptions, render_entity_page};

/// Join rendered lines into a document with exactly one trailing newline.
pub(crate) fn compose(lines: &[String]) -> String {
    format!("{}\n", lines.join("\n").trim_end())
}

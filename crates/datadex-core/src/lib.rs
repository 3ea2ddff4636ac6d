//! Core contracts and helpers for Datadex.
//!
//! This crate defines the workbook model, the column-role resolution
//! heuristics, the PII column policy, and the entity aggregation shared by
//! the ingest, render, and CLI crates.

pub mod aggregate;
pub mod error;
pub mod pii;
pub mod roles;
pub mod slug;
pub mod validation;
pub mod workbook;

pub use aggregate::{AggregateOptions, EntityRecord, FieldTable, aggregate_sheet};
pub use error::{Error, Result};
pub use pii::PiiPolicy;
pub use roles::{RoleCandidates, RoleMap, resolve_column, resolve_roles};
pub use slug::slugify;
pub use validation::validate_workbook;
pub use workbook::{Sheet, Workbook};

//! Row classification and import orchestration
//!
//! The top of the pipeline. For each data row the classifier maps headers to
//! canonical fields, normalizes values, resolves stage/class references (or
//! applies the batch context override), runs the mandatory-field checks and
//! defaulting, and emits the row into the accepted or rejected bucket.
//!
//! # Row state machine
//!
//! `Raw → HeaderMapped → ValueNormalized → ReferenceResolved →
//! {Accepted | Rejected}`, with `Empty` a terminal state reachable directly
//! from `Raw` for structurally blank rows, which land in neither bucket.
//!
//! # Example
//!
//! ```
//! use enrollment_importer::app::models::ReferenceCatalog;
//! use enrollment_importer::config::ImportConfig;
//! use enrollment_importer::StudentImporter;
//!
//! let importer = StudentImporter::new(ReferenceCatalog::default(), ImportConfig::default());
//! let result = importer.import_matrix(&[]);
//! assert!(result.success.is_empty());
//! ```

pub mod classifier;
pub mod defaults;

#[cfg(test)]
pub mod tests;

pub use classifier::StudentImporter;

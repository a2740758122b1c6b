//! Enrollment Importer Library
//!
//! A Rust library for converting bulk student-enrollment spreadsheets from
//! arbitrary school registries into a canonical, validated record set ready
//! for bulk insertion into a backing store.
//!
//! This library provides tools for:
//! - Locating the true header row inside noisy exports (titles, logo
//!   captions, blank spacer rows)
//! - Mapping arbitrary header text (Arabic or English, abbreviated or
//!   punctuated) to a closed set of canonical fields
//! - Repairing identifiers corrupted by spreadsheet scientific-notation
//!   re-encoding and normalizing Egyptian phone numbers
//! - Resolving free-text stage/class names against a reference catalog with
//!   tiered fuzzy matching
//! - Partitioning rows into accepted records and line-numbered rejections
//!   with human-readable reasons

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod header_locator;
        pub mod header_mapper;
        pub mod reference_resolver;
        pub mod row_classifier;
        pub mod value_normalizer;
    }
    pub mod adapters {
        pub mod spreadsheet;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{
    CanonicalField, CellValue, Class, ImportContext, ImportResult, ProcessedStudent, RawRow,
    ReferenceCatalog, Stage,
};
pub use app::services::row_classifier::StudentImporter;
pub use config::ImportConfig;

/// Result type alias for enrollment import operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for enrollment import operations
///
/// These cover the batch-level failure modes: reading input, loading the
/// reference catalog, and configuration problems. Per-row rejections are not
/// errors at this level; they travel inside the import result as
/// line-numbered diagnostics.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV reading error
    #[error("CSV reading error in file '{file}': {message}")]
    CsvReading {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// JSON parsing error (catalog, context, or alias overlay files)
    #[error("JSON parsing error in file '{file}': {message}")]
    JsonParsing {
        file: String,
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Reference catalog error
    #[error("Reference catalog error: {message}")]
    Catalog { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV reading error with context
    pub fn csv_reading(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvReading {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a JSON parsing error with context
    pub fn json_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<serde_json::Error>,
    ) -> Self {
        Self::JsonParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a reference catalog error
    pub fn catalog(message: impl Into<String>) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvReading {
            file: "unknown".to_string(),
            message: "CSV reading failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::JsonParsing {
            file: "unknown".to_string(),
            message: "JSON parsing failed".to_string(),
            source: Some(error),
        }
    }
}

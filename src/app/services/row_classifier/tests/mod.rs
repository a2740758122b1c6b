//! Tests for row classification and orchestration

pub mod defaults_tests;

use crate::app::models::{
    CellValue, Class, ImportContext, RawRow, ReferenceCatalog, Stage,
};
use crate::app::services::row_classifier::StudentImporter;
use crate::config::ImportConfig;

/// Catalog fixture mirroring a small real school
pub fn test_catalog() -> ReferenceCatalog {
    ReferenceCatalog {
        stages: vec![
            Stage {
                id: "st-1".to_string(),
                name: "الصف الأول الابتدائي".to_string(),
            },
            Stage {
                id: "st-2".to_string(),
                name: "الصف الثاني الابتدائي".to_string(),
            },
        ],
        classes: vec![
            Class {
                id: "cl-1a".to_string(),
                name: "أ".to_string(),
                stage_id: "st-1".to_string(),
            },
            Class {
                id: "cl-1b".to_string(),
                name: "ب".to_string(),
                stage_id: "st-1".to_string(),
            },
            Class {
                id: "cl-2a".to_string(),
                name: "أ".to_string(),
                stage_id: "st-2".to_string(),
            },
        ],
    }
}

/// Importer without a batch context
pub fn test_importer() -> StudentImporter {
    StudentImporter::new(test_catalog(), ImportConfig::default())
}

/// Importer with a full batch context override
pub fn test_importer_with_context() -> StudentImporter {
    StudentImporter::new(test_catalog(), ImportConfig::default()).with_context(ImportContext {
        academic_year: "2026/2027".to_string(),
        stage_id: "st-1".to_string(),
        stage_name: "الصف الأول الابتدائي".to_string(),
        class_id: "cl-1a".to_string(),
        class_name: "أ".to_string(),
    })
}

/// Build a keyed row from (header, text) pairs
pub fn build_row(pairs: &[(&str, &str)]) -> RawRow {
    let mut row = RawRow::new();
    for (header, value) in pairs {
        row.push(*header, CellValue::from(*value));
    }
    row
}

//! Tests for stage/class reference resolution


use crate::app::models::{Class, ReferenceCatalog, Stage};
use crate::app::services::reference_resolver::ReferenceResolver;

/// Catalog fixture with official stage names and short class codes
pub fn test_resolver() -> ReferenceResolver {
    let catalog = ReferenceCatalog {
        stages: vec![
            Stage {
                id: "st-1".to_string(),
                name: "الصف الأول الابتدائي".to_string(),
            },
            Stage {
                id: "st-2".to_string(),
                name: "الصف الثاني الابتدائي".to_string(),
            },
            Stage {
                id: "st-kg".to_string(),
                name: "KG1".to_string(),
            },
        ],
        classes: vec![
            Class {
                id: "cl-1".to_string(),
                name: "1".to_string(),
                stage_id: "st-1".to_string(),
            },
            Class {
                id: "cl-11".to_string(),
                name: "11".to_string(),
                stage_id: "st-1".to_string(),
            },
            Class {
                id: "cl-a".to_string(),
                name: "أ".to_string(),
                stage_id: "st-1".to_string(),
            },
            Class {
                id: "cl-2a".to_string(),
                name: "2/A".to_string(),
                stage_id: "st-2".to_string(),
            },
        ],
    };
    ReferenceResolver::new(catalog)
}

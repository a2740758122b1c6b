//! End-to-end pipeline tests over realistic export matrices
//!
//! These exercise the full path a CLI run takes: noisy matrix in, header
//! location, alias mapping, normalization, reference resolution (or the
//! batch context), and the final partitioned result.

use enrollment_importer::{
    CellValue, Class, ImportConfig, ImportContext, ReferenceCatalog, Stage, StudentImporter,
};

fn cells(values: &[&str]) -> Vec<CellValue> {
    values.iter().map(|v| CellValue::from(*v)).collect()
}

fn primary_catalog() -> ReferenceCatalog {
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
                id: "cl-2a".to_string(),
                name: "أ".to_string(),
                stage_id: "st-2".to_string(),
            },
        ],
    }
}

#[test]
fn noisy_export_with_context_override() {
    let context = ImportContext {
        academic_year: "2026/2027".to_string(),
        stage_id: "st-1".to_string(),
        stage_name: "الصف الأول الابتدائي".to_string(),
        class_id: "cl-1a".to_string(),
        class_name: "أ".to_string(),
    };
    let importer = StudentImporter::new(primary_catalog(), ImportConfig::default())
        .with_context(context);

    let matrix = vec![
        cells(&["كشف طلاب مدرسة النور"]),
        cells(&[]),
        cells(&["اسم الطالب", "النوع", "رقم هاتف ولي الأمر"]),
        cells(&["أحمد سمير يوسف", "ذكر", "01012345678"]),
        cells(&["", "", ""]),
    ];

    let result = importer.import_matrix(&matrix);

    assert_eq!(result.stats.header_row_index, Some(2));
    assert_eq!(result.stats.accepted, 1);
    assert_eq!(result.stats.rejected, 0);
    assert_eq!(result.stats.empty_skipped, 1);
    assert!(result.is_clean());

    let student = &result.success[0];
    assert_eq!(student.full_name, "أحمد سمير يوسف");
    assert_eq!(student.gender, "ذكر");
    assert_eq!(student.guardian_phone.as_deref(), Some("201012345678"));
    assert_eq!(student.stage_name, "الصف الأول الابتدائي");
    assert_eq!(student.class_id, "cl-1a");
    assert_eq!(student.academic_year, "2026/2027");
}

#[test]
fn colloquial_stage_resolves_to_catalog_spelling() {
    let importer = StudentImporter::new(primary_catalog(), ImportConfig::default());

    let matrix = vec![
        cells(&["اسم الطالب", "المرحلة", "الفصل"]),
        cells(&["منى علي حسن", "اولى ابتدائي", "أ"]),
    ];

    let result = importer.import_matrix(&matrix);

    assert_eq!(result.stats.accepted, 1);
    assert!(result.failed.is_empty());

    // The record carries the catalog's official spelling, not the
    // operator's colloquial one
    let student = &result.success[0];
    assert_eq!(student.stage_name, "الصف الأول الابتدائي");
    assert_eq!(student.class_name, "أ");
    assert_eq!(student.class_id, "cl-1a");
}

#[test]
fn mixed_batch_reports_original_line_numbers() {
    let importer = StudentImporter::new(primary_catalog(), ImportConfig::default());

    let matrix = vec![
        cells(&["مدرسة النور"]),
        cells(&[]),
        cells(&["اسم الطالب", "المرحلة", "الفصل"]),
        cells(&["منى علي حسن", "اولى ابتدائي", "أ"]),
        cells(&["كريم فؤاد عادل", "مرحلة غير معروفة", "أ"]),
    ];

    let result = importer.import_matrix(&matrix);

    assert_eq!(result.stats.accepted, 1);
    assert_eq!(result.stats.rejected, 1);

    // Header at matrix index 2, so the second data row is file line 5
    let failure = &result.failed[0];
    assert_eq!(failure.row, 5);
    assert!(!failure.errors.is_empty());
    assert!(failure.errors[0].contains("مرحلة غير معروفة"));
}

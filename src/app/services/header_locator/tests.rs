//! Tests for header row location

use super::{key_rows, locate_header};
use crate::app::models::CellValue;
use crate::app::services::header_mapper::AliasDictionary;

fn text_row(cells: &[&str]) -> Vec<CellValue> {
    cells.iter().map(|c| CellValue::from(*c)).collect()
}

#[test]
fn test_header_found_after_title_and_blank_rows() {
    let matrix = vec![
        text_row(&["كشف طلاب الصف الأول"]),
        vec![],
        vec![CellValue::Empty, CellValue::Empty],
        text_row(&["اسم الطالب", "النوع", "رقم هاتف ولي الأمر"]),
        text_row(&["أحمد سمير", "ذكر", "01012345678"]),
    ];
    let dict = AliasDictionary::new();

    let location = locate_header(&matrix, &dict).expect("header should be found");
    assert_eq!(location.row_index, 3);

    let rows = key_rows(&matrix, &location);
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0].get("اسم الطالب"),
        Some(&CellValue::from("أحمد سمير"))
    );
}

#[test]
fn test_header_at_row_zero() {
    let matrix = vec![
        text_row(&["الاسم", "الفصل"]),
        text_row(&["منى خالد", "1/A"]),
    ];
    let dict = AliasDictionary::new();

    let location = locate_header(&matrix, &dict).unwrap();
    assert_eq!(location.row_index, 0);
    assert_eq!(key_rows(&matrix, &location).len(), 1);
}

#[test]
fn test_single_recognized_column_is_not_enough() {
    // One recognized cell could be a coincidence in a title row
    let matrix = vec![
        text_row(&["بيان الاسم لسنة 2024", "ملاحظات"]),
        text_row(&["اسم الطالب", "النوع"]),
    ];
    let dict = AliasDictionary::new();

    let location = locate_header(&matrix, &dict).unwrap();
    assert_eq!(location.row_index, 1);
}

#[test]
fn test_fallback_accepts_all_text_first_row() {
    let matrix = vec![
        text_row(&["عمود غريب", "عمود اغرب"]),
        text_row(&["قيمة", "قيمة"]),
    ];
    let dict = AliasDictionary::new();

    let location = locate_header(&matrix, &dict).unwrap();
    assert_eq!(location.row_index, 0);
    assert_eq!(location.keys, vec!["عمود غريب", "عمود اغرب"]);
}

#[test]
fn test_numeric_first_row_without_header_is_unprocessable() {
    let matrix = vec![
        vec![CellValue::Number(1.0), CellValue::Number(2.0)],
        vec![CellValue::Number(3.0), CellValue::Number(4.0)],
    ];
    let dict = AliasDictionary::new();

    assert!(locate_header(&matrix, &dict).is_none());
}

#[test]
fn test_empty_matrix_is_unprocessable() {
    let dict = AliasDictionary::new();
    assert!(locate_header(&[], &dict).is_none());
}

#[test]
fn test_scan_depth_is_bounded() {
    let mut matrix: Vec<Vec<CellValue>> = (0..30).map(|_| vec![CellValue::Empty]).collect();
    matrix.push(text_row(&["اسم الطالب", "النوع"]));
    let dict = AliasDictionary::new();

    // Header sits beyond the scan depth; spacer rows are not all-text, so
    // the matrix is rejected rather than mis-keyed
    assert!(locate_header(&matrix, &dict).is_none());
}

#[test]
fn test_extra_cells_beyond_header_width_are_dropped() {
    let matrix = vec![
        text_row(&["الاسم", "النوع"]),
        vec![
            CellValue::from("سارة علي"),
            CellValue::from("أنثى"),
            CellValue::from("خلية زائدة"),
        ],
    ];
    let dict = AliasDictionary::new();

    let location = locate_header(&matrix, &dict).unwrap();
    let rows = key_rows(&matrix, &location);
    assert_eq!(rows[0].len(), 2);
}

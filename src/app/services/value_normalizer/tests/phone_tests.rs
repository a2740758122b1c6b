//! Tests for Egyptian phone number normalization

use crate::app::models::CellValue;
use crate::app::services::value_normalizer::format_phone;
use crate::config::PhoneConfig;

fn config() -> PhoneConfig {
    PhoneConfig::default()
}

#[test]
fn test_local_mobile_gets_country_code() {
    let cell = CellValue::Text("01012345678".to_string());
    assert_eq!(format_phone(&cell, &config()), "201012345678");
}

#[test]
fn test_bare_mobile_without_trunk_is_prefixed() {
    let cell = CellValue::Text("1012345678".to_string());
    assert_eq!(format_phone(&cell, &config()), "201012345678");
}

#[test]
fn test_country_coded_number_is_left_alone() {
    let cell = CellValue::Text("201012345678".to_string());
    assert_eq!(format_phone(&cell, &config()), "201012345678");
}

#[test]
fn test_formatter_is_idempotent() {
    let cell = CellValue::Text("01112223334".to_string());
    let once = format_phone(&cell, &config());
    let twice = format_phone(&CellValue::Text(once.clone()), &config());
    assert_eq!(once, twice);
}

#[test]
fn test_punctuated_input_is_repaired_first() {
    let cell = CellValue::Text("0101-234-5678".to_string());
    assert_eq!(format_phone(&cell, &config()), "201012345678");
}

#[test]
fn test_numeric_cell_mangled_by_spreadsheet() {
    // "01012345678" stored as a number loses its leading zero
    let cell = CellValue::Number(1012345678.0);
    assert_eq!(format_phone(&cell, &config()), "201012345678");
}

#[test]
fn test_unrecognized_shape_returned_digits_only() {
    let cell = CellValue::Text("12345".to_string());
    assert_eq!(format_phone(&cell, &config()), "12345");
}

#[test]
fn test_blank_cell_yields_empty() {
    assert_eq!(format_phone(&CellValue::Empty, &config()), "");
}

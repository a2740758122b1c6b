//! Tests for defaulting, gender unification, and id generation

use crate::app::services::row_classifier::defaults::{
    default_nationality, derive_academic_year, generate_student_id, unify_gender,
};
use crate::config::ImportDefaults;
use chrono::{TimeZone, Utc};

fn defaults() -> ImportDefaults {
    ImportDefaults::default()
}

#[test]
fn test_female_spelling_variants_unify() {
    assert_eq!(unify_gender("أنثى", &defaults()), "أنثى");
    assert_eq!(unify_gender("انثي", &defaults()), "أنثى");
    assert_eq!(unify_gender("انثى", &defaults()), "أنثى");
    assert_eq!(unify_gender("Female", &defaults()), "أنثى");
}

#[test]
fn test_male_spellings_unify() {
    assert_eq!(unify_gender("ذكر", &defaults()), "ذكر");
    assert_eq!(unify_gender("male", &defaults()), "ذكر");
}

#[test]
fn test_blank_gender_takes_default() {
    assert_eq!(unify_gender("", &defaults()), "ذكر");
    assert_eq!(unify_gender("   ", &defaults()), "ذكر");
}

#[test]
fn test_unrecognized_gender_spelling_is_kept_cleaned() {
    assert_eq!(unify_gender(" غير محدد ", &defaults()), "غير محدد");
}

#[test]
fn test_blank_nationality_takes_default() {
    assert_eq!(default_nationality("", &defaults()), "مصري");
    assert_eq!(default_nationality("سعودي", &defaults()), "سعودي");
}

#[test]
fn test_academic_year_rolls_over_in_september() {
    let august = Utc.with_ymd_and_hms(2026, 8, 26, 12, 0, 0).unwrap();
    let september = Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap();
    assert_eq!(derive_academic_year(august), "2025/2026");
    assert_eq!(derive_academic_year(september), "2026/2027");
}

#[test]
fn test_generated_ids_have_prefix_year_and_are_distinct() {
    let a = generate_student_id();
    let b = generate_student_id();
    assert!(a.starts_with("STU"));
    assert!(a.chars().skip(3).take(4).all(|c| c.is_ascii_digit()));
    assert_ne!(a, b);
}

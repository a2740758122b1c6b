//! Tests for free-text cleaning

use crate::app::services::value_normalizer::clean_text;

#[test]
fn test_clean_text_strips_noise_characters() {
    assert_eq!(clean_text("Ahmed@ #Samir!"), "Ahmed Samir");
    assert_eq!(clean_text("أحمد سمير*"), "أحمد سمير");
}

#[test]
fn test_clean_text_preserves_periods_and_hyphens() {
    assert_eq!(clean_text("Dr. Al-Sayed"), "Dr. Al-Sayed");
}

#[test]
fn test_clean_text_collapses_whitespace() {
    assert_eq!(clean_text("  Ahmed   Samir\t Youssef "), "Ahmed Samir Youssef");
}

#[test]
fn test_clean_text_keeps_arabic_block() {
    assert_eq!(clean_text("محمد عبد الرحمن"), "محمد عبد الرحمن");
}

#[test]
fn test_clean_text_is_idempotent() {
    let once = clean_text("  عمرو,  خالد! ");
    assert_eq!(clean_text(&once), once);
}

#[test]
fn test_clean_text_empty_and_noise_only() {
    assert_eq!(clean_text(""), "");
    assert_eq!(clean_text("@#$%"), "");
}

//! Defaulting, enumerated-value unification, and identifier generation

use crate::app::services::value_normalizer::{clean_text, comparison_key};
use crate::config::ImportDefaults;
use crate::constants::{gender, GENERATED_ID_PREFIX, GENERATED_ID_RANDOM_LEN};
use chrono::{DateTime, Datelike, Utc};
use uuid::Uuid;

/// Unify gender spellings onto the canonical forms
///
/// Both accepted spellings of "أنثى" collapse to one; a blank value takes
/// the configured default; an unrecognized spelling is kept cleaned rather
/// than guessed at.
pub fn unify_gender(raw: &str, defaults: &ImportDefaults) -> String {
    let cleaned = clean_text(raw);
    if cleaned.is_empty() {
        return defaults.gender.clone();
    }
    let key = comparison_key(&cleaned);
    if gender::FEMALE_VARIANTS
        .iter()
        .any(|variant| comparison_key(variant) == key)
    {
        return gender::FEMALE.to_string();
    }
    if gender::MALE_VARIANTS
        .iter()
        .any(|variant| comparison_key(variant) == key)
    {
        return gender::MALE.to_string();
    }
    cleaned
}

/// Nationality with the configured default applied to blanks
pub fn default_nationality(raw: &str, defaults: &ImportDefaults) -> String {
    let cleaned = clean_text(raw);
    if cleaned.is_empty() {
        defaults.nationality.clone()
    } else {
        cleaned
    }
}

/// Academic year derived from a date, with a September rollover
///
/// August 2026 falls in "2025/2026"; September 2026 opens "2026/2027".
pub fn derive_academic_year(now: DateTime<Utc>) -> String {
    let year = now.year();
    if now.month() >= crate::constants::ACADEMIC_YEAR_ROLLOVER_MONTH {
        format!("{}/{}", year, year + 1)
    } else {
        format!("{}/{}", year - 1, year)
    }
}

/// Generate a student identifier when no national id was supplied
///
/// Fixed prefix, current year, then a collision-resistant suffix combining
/// the current millisecond and a random fragment.
pub fn generate_student_id() -> String {
    let now = Utc::now();
    let millis = now.timestamp_millis().rem_euclid(1_000_000);
    let random = Uuid::new_v4().simple().to_string();
    format!(
        "{}{}{:06}{}",
        GENERATED_ID_PREFIX,
        now.year(),
        millis,
        &random[..GENERATED_ID_RANDOM_LEN]
    )
}

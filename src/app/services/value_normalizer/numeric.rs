//! Repair of identifiers corrupted by spreadsheet numeric re-encoding
//!
//! Spreadsheet software auto-converts long digit-string identifiers (national
//! ids, phone numbers) into floating point and renders them in scientific
//! notation. This module reconstructs the full non-exponential digit string.
//!
//! The repair is best effort: numbers whose precision was already destroyed
//! by floating-point storage upstream cannot be recovered, only flagged.

use crate::app::models::CellValue;
use crate::constants::F64_EXACT_INT_LIMIT;
use regex::Regex;
use std::sync::OnceLock;
use tracing::warn;

fn scientific_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[+-]?\d+(\.\d+)?[eE][+-]?\d+$").expect("valid scientific pattern")
    })
}

/// Reconstruct the digit string an identifier cell was supposed to carry
///
/// Numeric cells are expanded to their full non-exponential form. Text cells
/// that themselves look like scientific notation (a float stringified by an
/// earlier export) are parsed and expanded; all other text is stripped to
/// its digits. Blank cells yield an empty string.
pub fn repair_numeric(cell: &CellValue) -> String {
    match cell {
        CellValue::Number(n) => digits_from_float(*n),
        CellValue::Text(s) => {
            let trimmed = s.trim();
            if scientific_pattern().is_match(trimmed) {
                match trimmed.parse::<f64>() {
                    Ok(n) => digits_from_float(n),
                    Err(_) => strip_non_digits(trimmed),
                }
            } else {
                strip_non_digits(trimmed)
            }
        }
        CellValue::Empty => String::new(),
    }
}

/// Keep only ASCII digits
fn strip_non_digits(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

fn digits_from_float(n: f64) -> String {
    let magnitude = n.abs();
    if magnitude >= F64_EXACT_INT_LIMIT {
        // Digits beyond f64's exact-integer range were lost before the file
        // reached us; the repaired value is suspect but still used as-is.
        warn!(
            value = %format!("{:.0}", magnitude.trunc()),
            "identifier exceeds exact float range; trailing digits may be corrupted"
        );
    }
    format!("{:.0}", magnitude.trunc())
}

//! Value normalization primitives for raw spreadsheet cells
//!
//! A family of pure, independently testable functions cleaning text,
//! canonicalizing Arabic letterform variants for comparison, repairing
//! scientific-notation numerics, and formatting Egyptian phone numbers.
//!
//! The script canonicalizer is comparison-only: it is never applied to
//! stored values, so original spellings survive into the canonical record.

pub mod arabic;
pub mod numeric;
pub mod phone;
pub mod text;

#[cfg(test)]
pub mod tests;

pub use arabic::canonicalize_arabic;
pub use numeric::repair_numeric;
pub use phone::format_phone;
pub use text::clean_text;

/// Comparison key for a value: cleaned, lowercased, script-canonicalized
///
/// Two strings with the same key are considered the same value for matching
/// purposes. Lowercasing covers scripts that support case; Arabic passes
/// through unchanged.
pub fn comparison_key(value: &str) -> String {
    canonicalize_arabic(&clean_text(value).to_lowercase())
}

/// Equality under cleaning, lowercasing, and script canonicalization
pub fn equivalent(a: &str, b: &str) -> bool {
    comparison_key(a) == comparison_key(b)
}

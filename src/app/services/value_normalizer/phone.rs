//! Egyptian phone number normalization

use super::numeric::repair_numeric;
use crate::app::models::CellValue;
use crate::config::PhoneConfig;

/// Normalize a phone cell to a country-coded digit string, best effort
///
/// The cell is first repaired to bare digits, then:
/// - a value already starting with the country calling code is left as-is
/// - an 11-digit local mobile number starting with the trunk prefix has the
///   trunk digit replaced with the country code
/// - a 10-digit number without the trunk prefix is prefixed with the
///   country code
/// - anything else is returned digits-only, unprefixed
///
/// Unrecognized shapes are never rejected here; acceptance is decided at the
/// row level. The formatter is idempotent on its own output.
pub fn format_phone(cell: &CellValue, config: &PhoneConfig) -> String {
    let digits = repair_numeric(cell);
    if digits.is_empty() {
        return digits;
    }

    if digits.starts_with(&config.country_code) {
        return digits;
    }

    if digits.len() == config.local_mobile_len && digits.starts_with(config.trunk_prefix) {
        let rest = &digits[config.trunk_prefix.len_utf8()..];
        return format!("{}{}", config.country_code, rest);
    }

    if digits.len() == config.bare_mobile_len && !digits.starts_with(config.trunk_prefix) {
        return format!("{}{}", config.country_code, digits);
    }

    digits
}

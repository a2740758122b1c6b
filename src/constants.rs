//! Application constants for the enrollment importer
//!
//! This module contains the fixed values used throughout the import
//! pipeline: phone-number prefixes, header detection thresholds, and
//! identifier generation settings.

// =============================================================================
// Phone Number Normalization
// =============================================================================

/// Egyptian international calling code, digits only
pub const COUNTRY_CALLING_CODE: &str = "20";

/// Domestic trunk prefix dialled before local numbers
pub const TRUNK_PREFIX: char = '0';

/// Length of a domestic mobile number including the trunk prefix
/// (e.g. "01012345678")
pub const LOCAL_MOBILE_LEN: usize = 11;

/// Length of a mobile number with the trunk prefix already stripped
pub const BARE_MOBILE_LEN: usize = 10;

// =============================================================================
// Header Detection
// =============================================================================

/// Maximum number of leading rows scanned when locating the header row.
/// Real exports prepend at most a handful of title/logo/spacer rows.
pub const HEADER_SCAN_DEPTH: usize = 20;

/// Minimum number of cells in a row that must resolve to canonical fields
/// for the row to be accepted as the header row
pub const HEADER_MATCH_THRESHOLD: usize = 2;

// =============================================================================
// Row Validation
// =============================================================================

/// Minimum number of populated cells for a row to be considered data at all;
/// below this the row is skipped as structurally empty
pub const MIN_POPULATED_CELLS: usize = 2;

/// Minimum character count of a cleaned student name
pub const MIN_NAME_CHARS: usize = 3;

// =============================================================================
// Identifier Generation
// =============================================================================

/// Prefix for generated student identifiers when no national id was supplied
pub const GENERATED_ID_PREFIX: &str = "STU";

/// Number of random hex characters appended to a generated identifier
pub const GENERATED_ID_RANDOM_LEN: usize = 6;

// =============================================================================
// Numeric Repair
// =============================================================================

/// Largest integer magnitude f64 can represent exactly (2^53). Repaired
/// identifiers above this have already lost digits upstream and are flagged
/// with a warning.
pub const F64_EXACT_INT_LIMIT: f64 = 9_007_199_254_740_992.0;

// =============================================================================
// Defaults
// =============================================================================

/// Month in which the academic year rolls over (September)
pub const ACADEMIC_YEAR_ROLLOVER_MONTH: u32 = 9;

/// Canonical spellings for enumerated gender values
pub mod gender {
    pub const MALE: &str = "ذكر";
    pub const FEMALE: &str = "أنثى";

    /// Accepted input spellings unified to [`FEMALE`]
    pub const FEMALE_VARIANTS: &[&str] = &["أنثى", "انثى", "انثي", "أنثي", "female", "f"];

    /// Accepted input spellings unified to [`MALE`]
    pub const MALE_VARIANTS: &[&str] = &["ذكر", "male", "m"];
}

/// Default nationality applied when the column is absent or blank
pub const DEFAULT_NATIONALITY: &str = "مصري";

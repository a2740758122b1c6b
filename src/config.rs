//! Configuration for the import pipeline.
//!
//! Provides configuration structures for value defaults, phone-number
//! normalization, and row validation thresholds. All settings have sensible
//! defaults matching the Egyptian school-registry exports the importer was
//! built for; callers override individual fields as needed.

use crate::constants::{
    self, BARE_MOBILE_LEN, COUNTRY_CALLING_CODE, LOCAL_MOBILE_LEN, MIN_NAME_CHARS, TRUNK_PREFIX,
};
use serde::{Deserialize, Serialize};

/// Top-level configuration for a single import run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Defaults applied to unset optional fields
    pub defaults: ImportDefaults,

    /// Phone-number normalization settings
    pub phone: PhoneConfig,

    /// Minimum character count of a cleaned student name; shorter names on
    /// otherwise populated rows are rejected
    pub min_name_chars: usize,

    /// Show a progress bar while classifying rows
    pub show_progress: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            defaults: ImportDefaults::default(),
            phone: PhoneConfig::default(),
            min_name_chars: MIN_NAME_CHARS,
            show_progress: false,
        }
    }
}

/// Default values substituted for unset optional fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportDefaults {
    /// Nationality when the column is absent or blank
    pub nationality: String,

    /// Gender when the column is absent or blank
    pub gender: String,
}

impl Default for ImportDefaults {
    fn default() -> Self {
        Self {
            nationality: constants::DEFAULT_NATIONALITY.to_string(),
            gender: constants::gender::MALE.to_string(),
        }
    }
}

/// Country-specific phone normalization settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneConfig {
    /// International calling code, digits only (e.g. "20")
    pub country_code: String,

    /// Domestic trunk prefix dialled before local numbers
    pub trunk_prefix: char,

    /// Length of a local mobile number including the trunk prefix
    pub local_mobile_len: usize,

    /// Length of a mobile number without the trunk prefix
    pub bare_mobile_len: usize,
}

impl Default for PhoneConfig {
    fn default() -> Self {
        Self {
            country_code: COUNTRY_CALLING_CODE.to_string(),
            trunk_prefix: TRUNK_PREFIX,
            local_mobile_len: LOCAL_MOBILE_LEN,
            bare_mobile_len: BARE_MOBILE_LEN,
        }
    }
}

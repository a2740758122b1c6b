//! Header normalization and alias lookup
//!
//! Source files label the same attribute in many ways: different languages,
//! abbreviations, punctuation, stray parentheses. This module normalizes a
//! raw header string and resolves it against the alias dictionary to one of
//! the closed set of canonical fields.
//!
//! Resolution is lossy-tolerant by design: a header no alias covers maps to
//! `None` and the column is silently discarded, never an error.

use crate::app::models::CanonicalField;
use crate::app::services::value_normalizer::{canonicalize_arabic, clean_text};
use crate::Result;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

pub mod aliases;

#[cfg(test)]
pub mod tests;

/// Minimum alias length (in characters) eligible for the substring tier;
/// very short keys would match almost anything
const MIN_SUBSTRING_ALIAS_CHARS: usize = 3;

/// Many-to-one mapping from normalized header text to canonical fields
///
/// Holds the built-in alias table plus any overlay entries merged at
/// runtime. Lookup tries an exact match first, then a bidirectional
/// substring scan over the entries in insertion order, so priority between
/// overlapping aliases is deterministic.
#[derive(Debug, Clone)]
pub struct AliasDictionary {
    /// Exact-match index over normalized alias keys
    exact: HashMap<String, CanonicalField>,

    /// Entries in insertion order for the substring tier
    ordered: Vec<(String, CanonicalField)>,
}

impl Default for AliasDictionary {
    fn default() -> Self {
        let mut dictionary = Self {
            exact: HashMap::new(),
            ordered: Vec::new(),
        };
        for (alias, field) in aliases::BUILTIN_ALIASES {
            dictionary.insert(alias, *field);
        }
        dictionary
    }
}

impl AliasDictionary {
    /// Create a dictionary with the built-in alias table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one alias; the key is normalized the same way lookups are
    pub fn insert(&mut self, alias: &str, field: CanonicalField) {
        let key = normalize_header(alias);
        if key.is_empty() {
            return;
        }
        if !self.exact.contains_key(&key) {
            self.ordered.push((key.clone(), field));
        }
        self.exact.insert(key, field);
    }

    /// Merge overlay entries from a JSON object of `{"alias": "field"}`
    ///
    /// Overlay aliases are inserted in key order and take the same lookup
    /// priority rules as built-ins. Returns the number of entries merged.
    pub fn merge_json(&mut self, json: &str) -> Result<usize> {
        let overlay: BTreeMap<String, CanonicalField> = serde_json::from_str(json)?;
        let count = overlay.len();
        for (alias, field) in overlay {
            self.insert(&alias, field);
        }
        debug!("merged {} alias overlay entries", count);
        Ok(count)
    }

    /// Number of distinct alias keys
    pub fn len(&self) -> usize {
        self.exact.len()
    }

    /// Whether the dictionary has no entries
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }

    /// Resolve a raw header string to a canonical field
    ///
    /// Tries an exact match on the normalized header, then the first
    /// bidirectional substring hit: the header containing an alias or an
    /// alias containing the header.
    pub fn resolve(&self, header: &str) -> Option<CanonicalField> {
        let key = normalize_header(header);
        if key.is_empty() {
            return None;
        }

        if let Some(field) = self.exact.get(&key) {
            return Some(*field);
        }

        if key.chars().count() < MIN_SUBSTRING_ALIAS_CHARS {
            return None;
        }

        self.ordered
            .iter()
            .find(|(alias, _)| {
                alias.chars().count() >= MIN_SUBSTRING_ALIAS_CHARS
                    && (key.contains(alias) || alias.contains(&key))
            })
            .map(|(_, field)| *field)
    }
}

/// Normalize a raw header string for dictionary lookup
///
/// Strips parentheses, dashes, and underscores; collapses whitespace;
/// lowercases; folds Arabic letterform variants. The result is a comparison
/// key only and is never stored.
pub fn normalize_header(raw: &str) -> String {
    let unpunctuated: String = raw
        .chars()
        .map(|c| match c {
            '(' | ')' | '-' | '_' | '،' => ' ',
            other => other,
        })
        .collect();
    canonicalize_arabic(&clean_text(&unpunctuated).to_lowercase())
}

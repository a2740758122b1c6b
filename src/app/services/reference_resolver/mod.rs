//! Free-text stage/class resolution against the reference catalog
//!
//! Matches operator-typed grade and class labels against the authoritative
//! catalog of stages and classes. Stage resolution is three-tiered: exact
//! match under normalization, static-alias correction of colloquial
//! spellings, then bidirectional substring matching for partial or truncated
//! text. Class resolution is deliberately stricter: class codes are short,
//! and a substring tier would let "1" match "11".

use crate::app::models::{Class, ReferenceCatalog, Stage};
use crate::app::services::value_normalizer::{canonicalize_arabic, clean_text, comparison_key};
use tracing::debug;

pub mod stage_aliases;

#[cfg(test)]
pub mod tests;

/// Resolver over a read-only reference catalog
///
/// The catalog is supplied wholesale by the caller and treated as
/// authoritative for the import run. The resolver never mutates it and never
/// invents entries: a static-alias hit still requires the official name to
/// exist in the catalog.
#[derive(Debug, Clone)]
pub struct ReferenceResolver {
    catalog: ReferenceCatalog,
}

impl ReferenceResolver {
    /// Create a resolver over the caller-fetched catalog
    pub fn new(catalog: ReferenceCatalog) -> Self {
        Self { catalog }
    }

    /// Access the underlying catalog
    pub fn catalog(&self) -> &ReferenceCatalog {
        &self.catalog
    }

    /// Resolve a free-text stage label, first tier to hit wins
    ///
    /// 1. Exact/normalized: the cleaned, lowercased, canonicalized input
    ///    equals a catalog stage name under the same folding.
    /// 2. Static alias: the input matches a colloquial spelling whose
    ///    official name is then looked up exactly in the catalog.
    /// 3. Bidirectional substring: the canonicalized catalog name contains
    ///    the canonicalized input, or vice versa.
    pub fn resolve_stage(&self, raw: &str) -> Option<&Stage> {
        let key = comparison_key(raw);
        if key.is_empty() {
            return None;
        }

        if let Some(stage) = self.stage_by_key(&key) {
            return Some(stage);
        }

        if let Some(official) = stage_aliases::official_name_for(raw) {
            if let Some(stage) = self.stage_by_key(&comparison_key(official)) {
                debug!(input = raw, official, "stage resolved via static alias");
                return Some(stage);
            }
        }

        let substring_hit = self.catalog.stages.iter().find(|stage| {
            let stage_key = comparison_key(&stage.name);
            !stage_key.is_empty() && (stage_key.contains(&key) || key.contains(&stage_key))
        });
        if let Some(stage) = substring_hit {
            debug!(input = raw, stage = %stage.name, "stage resolved via substring match");
        }
        substring_hit
    }

    /// Resolve a free-text class label within an already-resolved stage
    ///
    /// Only classes belonging to the stage are candidates. The cell value is
    /// cleaned, uppercased, and stripped of internal whitespace before
    /// exact/normalized comparison; there is no substring fallback at this
    /// tier.
    pub fn resolve_class(&self, stage: &Stage, raw: &str) -> Option<&Class> {
        let key = class_key(raw);
        if key.is_empty() {
            return None;
        }

        self.catalog
            .classes_for_stage(&stage.id)
            .find(|class| class_key(&class.name) == key)
    }

    fn stage_by_key(&self, key: &str) -> Option<&Stage> {
        self.catalog
            .stages
            .iter()
            .find(|stage| comparison_key(&stage.name) == key)
    }
}

/// Comparison key for class codes: cleaned, uppercased, canonicalized, with
/// internal whitespace removed so "1 / A" and "1/A" compare equal
fn class_key(raw: &str) -> String {
    let cleaned = canonicalize_arabic(&clean_text(raw).to_uppercase());
    cleaned.split_whitespace().collect()
}

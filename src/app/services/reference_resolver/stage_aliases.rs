//! Static stage-name alias table
//!
//! Operators type grade names the way they say them: "اولى ابتدائي" instead
//! of the catalog's official "الصف الأول الابتدائي". This table corrects the
//! common colloquial and abbreviated spellings to the official naming before
//! any fuzzy matching runs.
//!
//! The table is only a lookup step: the official name it yields must still
//! exist in the reference catalog, it never substitutes for catalog
//! presence. Entries are data; extend freely.

use crate::app::services::value_normalizer::comparison_key;

pub(crate) const STAGE_ALIASES: &[(&str, &str)] = &[
    // Kindergarten
    ("كي جي 1", "KG1"),
    ("كي جي 2", "KG2"),
    ("روضة اولى", "KG1"),
    ("روضة ثانية", "KG2"),
    ("kg one", "KG1"),
    ("kg two", "KG2"),
    // Primary, colloquial ordinals (Egyptian and standard spellings)
    ("اولى ابتدائي", "الصف الأول الابتدائي"),
    ("اولي ابتدائي", "الصف الأول الابتدائي"),
    ("الاول الابتدائي", "الصف الأول الابتدائي"),
    ("تانية ابتدائي", "الصف الثاني الابتدائي"),
    ("ثانية ابتدائي", "الصف الثاني الابتدائي"),
    ("الثاني الابتدائي", "الصف الثاني الابتدائي"),
    ("تالتة ابتدائي", "الصف الثالث الابتدائي"),
    ("ثالثة ابتدائي", "الصف الثالث الابتدائي"),
    ("الثالث الابتدائي", "الصف الثالث الابتدائي"),
    ("رابعة ابتدائي", "الصف الرابع الابتدائي"),
    ("الرابع الابتدائي", "الصف الرابع الابتدائي"),
    ("خامسة ابتدائي", "الصف الخامس الابتدائي"),
    ("الخامس الابتدائي", "الصف الخامس الابتدائي"),
    ("سادسة ابتدائي", "الصف السادس الابتدائي"),
    ("السادس الابتدائي", "الصف السادس الابتدائي"),
    // Primary, English phrasings
    ("1st grade primary", "الصف الأول الابتدائي"),
    ("2nd grade primary", "الصف الثاني الابتدائي"),
    ("3rd grade primary", "الصف الثالث الابتدائي"),
    ("4th grade primary", "الصف الرابع الابتدائي"),
    ("5th grade primary", "الصف الخامس الابتدائي"),
    ("6th grade primary", "الصف السادس الابتدائي"),
    // Preparatory
    ("اولى اعدادي", "الصف الأول الإعدادي"),
    ("اولي اعدادي", "الصف الأول الإعدادي"),
    ("الاول الاعدادي", "الصف الأول الإعدادي"),
    ("تانية اعدادي", "الصف الثاني الإعدادي"),
    ("ثانية اعدادي", "الصف الثاني الإعدادي"),
    ("الثاني الاعدادي", "الصف الثاني الإعدادي"),
    ("تالتة اعدادي", "الصف الثالث الإعدادي"),
    ("ثالثة اعدادي", "الصف الثالث الإعدادي"),
    ("الثالث الاعدادي", "الصف الثالث الإعدادي"),
    ("1st grade prep", "الصف الأول الإعدادي"),
    ("2nd grade prep", "الصف الثاني الإعدادي"),
    ("3rd grade prep", "الصف الثالث الإعدادي"),
    // Secondary
    ("اولى ثانوي", "الصف الأول الثانوي"),
    ("اولي ثانوي", "الصف الأول الثانوي"),
    ("الاول الثانوي", "الصف الأول الثانوي"),
    ("تانية ثانوي", "الصف الثاني الثانوي"),
    ("ثانية ثانوي", "الصف الثاني الثانوي"),
    ("الثاني الثانوي", "الصف الثاني الثانوي"),
    ("تالتة ثانوي", "الصف الثالث الثانوي"),
    ("ثالثة ثانوي", "الصف الثالث الثانوي"),
    ("الثالث الثانوي", "الصف الثالث الثانوي"),
    ("1st grade secondary", "الصف الأول الثانوي"),
    ("2nd grade secondary", "الصف الثاني الثانوي"),
    ("3rd grade secondary", "الصف الثالث الثانوي"),
];

/// Look up the official stage name for a colloquial spelling
///
/// Comparison runs under cleaning, lowercasing, and Arabic canonicalization
/// on both sides, so hamza and ta-marbuta variants of the colloquial
/// spelling still hit.
pub(crate) fn official_name_for(input: &str) -> Option<&'static str> {
    let key = comparison_key(input);
    if key.is_empty() {
        return None;
    }
    STAGE_ALIASES
        .iter()
        .find(|(alias, _)| comparison_key(alias) == key)
        .map(|(_, official)| *official)
}

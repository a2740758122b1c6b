//! Free-text cleaning for names and labels

use regex::Regex;
use std::sync::OnceLock;

/// Characters stripped from free text: anything outside word characters,
/// whitespace, the Arabic block, hyphens, and periods. Periods stay so
/// abbreviations survive cleaning.
fn noise_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\w\s\x{0600}-\x{06FF}.\-]").expect("valid noise pattern"))
}

fn whitespace_run_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace pattern"))
}

/// Clean a free-text value: strip noise characters, collapse repeated
/// whitespace, trim
pub fn clean_text(raw: &str) -> String {
    let stripped = noise_pattern().replace_all(raw, "");
    let collapsed = whitespace_run_pattern().replace_all(&stripped, " ");
    collapsed.trim().to_string()
}

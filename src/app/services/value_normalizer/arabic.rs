//! Arabic letterform canonicalization for comparison
//!
//! Source files and the reference catalog spell the same logical letter in
//! several glyph variants: hamza-carrying alefs, ta marbuta written as ha,
//! alef maksura written as yeh. Folding those onto one representative form
//! makes equality checks spelling-tolerant.
//!
//! This transform is used only when comparing two strings; stored and output
//! values keep their original spelling.

/// Fold known letterform variants onto one representative form
///
/// Idempotent: applying it twice equals applying it once. Tatweel and
/// harakat carry no lexical content and are dropped.
pub fn canonicalize_arabic(input: &str) -> String {
    input
        .chars()
        .filter_map(|c| match c {
            // Alef variants: hamza above/below, madda, wasla
            'أ' | 'إ' | 'آ' | 'ٱ' => Some('ا'),
            // Ta marbuta written as ha ending
            'ة' => Some('ه'),
            // Alef maksura written as yeh ending
            'ى' => Some('ي'),
            // Tatweel (kashida) stretching
            '\u{0640}' => None,
            // Harakat (short vowel marks, sukun, shadda, tanween)
            '\u{064B}'..='\u{0652}' => None,
            _ => Some(c),
        })
        .collect()
}

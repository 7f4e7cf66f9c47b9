//! Text normalization for the tag-character codec.
//!
//! The encodable tag range only spans U+E0001..U+E007E, so every character
//! that goes into a payload must map to a single byte in 0x01..0x7E. This
//! module transliterates arbitrary input down to that range with as little
//! loss as possible:
//!
//! 1. A fixed substitution table handles common letters with no canonical
//!    decomposition (ñ, ß, æ, ø...) plus typographic punctuation
//! 2. NFD decomposition followed by stripping combining marks removes
//!    accents from everything else (é -> e)
//! 3. Whatever is still outside printable ASCII is dropped

use unicode_normalization::UnicodeNormalization;

/// Per-character replacements applied before decomposition.
///
/// These are characters NFD cannot reduce to ASCII on its own, plus the
/// usual word-processor punctuation. Both cases are listed where the
/// replacement differs.
const SUBSTITUTIONS: &[(char, &str)] = &[
    ('\u{00F1}', "n"),   // ñ
    ('\u{00D1}', "N"),   // Ñ
    ('\u{00DF}', "ss"),  // ß
    ('\u{00E6}', "ae"),  // æ
    ('\u{00C6}', "AE"),  // Æ
    ('\u{00F8}', "o"),   // ø
    ('\u{00D8}', "O"),   // Ø
    ('\u{00F0}', "d"),   // ð
    ('\u{00D0}', "D"),   // Ð
    ('\u{00FE}', "th"),  // þ
    ('\u{00DE}', "Th"),  // Þ
    ('\u{0142}', "l"),   // ł
    ('\u{0141}', "L"),   // Ł
    ('\u{0153}', "oe"),  // œ
    ('\u{0152}', "OE"),  // Œ
    ('\u{2018}', "'"),   // left single quote
    ('\u{2019}', "'"),   // right single quote
    ('\u{201C}', "\""),  // left double quote
    ('\u{201D}', "\""),  // right double quote
    ('\u{2014}', "-"),   // em dash
    ('\u{2013}', "-"),   // en dash
    ('\u{2026}', "..."), // ellipsis
];

/// Looks up a character in the substitution table.
fn substitute(c: char) -> Option<&'static str> {
    SUBSTITUTIONS
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
}

/// Transliterates arbitrary text into the printable ASCII range 0x01..=0x7E.
///
/// Total and deterministic: never fails, and since the output is already
/// ASCII it is idempotent (`normalize(normalize(x)) == normalize(x)`).
/// Characters with no ASCII rendering (emoji, CJK, NUL, DEL) are dropped.
pub fn normalize(text: &str) -> String {
    let mut substituted = String::with_capacity(text.len());
    for c in text.chars() {
        match substitute(c) {
            Some(replacement) => substituted.push_str(replacement),
            None => substituted.push(c),
        }
    }

    substituted
        .nfd()
        .filter(|&c| !matches!(c, '\u{0300}'..='\u{036F}'))
        .filter(|&c| matches!(c, '\u{01}'..='\u{7E}'))
        .collect()
}

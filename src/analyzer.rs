//! Per-code-point classification of arbitrary strings.
//!
//! This is the inspection side of the codec: every Unicode scalar value in
//! the input gets classified as visible, hidden (tag character), or the
//! cancel-tag terminator. The decoder is a filter over this classification,
//! so the two can never disagree about what counts as hidden.

use serde::Serialize;

use crate::{CANCEL_PLACEHOLDER, CANCEL_TAG, TAG_MAX, TAG_MIN, TAG_OFFSET};

/// Classification of a single code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// An ordinary code point that renders normally.
    Visible,
    /// An invisible tag character carrying one hidden payload character.
    Tag,
    /// The cancel tag (U+E007F), the end-of-payload sentinel.
    Cancel,
}

/// One classified code point from an analyzed string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassifiedCodepoint {
    /// The category this code point falls into.
    #[serde(rename = "type")]
    pub category: Category,
    /// What to show for this code point: the character itself if visible,
    /// the decoded source character for a tag, or a placeholder glyph for
    /// the cancel tag (which would otherwise render as nothing).
    #[serde(rename = "char")]
    pub display: char,
    /// The original code point value.
    pub codepoint: u32,
}

/// Classifies every scalar value of `input`, in order.
///
/// Total and length-preserving: one entry per code point, for any input.
pub fn analyze_codepoints(input: &str) -> Vec<ClassifiedCodepoint> {
    input.chars().map(classify).collect()
}

/// Classifies a single character.
fn classify(c: char) -> ClassifiedCodepoint {
    let cp = c as u32;

    if (TAG_MIN..=TAG_MAX).contains(&cp) {
        // cp - TAG_OFFSET lands in 0x01..=0x7E, always a valid scalar
        let source = char::from_u32(cp - TAG_OFFSET).expect("tag range maps to ASCII");
        ClassifiedCodepoint {
            category: Category::Tag,
            display: source,
            codepoint: cp,
        }
    } else if c == CANCEL_TAG {
        ClassifiedCodepoint {
            category: Category::Cancel,
            display: CANCEL_PLACEHOLDER,
            codepoint: cp,
        }
    } else {
        ClassifiedCodepoint {
            category: Category::Visible,
            display: c,
            codepoint: cp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_only() {
        let entries = analyze_codepoints("hi");
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.category == Category::Visible));
        assert_eq!(entries[0].display, 'h');
        assert_eq!(entries[1].codepoint, 'i' as u32);
    }

    #[test]
    fn test_ghost_plus_tag() {
        let input = format!("👻{}", '\u{E0068}'); // tag for 'h'
        let entries = analyze_codepoints(&input);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].category, Category::Visible);
        assert_eq!(entries[0].display, '👻');
        assert_eq!(entries[0].codepoint, 0x1F47B);
        assert_eq!(entries[1].category, Category::Tag);
        assert_eq!(entries[1].display, 'h');
        assert_eq!(entries[1].codepoint, 0xE0068);
    }

    #[test]
    fn test_cancel_tag_gets_placeholder() {
        let entries = analyze_codepoints("\u{E007F}");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].category, Category::Cancel);
        assert_eq!(entries[0].display, CANCEL_PLACEHOLDER);
        assert_eq!(entries[0].codepoint, 0xE007F);
    }

    #[test]
    fn test_length_preserving_per_scalar() {
        // Emoji above the BMP are one scalar each, not two
        let input = "👻🔥a\u{E0041}\u{E007F}";
        assert_eq!(analyze_codepoints(input).len(), input.chars().count());
    }

    #[test]
    fn test_tag_range_boundaries() {
        // U+E0000 is below the encodable range, U+E007F is the cancel tag
        let entries = analyze_codepoints("\u{E0000}\u{E0001}\u{E007E}\u{E007F}\u{E0080}");
        let categories: Vec<Category> = entries.iter().map(|e| e.category).collect();
        assert_eq!(
            categories,
            vec![
                Category::Visible,
                Category::Tag,
                Category::Tag,
                Category::Cancel,
                Category::Visible,
            ]
        );
        assert_eq!(entries[1].display, '\u{01}');
        assert_eq!(entries[2].display, '~');
    }

    #[test]
    fn test_empty_input() {
        assert!(analyze_codepoints("").is_empty());
    }

    #[test]
    fn test_json_shape() {
        let entries = analyze_codepoints("\u{E0068}");
        let json = serde_json::to_value(&entries).unwrap();
        assert_eq!(json[0]["type"], "tag");
        assert_eq!(json[0]["char"], "h");
        assert_eq!(json[0]["codepoint"], 0xE0068);
    }
}

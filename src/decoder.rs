//! Hidden payload extraction.
//!
//! CRITICAL: decoding NEVER fails. Any string is a valid input; the decoder
//! simply collects every tag character present, wherever it sits. Missing
//! terminators, multiple payload runs, or visible characters interleaved
//! with the payload all produce the obvious concatenation rather than an
//! error. Callers that want to distinguish "no payload" from "empty payload
//! text" check for an empty result.

use crate::analyzer::{analyze_codepoints, Category};

/// Extracts the hidden message from `input`.
///
/// Keeps every code point in the encodable tag range, maps each back to its
/// ASCII source character, and concatenates them in input order. The cancel
/// tag is ignored. Returns an empty string when the input carries no tag
/// characters at all.
pub fn decode(input: &str) -> String {
    analyze_codepoints(input)
        .into_iter()
        .filter(|entry| entry.category == Category::Tag)
        .map(|entry| entry.display)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode;

    #[test]
    fn test_decode_roundtrip() {
        let encoded = encode("👻", "hi").unwrap();
        assert_eq!(decode(&encoded), "hi");
    }

    #[test]
    fn test_no_payload_returns_empty() {
        assert_eq!(decode("👻"), "");
        assert_eq!(decode("just plain text"), "");
        assert_eq!(decode(""), "");
    }

    #[test]
    fn test_cancel_tag_alone_is_ignored() {
        assert_eq!(decode("👻\u{E007F}"), "");
    }

    #[test]
    fn test_missing_terminator() {
        // Transport stripped the cancel tag but kept the payload
        assert_eq!(decode("👻\u{E0068}\u{E0069}"), "hi");
    }

    #[test]
    fn test_interleaved_visible_characters() {
        let input = "a\u{E0068}b\u{E0069}c";
        assert_eq!(decode(input), "hi");
    }

    #[test]
    fn test_multiple_payload_runs_concatenate() {
        let first = encode("👻", "one").unwrap();
        let second = encode("🔥", "two").unwrap();
        assert_eq!(decode(&format!("{first}{second}")), "onetwo");
    }

    #[test]
    fn test_multiple_terminators() {
        let input = "👻\u{E0068}\u{E007F}\u{E007F}\u{E0069}\u{E007F}";
        assert_eq!(decode(input), "hi");
    }

    #[test]
    fn test_out_of_range_tag_plane_ignored() {
        // U+E0000 and U+E0080 sit outside the encodable range
        assert_eq!(decode("\u{E0000}\u{E0080}\u{E0100}"), "");
    }
}

//! # Ghostink - Hide text inside an emoji
//!
//! Ghostink hides a short text message inside a single emoji by appending
//! invisible Unicode *tag characters* (U+E0001..U+E007E), and recovers it
//! later by scanning a string for those characters.
//!
//! ## Overview
//!
//! - The secret is **normalized** to printable ASCII (accents stripped,
//!   smart quotes and dashes transliterated) so every character fits the
//!   one-byte tag range
//! - Each normalized character `c` is shifted into the tag block as
//!   `c + 0xE0000`, which renders as nothing on platforms that honor the block
//! - A single **cancel tag** (U+E007F) terminates the payload
//! - Decoding is a pure filter: every tag character found anywhere in the
//!   input is mapped back, so truncated or mangled payloads still yield
//!   whatever survived
//!
//! The encoded string renders identically to the bare emoji; only the code
//! points reveal the difference. Some transports strip the tag block
//! entirely - that is outside this crate's control.
//!
//! ## Example Usage
//!
//! ```rust
//! use ghostink::{encode, decode};
//!
//! let hidden = encode("👻", "the wifi password is hunter2").unwrap();
//!
//! // Renders exactly like "👻", but carries the message
//! assert!(hidden.starts_with("👻"));
//! assert_eq!(decode(&hidden), "the wifi password is hunter2");
//!
//! // Decoding never fails - no payload just means an empty result
//! assert_eq!(decode("👻"), "");
//! ```
//!
//! ## Modules
//!
//! - [`normalize`]: Lossy transliteration of arbitrary text into printable ASCII
//! - [`encoder`]: Attach a hidden payload to a visible emoji
//! - [`decoder`]: Extract any hidden payload (never fails)
//! - [`analyzer`]: Per-code-point classification for inspection views

/// Offset between an ASCII source character and its invisible tag character.
pub const TAG_OFFSET: u32 = 0xE0000;

/// First code point of the encodable tag range (tag for U+0001).
pub const TAG_MIN: u32 = 0xE0001;

/// Last code point of the encodable tag range (tag for U+007E).
pub const TAG_MAX: u32 = 0xE007E;

/// The cancel tag (U+E007F): invisible sentinel marking end-of-payload.
/// Never maps back to a source character.
pub const CANCEL_TAG: char = '\u{E007F}';

/// Placeholder glyph shown in place of the cancel tag in analysis views.
pub const CANCEL_PLACEHOLDER: char = '\u{26D4}';

pub mod analyzer;
pub mod decoder;
pub mod encoder;
pub mod normalize;

// Re-export commonly used items at the crate root
pub use analyzer::{analyze_codepoints, Category, ClassifiedCodepoint};
pub use decoder::decode;
pub use encoder::{encode, EncoderError};
pub use normalize::normalize;

//! Payload encoding: attach an invisible message to a visible emoji.
//!
//! The encoding process:
//! 1. Normalize the secret into printable ASCII
//! 2. Shift each character into the tag block (`c + 0xE0000`)
//! 3. Append the tag characters to the emoji, in order
//! 4. Terminate with the single cancel tag (U+E007F)
//!
//! The result renders exactly like the bare emoji on any platform that does
//! not strip the tag-character block.

use thiserror::Error;

use crate::normalize::normalize;
use crate::{CANCEL_TAG, TAG_OFFSET};

/// Errors that can occur during encoding. All are invalid-input conditions;
/// encoding itself cannot fail once the inputs are accepted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncoderError {
    #[error("Empty emoji")]
    EmptyEmoji,

    #[error("Empty secret message")]
    EmptySecret,

    #[error("Secret message has no encodable characters after normalization")]
    NothingEncodable,
}

/// Hides `secret` inside `emoji`.
///
/// The secret is normalized first, so what decodes later is
/// `normalize(secret)`, not necessarily the original text. A secret that
/// normalizes to nothing (for example, emoji-only input) is rejected rather
/// than producing a payload that is just a terminator.
///
/// Output length in code points is always
/// `emoji code points + normalized secret length + 1`.
pub fn encode(emoji: &str, secret: &str) -> Result<String, EncoderError> {
    if emoji.is_empty() {
        return Err(EncoderError::EmptyEmoji);
    }
    if secret.is_empty() {
        return Err(EncoderError::EmptySecret);
    }

    let clean = normalize(secret);
    if clean.is_empty() {
        return Err(EncoderError::NothingEncodable);
    }

    // Tag characters are 4 bytes each in UTF-8
    let mut output = String::with_capacity(emoji.len() + (clean.len() + 1) * 4);
    output.push_str(emoji);
    for c in clean.chars() {
        output.push(tag_char(c));
    }
    output.push(CANCEL_TAG);

    Ok(output)
}

/// Maps a normalized source character into the invisible tag block.
fn tag_char(c: char) -> char {
    // normalize() only emits 0x01..=0x7E, so the shifted value is always
    // inside U+E0001..=U+E007E and a valid scalar
    char::from_u32(TAG_OFFSET + c as u32).expect("shifted ASCII lands in the tag block")
}

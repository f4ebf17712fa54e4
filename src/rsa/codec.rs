// Message Codec
// Maps text to per-character code point blocks and back

use num_traits::ToPrimitive;
use thiserror::Error;

use super::bigint::RsaBigInt;

/// One non-negative integer per character, order and length preserving
pub type MessageBlocks = Vec<RsaBigInt>;

#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    #[error("block {value} is not a valid character code point")]
    InvalidCodePoint { value: RsaBigInt },
}

/// Map each character to its Unicode code point. Total: every well-formed
/// string encodes. One block per character — no multi-byte packing.
pub fn encode_message(text: &str) -> MessageBlocks {
    text.chars().map(|c| RsaBigInt::from(c as u32)).collect()
}

/// Inverse mapping, code point back to character. A block that is not a
/// valid scalar value (typically the residue of decrypting with a
/// mismatched key) fails with InvalidCodePoint.
pub fn decode_message(blocks: &[RsaBigInt]) -> Result<String, DecodeError> {
    blocks
        .iter()
        .map(|b| {
            b.to_u32()
                .and_then(char::from_u32)
                .ok_or_else(|| DecodeError::InvalidCodePoint { value: b.clone() })
        })
        .collect()
}

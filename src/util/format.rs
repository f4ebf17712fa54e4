// Display Formatting
// Renders block vectors for the console shell

use crate::rsa::bigint::RsaBigInt;

/// Hex view of encoded blocks, one 0x-prefixed value per character,
/// e.g. "0x48 0x69" for "Hi". Shown before encryption so the numeric
/// representation of the message is visible.
pub fn format_blocks_hex(blocks: &[RsaBigInt]) -> String {
    blocks
        .iter()
        .map(|b| format!("0x{}", hex::encode_upper(b.to_bytes_be())))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decimal view of a block vector, e.g. "[812, 4506, 65]"
pub fn format_blocks_dec(blocks: &[RsaBigInt]) -> String {
    let inner = blocks
        .iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::encode_message;

    #[test]
    fn test_format_blocks_hex() {
        assert_eq!(format_blocks_hex(&encode_message("A")), "0x41");
        assert_eq!(format_blocks_hex(&encode_message("Hi")), "0x48 0x69");
        assert_eq!(format_blocks_hex(&[]), "");
    }

    #[test]
    fn test_format_blocks_dec() {
        assert_eq!(format_blocks_dec(&encode_message("AB")), "[65, 66]");
        assert_eq!(format_blocks_dec(&[]), "[]");
    }
}

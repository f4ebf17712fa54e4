// RSA Decryption
// Per-block modular exponentiation under the private key

use super::bigint::mod_pow;
use super::codec::MessageBlocks;
use super::encrypt::CipherBlocks;
use super::keygen::RsaPrivateKey;

/// Decrypt each block as m = c^d mod n.
///
/// Total: nothing ties the ciphertext to this key, so decrypting with a
/// mismatched private key silently yields well-formed garbage rather than an
/// error. Textbook RSA carries no integrity mechanism, and this tool keeps
/// that limitation visible; the failure surfaces later, if at all, when the
/// codec cannot render a block as a character.
pub fn decrypt_blocks(cipher: &CipherBlocks, private_key: &RsaPrivateKey) -> MessageBlocks {
    cipher
        .blocks
        .iter()
        .map(|c| mod_pow(c, &private_key.d, &private_key.n))
        .collect()
}

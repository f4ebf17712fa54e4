// RSA Encryption
// Per-block modular exponentiation under the public key

use thiserror::Error;

use super::bigint::{mod_pow, RsaBigInt};
use super::keygen::RsaPublicKey;

#[derive(Debug, Error, PartialEq)]
pub enum EncryptError {
    #[error("plaintext block {block} does not fit under modulus {modulus}")]
    BlockExceedsModulus { block: RsaBigInt, modulus: RsaBigInt },
}

/// Ciphertext blocks plus the public key that produced them, so a session
/// can tell when a buffer has gone stale after key regeneration.
#[derive(Debug, Clone, PartialEq)]
pub struct CipherBlocks {
    pub blocks: Vec<RsaBigInt>,
    pub public_key: RsaPublicKey,
}

/// Encrypt each block as c = m^e mod n.
///
/// Every block is validated against the modulus before any arithmetic runs:
/// a block >= n fails the whole batch with no partial ciphertext, since a
/// truncated ciphertext could never decrypt back to the original text.
pub fn encrypt_blocks(
    blocks: &[RsaBigInt],
    public_key: &RsaPublicKey,
) -> Result<CipherBlocks, EncryptError> {
    if let Some(oversized) = blocks.iter().find(|m| **m >= public_key.n) {
        return Err(EncryptError::BlockExceedsModulus {
            block: oversized.clone(),
            modulus: public_key.n.clone(),
        });
    }

    let blocks = blocks
        .iter()
        .map(|m| mod_pow(m, &public_key.e, &public_key.n))
        .collect();

    Ok(CipherBlocks {
        blocks,
        public_key: public_key.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::bigint::from_u64;
    use super::super::codec::encode_message;

    // Worked example key: p = 73, q = 79
    fn example_public_key() -> RsaPublicKey {
        RsaPublicKey {
            e: from_u64(17),
            n: from_u64(5767),
        }
    }

    #[test]
    fn test_encrypt_worked_example() {
        // 'A' = 65, and 65^17 mod 5767 = 812
        let cipher = encrypt_blocks(&encode_message("A"), &example_public_key()).unwrap();
        assert_eq!(cipher.blocks, vec![from_u64(812)]);
    }

    #[test]
    fn test_encrypt_boundary_blocks() {
        // 0 and n-1 are the modular exponentiation edge cases; n-1 = -1 mod n
        // is a fixed point for odd e
        let cipher =
            encrypt_blocks(&[from_u64(0), from_u64(5766)], &example_public_key()).unwrap();
        assert_eq!(cipher.blocks, vec![from_u64(0), from_u64(5766)]);
    }

    #[test]
    fn test_encrypt_preserves_length_and_order() {
        let blocks = encode_message("Hello, RSA!");
        let cipher = encrypt_blocks(&blocks, &example_public_key()).unwrap();
        assert_eq!(cipher.blocks.len(), blocks.len());
        // Identical plaintext blocks map to identical cipher blocks ('l' twice)
        assert_eq!(cipher.blocks[2], cipher.blocks[3]);
    }

    #[test]
    fn test_encrypt_records_key() {
        let key = example_public_key();
        let cipher = encrypt_blocks(&encode_message("x"), &key).unwrap();
        assert_eq!(cipher.public_key, key);
    }

    #[test]
    fn test_block_exceeding_modulus_fails_whole_batch() {
        // Second block equals n: all-or-nothing, no partial output
        let blocks = vec![from_u64(65), from_u64(5767), from_u64(66)];
        let err = encrypt_blocks(&blocks, &example_public_key()).unwrap_err();
        assert_eq!(
            err,
            EncryptError::BlockExceedsModulus {
                block: from_u64(5767),
                modulus: from_u64(5767),
            }
        );
    }

    #[test]
    fn test_block_above_modulus_fails() {
        let err = encrypt_blocks(&[from_u64(6000)], &example_public_key()).unwrap_err();
        assert!(matches!(err, EncryptError::BlockExceedsModulus { .. }));
    }
}

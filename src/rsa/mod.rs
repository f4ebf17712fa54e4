// RSA Module - Main module file
// Exports all RSA-related functionality

pub mod bigint;
pub mod codec;
pub mod decrypt;
pub mod encrypt;
pub mod keygen;
pub mod primes;

pub use codec::{decode_message, encode_message, DecodeError, MessageBlocks};
pub use decrypt::decrypt_blocks;
pub use encrypt::{encrypt_blocks, CipherBlocks, EncryptError};
pub use keygen::{
    generate_keypair, KeyGenConfig, KeyGenError, RsaKeyPair, RsaPrivateKey, RsaPublicKey,
};
pub use primes::{sieve_primes, usable_primes};

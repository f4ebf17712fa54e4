// RSA Key Generation
// Sieve-backed key pair derivation: modulus, totient, exponent search, inverse

use num_traits::One;
use rand::Rng;
use thiserror::Error;

use super::bigint::{from_u64, gcd, mod_inverse, to_u64, RsaBigInt};
use super::primes::{sieve_primes, usable_primes};

/// Errors fatal to a single key-generation attempt. The caller decides
/// whether to retry (which redraws primes) or adjust the configuration.
#[derive(Debug, Error, PartialEq)]
pub enum KeyGenError {
    #[error("only {found} usable prime(s) above {floor}; need at least 2 to pick distinct p and q")]
    InsufficientCandidates { found: usize, floor: u64 },

    #[error("no public exponent coprime to the totient was found")]
    NoExponentFound,

    #[error("public exponent has no inverse modulo the totient")]
    NoInverseExists,
}

/// Tuning knobs for key generation
#[derive(Clone, Debug)]
pub struct KeyGenConfig {
    /// Upper bound of the prime sieve; raising it raises the key size
    pub sieve_ceiling: u64,
    /// Primes at or below this value are discarded as trivially small
    pub prime_floor: u64,
    /// Upper bound of the public exponent scan
    pub exponent_search_cap: u64,
    /// Stop the scan once more than this many exponent candidates are held
    pub exponent_candidate_cutoff: usize,
}

impl Default for KeyGenConfig {
    fn default() -> Self {
        Self {
            sieve_ceiling: 1000,
            prime_floor: 70,
            exponent_search_cap: 10_000,
            exponent_candidate_cutoff: 50,
        }
    }
}

impl KeyGenConfig {
    pub fn with_sieve_ceiling(mut self, ceiling: u64) -> Self {
        self.sieve_ceiling = ceiling;
        self
    }

    pub fn with_prime_floor(mut self, floor: u64) -> Self {
        self.prime_floor = floor;
        self
    }
}

/// RSA Public Key
#[derive(Debug, Clone, PartialEq)]
pub struct RsaPublicKey {
    pub e: RsaBigInt, // Public exponent
    pub n: RsaBigInt, // Modulus
}

/// RSA Private Key
#[derive(Debug, Clone, PartialEq)]
pub struct RsaPrivateKey {
    pub d: RsaBigInt, // Private exponent
    pub n: RsaBigInt, // Modulus (same as public)
}

/// RSA Key Pair (both halves share the modulus). The prime factors are kept
/// for display and invariant checking; this is a teaching tool, not a vault.
#[derive(Debug, Clone)]
pub struct RsaKeyPair {
    pub public_key: RsaPublicKey,
    pub private_key: RsaPrivateKey,
    pub p: u64,
    pub q: u64,
}

impl RsaKeyPair {
    /// phi(n) = (p-1)(q-1)
    pub fn totient(&self) -> RsaBigInt {
        from_u64(self.p - 1) * from_u64(self.q - 1)
    }
}

/// Generate an RSA key pair from the configured prime pool.
///
/// The pool is regenerated fresh on every call. Randomness comes from the
/// caller, so tests can pass a seeded generator; the only requirement is
/// uniformity over the candidate sets.
pub fn generate_keypair<R: Rng + ?Sized>(
    config: &KeyGenConfig,
    rng: &mut R,
) -> Result<RsaKeyPair, KeyGenError> {
    // Step 1: sieve and filter the prime candidate pool
    let pool = usable_primes(&sieve_primes(config.sieve_ceiling), config.prime_floor)?;

    // Step 2: distinct p and q by rejection sampling. Pool size >= 2
    // guarantees termination, so no retry cap is needed.
    let p = pool[rng.gen_range(0..pool.len())];
    let mut q = pool[rng.gen_range(0..pool.len())];
    while q == p {
        q = pool[rng.gen_range(0..pool.len())];
    }

    // Step 3: modulus and totient
    let n = from_u64(p) * from_u64(q);
    let phi = from_u64(p - 1) * from_u64(q - 1);

    // Step 4: scan odd x upward for candidates coprime to phi. Sequential
    // order matters: the early stop must be reproducible under a seeded RNG.
    let scan_end =
        to_u64(&phi).map_or(config.exponent_search_cap, |v| v.min(config.exponent_search_cap));
    let mut candidates = Vec::new();
    let mut x = 3u64;
    while x < scan_end {
        if gcd(&from_u64(x), &phi).is_one() {
            candidates.push(x);
            if candidates.len() > config.exponent_candidate_cutoff {
                break;
            }
        }
        x += 2;
    }
    if candidates.is_empty() {
        return Err(KeyGenError::NoExponentFound);
    }

    // Random choice so repeated generations with the same primes can still
    // yield different keys
    let e = from_u64(candidates[rng.gen_range(0..candidates.len())]);

    // Step 5: private exponent via the extended Euclidean algorithm. Step 4
    // already filtered for coprimality, but the check stays explicit rather
    // than trusting an unwrap.
    let d = mod_inverse(&e, &phi).ok_or(KeyGenError::NoInverseExists)?;

    Ok(RsaKeyPair {
        public_key: RsaPublicKey { e, n: n.clone() },
        private_key: RsaPrivateKey { d, n },
        p,
        q,
    })
}

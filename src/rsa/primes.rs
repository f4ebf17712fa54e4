// Prime Candidate Generation
// Sieve of Eratosthenes bounded by a configured ceiling, filtered by a floor

use super::keygen::KeyGenError;

/// All primes in [2, ceiling] in ascending order, via the sieve of
/// Eratosthenes: mark multiples of each prime starting at its square,
/// collect the indices left standing. Ceilings below 2 yield an empty list.
pub fn sieve_primes(ceiling: u64) -> Vec<u64> {
    if ceiling < 2 {
        return Vec::new();
    }

    let ceiling = ceiling as usize;
    let mut is_prime = vec![true; ceiling + 1];
    is_prime[0] = false;
    is_prime[1] = false;

    let mut i = 2usize;
    while i * i <= ceiling {
        if is_prime[i] {
            let mut multiple = i * i;
            while multiple <= ceiling {
                is_prime[multiple] = false;
                multiple += i;
            }
        }
        i += 1;
    }

    is_prime
        .iter()
        .enumerate()
        .filter(|(_, &p)| p)
        .map(|(n, _)| n as u64)
        .collect()
}

/// Filter the sieve output down to primes strictly above the floor.
/// Fewer than 2 survivors means distinct p and q cannot be drawn, which is
/// fatal to the key-generation attempt.
pub fn usable_primes(all: &[u64], floor: u64) -> Result<Vec<u64>, KeyGenError> {
    let usable: Vec<u64> = all.iter().copied().filter(|&p| p > floor).collect();

    if usable.len() < 2 {
        return Err(KeyGenError::InsufficientCandidates {
            found: usable.len(),
            floor,
        });
    }

    Ok(usable)
}

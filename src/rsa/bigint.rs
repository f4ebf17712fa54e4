// RSA Big Integer Operations
// Modular arithmetic helpers around num-bigint

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Modular exponentiation: base^exp mod modulus
/// Uses square-and-multiply; every product is reduced mod the modulus
/// so intermediate values stay below modulus^2
pub fn mod_pow(base: &RsaBigInt, exp: &RsaBigInt, modulus: &RsaBigInt) -> RsaBigInt {
    if modulus.is_one() {
        return RsaBigInt::zero();
    }

    let mut result = RsaBigInt::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }

    result
}

/// Extended Euclidean Algorithm
/// Returns (gcd, x, y) such that a*x + b*y = gcd = gcd(a, b)
/// Runs over signed integers since x and y can be negative
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if b.is_zero() {
        return (a.clone(), BigInt::one(), BigInt::zero());
    }

    let (gcd, x1, y1) = extended_gcd(b, &(a % b));
    let x = y1.clone();
    let y = x1 - (a / b) * &y1;

    (gcd, x, y)
}

/// Compute modular inverse: a^(-1) mod m
/// Returns None if gcd(a, m) != 1, otherwise the inverse normalized into [0, m)
pub fn mod_inverse(a: &RsaBigInt, m: &RsaBigInt) -> Option<RsaBigInt> {
    let a_signed = BigInt::from(a.clone());
    let m_signed = BigInt::from(m.clone());
    let (gcd, x, _) = extended_gcd(&a_signed, &m_signed);

    if !gcd.is_one() {
        // Inverse doesn't exist
        return None;
    }

    let mut result = x % &m_signed;
    if result.is_negative() {
        result += &m_signed;
    }

    result.to_biguint()
}

/// Greatest common divisor
pub fn gcd(a: &RsaBigInt, b: &RsaBigInt) -> RsaBigInt {
    a.gcd(b)
}

/// Lossy conversion to u64 for loop bounds; None if the value doesn't fit
pub fn to_u64(n: &RsaBigInt) -> Option<u64> {
    n.to_u64()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mod_pow() {
        // 3^5 mod 7 = 243 mod 7 = 5
        let result = mod_pow(&from_u64(3), &from_u64(5), &from_u64(7));
        assert_eq!(result, from_u64(5));

        // 65^17 mod 5767 = 812 (the worked example key n = 73 * 79)
        let result = mod_pow(&from_u64(65), &from_u64(17), &from_u64(5767));
        assert_eq!(result, from_u64(812));
    }

    #[test]
    fn test_mod_pow_edges() {
        // 0 and modulus-1 are the boundary inputs for repeated squaring
        let n = from_u64(5767);
        assert_eq!(mod_pow(&from_u64(0), &from_u64(17), &n), from_u64(0));
        // (n-1)^e mod n = n-1 for odd e, since n-1 = -1 mod n
        assert_eq!(mod_pow(&from_u64(5766), &from_u64(17), &n), from_u64(5766));
        // Modulus 1 collapses everything to 0
        assert_eq!(mod_pow(&from_u64(42), &from_u64(9), &from_u64(1)), from_u64(0));
    }

    #[test]
    fn test_extended_gcd() {
        let a = BigInt::from(240);
        let b = BigInt::from(46);
        let (g, x, y) = extended_gcd(&a, &b);
        assert_eq!(g, BigInt::from(2));
        assert_eq!(&a * &x + &b * &y, g);
    }

    #[test]
    fn test_mod_inverse() {
        // 3 * 5 = 15 ≡ 1 mod 7, so inverse of 3 mod 7 is 5
        let inv = mod_inverse(&from_u64(3), &from_u64(7)).unwrap();
        assert_eq!(inv, from_u64(5));

        // 17^(-1) mod 5616 = 4625, and 17 * 4625 mod 5616 = 1
        let inv = mod_inverse(&from_u64(17), &from_u64(5616)).unwrap();
        assert_eq!(inv, from_u64(4625));
        assert_eq!((from_u64(17) * inv) % from_u64(5616), from_u64(1));
    }

    #[test]
    fn test_mod_inverse_nonexistent() {
        // gcd(4, 8) = 4, no inverse
        assert!(mod_inverse(&from_u64(4), &from_u64(8)).is_none());
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(&from_u64(17), &from_u64(5616)), from_u64(1));
        assert_eq!(gcd(&from_u64(12), &from_u64(18)), from_u64(6));
    }
}

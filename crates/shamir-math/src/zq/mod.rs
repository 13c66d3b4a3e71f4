//! Ring operations for moduli less than 2^63.
//!
//! The prime must leave room for one doubling in 64 bits so that the sum of
//! two reduced values never overflows. Products are computed through a 128-bit
//! intermediate and reduced immediately.

use crate::{Error, Result};
use itertools::Itertools;
use rand::{distributions::Uniform, CryptoRng, Rng, RngCore};
use shamir_util::is_prime;

/// Largest admissible modulus (exclusive).
pub const MAX_MODULUS: u64 = 1 << 63;

/// Structure encapsulating an integer modulus up to 63 bits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Modulus {
    p: u64,
}

impl Modulus {
    /// Create a modulus from a prime number below 2^63.
    pub fn new(p: u64) -> Result<Self> {
        if p < 2 || p >= MAX_MODULUS || !is_prime(p) {
            Err(Error::InvalidModulus(p))
        } else {
            Ok(Self { p })
        }
    }

    /// Returns the value of the modulus.
    pub const fn modulus(&self) -> u64 {
        self.p
    }

    /// Reduce `a` modulo p.
    pub const fn reduce(&self, a: u64) -> u64 {
        a % self.p
    }

    /// Modular addition of a and b.
    ///
    /// Aborts if a >= p or b >= p in debug mode.
    pub const fn add(&self, a: u64, b: u64) -> u64 {
        debug_assert!(a < self.p && b < self.p);
        let c = a + b;
        if c >= self.p {
            c - self.p
        } else {
            c
        }
    }

    /// Modular subtraction of a and b.
    ///
    /// Both operands must already be reduced: `a + p` is only guaranteed to
    /// fit in 64 bits when `a < p`. Aborts if a >= p or b >= p in debug mode.
    pub const fn sub(&self, a: u64, b: u64) -> u64 {
        debug_assert!(a < self.p && b < self.p);
        if a >= b {
            a - b
        } else {
            a + self.p - b
        }
    }

    /// Modular negation of a.
    ///
    /// Aborts if a >= p in debug mode.
    pub const fn neg(&self, a: u64) -> u64 {
        debug_assert!(a < self.p);
        if a == 0 {
            0
        } else {
            self.p - a
        }
    }

    /// Modular multiplication of a and b.
    ///
    /// The operands need not be reduced.
    pub const fn mul(&self, a: u64, b: u64) -> u64 {
        ((a as u128 * b as u128) % (self.p as u128)) as u64
    }

    /// Modular exponentiation `a^n mod p`, with `a^0 = 1` for every `a`.
    pub fn pow(&self, a: u64, n: u64) -> u64 {
        let mut base = self.reduce(a);
        let mut n = n;
        let mut r = 1;
        while n > 0 {
            if n & 1 == 1 {
                r = self.mul(r, base);
            }
            base = self.mul(base, base);
            n >>= 1;
        }
        r
    }

    /// Modular inverse of `a`, in `[1, p-1]`.
    ///
    /// Returns `None` when `a ≡ 0 mod p`, the only non-invertible residue of a
    /// prime field.
    pub fn inv(&self, a: u64) -> Option<u64> {
        let a = self.reduce(a);
        if a == 0 {
            return None;
        }

        let (mut r0, mut r1) = (self.p as i128, a as i128);
        let (mut t0, mut t1) = (0i128, 1i128);
        while r1 != 0 {
            let q = r0 / r1;
            (r0, r1) = (r1, r0 - q * r1);
            (t0, t1) = (t1, t0 - q * t1);
        }
        if r0 != 1 {
            return None;
        }
        Some(t0.rem_euclid(self.p as i128) as u64)
    }

    /// Modular inverse of `a`, as an error when `a ≡ 0 mod p`.
    pub fn try_inv(&self, a: u64) -> Result<u64> {
        self.inv(a).ok_or(Error::NotInvertible(a, self.p))
    }

    /// Reduce a vector in place.
    pub fn reduce_vec(&self, a: &mut [u64]) {
        a.iter_mut().for_each(|ai| *ai = self.reduce(*ai));
    }

    /// Modular addition of vectors in place.
    ///
    /// Aborts if a and b differ in size, and if any of their values is >= p in
    /// debug mode.
    pub fn add_vec(&self, a: &mut [u64], b: &[u64]) {
        debug_assert_eq!(a.len(), b.len());
        a.iter_mut()
            .zip(b.iter())
            .for_each(|(ai, bi)| *ai = self.add(*ai, *bi));
    }

    /// Modular scalar multiplication of a vector in place.
    pub fn scalar_mul_vec(&self, a: &mut [u64], b: u64) {
        a.iter_mut().for_each(|ai| *ai = self.mul(*ai, b));
    }

    /// Sample a vector of `size` values uniformly in `[0, p)`.
    pub fn random_vec<R: RngCore + CryptoRng>(&self, size: usize, rng: &mut R) -> Vec<u64> {
        let distribution = Uniform::from(0..self.p);
        rng.sample_iter(distribution).take(size).collect_vec()
    }
}

/// Computes `base^exponent mod p` by square-and-multiply, for any `p > 0`.
///
/// `p` need not be prime. Returns an error if `p` is zero.
pub fn mod_pow(base: u64, exponent: u64, p: u64) -> Result<u64> {
    if p == 0 {
        return Err(Error::InvalidModulus(p));
    }
    let mut result = 1 % p;
    let mut base = base % p;
    let mut exponent = exponent;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = mod_mul(result, base, p);
        }
        base = mod_mul(base, base, p);
        exponent >>= 1;
    }
    Ok(result)
}

/// Computes `a * b mod p` without overflow, for any `p > 0`.
pub const fn mod_mul(a: u64, b: u64, p: u64) -> u64 {
    ((a as u128 * b as u128) % (p as u128)) as u64
}

/// Computes `(a - b) mod p` for `a < p` and `b < p`.
///
/// The operands are expected reduced; this is checked in debug mode only.
pub const fn mod_sub(a: u64, b: u64, p: u64) -> u64 {
    debug_assert!(a < p && b < p);
    if a >= b {
        a - b
    } else {
        a + p - b
    }
}

/// Computes the inverse of `x` modulo the prime `p`.
///
/// Returns `None` if `p` is not an admissible prime or `x ≡ 0 mod p`.
pub fn mod_inverse(x: u64, p: u64) -> Option<u64> {
    Modulus::new(p).ok()?.inv(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use num_traits::ToPrimitive;
    use proptest::collection::vec as prop_vec;
    use proptest::prelude::*;
    use rand::{thread_rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    // Admissible primes, from tiny to the largest one below 2^63.
    const PRIMES: &[u64] = &[
        2,
        3,
        17,
        65537,
        0x40002001,
        0xfffffffffffc001,
        2305843009213693951,
        4611686018427387761,
        9223372036854775783,
    ];

    fn big_mul(a: u64, b: u64, p: u64) -> u64 {
        ((BigUint::from(a) * BigUint::from(b)) % BigUint::from(p))
            .to_u64()
            .unwrap()
    }

    fn prime() -> impl Strategy<Value = u64> {
        proptest::sample::select(PRIMES)
    }

    #[test]
    fn constructor() {
        for p in PRIMES {
            assert!(Modulus::new(*p).is_ok());
        }
        assert_eq!(Modulus::new(0), Err(Error::InvalidModulus(0)));
        assert_eq!(Modulus::new(1), Err(Error::InvalidModulus(1)));
        assert_eq!(Modulus::new(4), Err(Error::InvalidModulus(4)));
        // Prime, but no room for one doubling.
        assert_eq!(
            Modulus::new(18446744073709551557),
            Err(Error::InvalidModulus(18446744073709551557))
        );
    }

    #[test]
    fn pow_edge_cases() {
        let q = Modulus::new(0xfffffffffffc001).unwrap();
        assert_eq!(q.pow(0, 0), 1);
        assert_eq!(q.pow(12345, 0), 1);
        assert_eq!(q.pow(0, 5), 0);
        assert_eq!(q.pow(5, 1), 5);
        assert_eq!(q.pow(5, 2), 25);
        // Fermat's little theorem.
        assert_eq!(q.pow(5, 0xfffffffffffc001 - 1), 1);

        let q = Modulus::new(2).unwrap();
        assert_eq!(q.pow(3, 7), 1);
        assert_eq!(q.pow(2, 7), 0);
    }

    #[test]
    fn inverse_edge_cases() {
        let q = Modulus::new(0xfffffffffffc001).unwrap();
        assert_eq!(q.inv(0), None);
        assert_eq!(q.inv(0xfffffffffffc001), None);
        assert_eq!(q.inv(1), Some(1));
        assert_eq!(q.inv(0xfffffffffffc001 - 1), Some(0xfffffffffffc001 - 1));
        assert_eq!(
            q.try_inv(0),
            Err(Error::NotInvertible(0, 0xfffffffffffc001))
        );

        assert_eq!(mod_inverse(3, 4), None);
        assert_eq!(mod_inverse(3, 7), Some(5));
    }

    #[test]
    fn sub_wraps() {
        let p = 0xfffffffffffc001;
        assert_eq!(mod_sub(5, 11, p), p - 6);
        assert_eq!(mod_sub(11, 5, p), 6);
        assert_eq!(mod_sub(7, 7, p), 0);
        assert_eq!(mod_sub(0, p - 1, p), 1);
    }

    #[test]
    fn free_functions() {
        let p = 0xfffffffffffc001;
        assert_eq!(mod_pow(3, 4, p), Ok(81));
        // Composite and tiny moduli are fine.
        assert_eq!(mod_pow(3, 4, 10), Ok(1));
        assert_eq!(mod_pow(2, 10, 1000), Ok(24));
        assert_eq!(mod_pow(u64::MAX, 2, u64::MAX - 1), Ok(1));
        assert_eq!(mod_pow(5, 0, 1), Ok(0));
        assert_eq!(mod_pow(5, 0, 7), Ok(1));
        assert_eq!(mod_pow(3, 4, 0), Err(Error::InvalidModulus(0)));
        assert_eq!(mod_mul(p - 1, p - 1, p), 1);
    }

    #[test]
    fn random_vec() {
        let mut rng = thread_rng();
        for p in PRIMES {
            let q = Modulus::new(*p).unwrap();
            let v = q.random_vec(128, &mut rng);
            assert_eq!(v.len(), 128);
            assert!(v.iter().all(|vi| *vi < *p));
        }
    }

    #[test]
    fn vectors() {
        let q = Modulus::new(17).unwrap();
        let mut a = vec![20, 34, 16];
        q.reduce_vec(&mut a);
        assert_eq!(a, vec![3, 0, 16]);
        q.add_vec(&mut a, &[15, 1, 1]);
        assert_eq!(a, vec![1, 1, 0]);
        q.scalar_mul_vec(&mut a, 5);
        assert_eq!(a, vec![5, 5, 0]);
    }

    proptest! {
        #[test]
        fn mul_matches_bigint(p in prime(), a: u64, b: u64) {
            let q = Modulus::new(p).unwrap();
            let (a, b) = (q.reduce(a), q.reduce(b));
            prop_assert_eq!(q.mul(a, b), big_mul(a, b, p));
            prop_assert_eq!(mod_mul(a, b, p), big_mul(a, b, p));
        }

        #[test]
        fn mul_accepts_unreduced(p in prime(), a: u64, b: u64) {
            let q = Modulus::new(p).unwrap();
            prop_assert_eq!(q.mul(a, b), big_mul(a, b, p));
        }

        #[test]
        fn add_sub_neg(p in prime(), a: u64, b: u64) {
            let q = Modulus::new(p).unwrap();
            let (a, b) = (q.reduce(a), q.reduce(b));
            prop_assert_eq!(q.add(a, b), ((a as u128 + b as u128) % p as u128) as u64);
            prop_assert_eq!(q.sub(a, b), ((a as u128 + p as u128 - b as u128) % p as u128) as u64);
            prop_assert_eq!(q.add(q.sub(a, b), b), a);
            prop_assert_eq!(q.add(a, q.neg(a)), 0);
            prop_assert_eq!(mod_sub(a, b, p), q.sub(a, b));
        }

        #[test]
        fn pow_matches_bigint(p in prime(), a: u64, n in 0u64..10_000) {
            let q = Modulus::new(p).unwrap();
            let expected = BigUint::from(a).modpow(&BigUint::from(n), &BigUint::from(p));
            prop_assert_eq!(q.pow(a, n), expected.to_u64().unwrap());
        }

        #[test]
        fn mod_pow_any_modulus(p in 1u64.., a: u64, n: u64) {
            let expected = BigUint::from(a).modpow(&BigUint::from(n), &BigUint::from(p));
            prop_assert_eq!(mod_pow(a, n, p), Ok(expected.to_u64().unwrap()));
        }

        #[test]
        fn inverse_is_inverse(p in prime(), x: u64) {
            let q = Modulus::new(p).unwrap();
            let x = q.reduce(x);
            prop_assume!(x != 0);
            let y = q.inv(x).unwrap();
            prop_assert!(y >= 1 && y < p);
            prop_assert_eq!(q.mul(x, y), 1);
            prop_assert_eq!(mod_inverse(x, p), Some(y));
        }

        #[test]
        fn pow_is_repeated_mul(seed: u64, n in 0u64..64) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            for p in PRIMES {
                let q = Modulus::new(*p).unwrap();
                let a = q.random_vec(1, &mut rng)[0];
                let expected = (0..n).fold(1u64, |acc, _| q.mul(acc, a));
                prop_assert_eq!(q.pow(a, n), expected);
            }
        }

        #[test]
        fn scalar_mul_vec_matches_mul(p in prime(), a in prop_vec(any::<u64>(), 0..32), b: u64) {
            let q = Modulus::new(p).unwrap();
            let mut c = a.clone();
            q.scalar_mul_vec(&mut c, b);
            for (ci, ai) in c.iter().zip(a.iter()) {
                prop_assert_eq!(*ci, big_mul(*ai, b, p));
            }
        }
    }
}

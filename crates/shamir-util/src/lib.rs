#![crate_name = "shamir_util"]
#![crate_type = "lib"]
#![warn(missing_docs, unused_imports)]

//! Utilities for the shamir threshold sharing library.

use std::collections::HashSet;
use std::hash::Hash;

use num_bigint_dig::{prime::probably_prime, BigUint};
use num_traits::ToPrimitive;
use rand::{CryptoRng, Rng, RngCore};

/// Returns whether the modulus p is prime; this function is 100% accurate.
pub fn is_prime(p: u64) -> bool {
    probably_prime(&BigUint::from(p), 0)
}

/// Sample `n` pairwise-distinct values uniformly in `[1, p)`.
///
/// Returns `None` when there are fewer than `n` nonzero residues modulo `p`.
pub fn sample_distinct_nonzero<R: RngCore + CryptoRng>(
    n: usize,
    p: u64,
    rng: &mut R,
) -> Option<Vec<u64>> {
    let available = p.checked_sub(1)?;
    if (available.to_usize().unwrap_or(usize::MAX)) < n {
        return None;
    }

    let mut seen = HashSet::with_capacity(n);
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        let x = rng.gen_range(1..p);
        if seen.insert(x) {
            out.push(x);
        }
    }
    Some(out)
}

/// Returns the index of the first element that already appeared earlier in
/// `values`, if any.
pub fn find_duplicate<T: Eq + Hash>(values: &[T]) -> Option<usize> {
    let mut seen = HashSet::with_capacity(values.len());
    values.iter().position(|v| !seen.insert(v))
}

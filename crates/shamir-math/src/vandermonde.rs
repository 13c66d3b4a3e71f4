//! Vandermonde vectors and Lagrange weights at zero.
//!
//! A dealer evaluates its degree `k - 1` polynomial at a recipient's point by
//! weighting its `k` coefficients with the recipient's Vandermonde vector
//! `[x^0, x^1, ..., x^(k-1)]`. Conversely, the constant term of such a
//! polynomial is the weighted sum of any `k` of its evaluations, with weights
//! given by the first row of the inverse Vandermonde matrix of those points.

use crate::{zq::Modulus, Error, Result};
use itertools::izip;
use shamir_util::find_duplicate;
use std::iter::successors;

/// Returns the `k` first powers of `point` modulo p.
///
/// The output is `[1, point, point^2, ..., point^(k-1)]`; it is empty when
/// `k = 0`.
pub fn vandermonde(point: u64, k: usize, q: &Modulus) -> Vec<u64> {
    let x = q.reduce(point);
    successors(Some(1 % q.modulus()), |xi| Some(q.mul(*xi, x)))
        .take(k)
        .collect()
}

/// Lagrange weights recovering `f(0)` from `f(points[0]), ..., f(points[k-1])`.
///
/// The weight at index `i` is `Π_{m ≠ i} points[m] / (points[m] - points[i])`
/// and pairs with the evaluation at `points[i]`. The points are reduced
/// modulo p first. Errors if `points` is empty, contains zero, or contains two
/// points that coincide modulo p.
pub fn lagrange_weights(points: &[u64], q: &Modulus) -> Result<Vec<u64>> {
    if points.is_empty() {
        return Err(Error::EmptyInput);
    }

    let points = points.iter().map(|x| q.reduce(*x)).collect::<Vec<_>>();
    if let Some(i) = find_duplicate(&points) {
        return Err(Error::DuplicatePoint(points[i], i));
    }
    if points.contains(&0) {
        return Err(Error::NotInvertible(0, q.modulus()));
    }

    points
        .iter()
        .enumerate()
        .map(|(i, xi)| {
            points
                .iter()
                .enumerate()
                .filter(|(m, _)| *m != i)
                .try_fold(1u64, |acc, (_, xm)| -> Result<u64> {
                    let denominator = q.try_inv(q.sub(*xm, *xi))?;
                    Ok(q.mul(acc, q.mul(*xm, denominator)))
                })
        })
        .collect()
}

/// Evaluates `Σ coefficients[m] * point^m` modulo p.
pub fn evaluate(coefficients: &[u64], point: u64, q: &Modulus) -> u64 {
    let powers = vandermonde(point, coefficients.len(), q);
    izip!(coefficients, &powers).fold(0, |acc, (c, x)| q.add(acc, q.mul(*c, *x)))
}

/// Recovers `f(0)` from `k` evaluations `(point, f(point))`.
pub fn interpolate_at_zero(evaluations: &[(u64, u64)], q: &Modulus) -> Result<u64> {
    let points = evaluations.iter().map(|(x, _)| *x).collect::<Vec<_>>();
    let weights = lagrange_weights(&points, q)?;
    Ok(izip!(evaluations, &weights).fold(0, |acc, ((_, y), w)| q.add(acc, q.mul(*y, *w))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use shamir_util::sample_distinct_nonzero;

    const P: u64 = 0xfffffffffffc001;

    #[test]
    fn vandermonde_small_points() {
        let q = Modulus::new(P).unwrap();
        assert_eq!(vandermonde(5, 2, &q), vec![1, 5]);
        assert_eq!(vandermonde(11, 2, &q), vec![1, 11]);
        assert_eq!(vandermonde(3, 5, &q), vec![1, 3, 9, 27, 81]);
        assert_eq!(vandermonde(3, 0, &q), Vec::<u64>::new());
        assert_eq!(vandermonde(0, 3, &q), vec![1, 0, 0]);
    }

    #[test]
    fn vandermonde_matches_pow() {
        let q = Modulus::new(P).unwrap();
        let x = P - 12345;
        let v = vandermonde(x, 200, &q);
        for (i, vi) in v.iter().enumerate() {
            assert_eq!(*vi, q.pow(x, i as u64));
        }
    }

    #[test]
    fn two_point_reconstruction() {
        let q = Modulus::new(P).unwrap();
        // f(x) = 17 + 9x
        let f5 = evaluate(&[17, 9], 5, &q);
        let f11 = evaluate(&[17, 9], 11, &q);
        assert_eq!((f5, f11), (62, 116));

        let w = lagrange_weights(&[5, 11], &q).unwrap();
        // 11 / 6 and -5 / 6.
        assert_eq!(q.mul(w[0], 6), 11);
        assert_eq!(q.mul(w[1], 6), P - 5);
        assert_eq!(q.add(q.mul(w[0], f5), q.mul(w[1], f11)), 17);
        assert_eq!(interpolate_at_zero(&[(5, 62), (11, 116)], &q), Ok(17));
    }

    #[test]
    fn single_point_weight_is_one() {
        let q = Modulus::new(P).unwrap();
        assert_eq!(lagrange_weights(&[42], &q), Ok(vec![1]));
    }

    #[test]
    fn weights_sum_to_one() {
        // Interpolating the constant polynomial 1.
        let q = Modulus::new(P).unwrap();
        let w = lagrange_weights(&[3, 8, 1000, P - 1], &q).unwrap();
        assert_eq!(w.iter().fold(0, |acc, wi| q.add(acc, *wi)), 1);
    }

    #[test]
    fn rejects_bad_points() {
        let q = Modulus::new(P).unwrap();
        assert_eq!(lagrange_weights(&[], &q), Err(Error::EmptyInput));
        assert_eq!(
            lagrange_weights(&[5, 7, 5], &q),
            Err(Error::DuplicatePoint(5, 2))
        );
        // Equal modulo p.
        assert_eq!(
            lagrange_weights(&[5, P + 5], &q),
            Err(Error::DuplicatePoint(5, 1))
        );
        assert_eq!(
            lagrange_weights(&[5, 0], &q),
            Err(Error::NotInvertible(0, P))
        );
        assert_eq!(
            lagrange_weights(&[P, 3], &q),
            Err(Error::NotInvertible(0, P))
        );
    }

    proptest! {
        #[test]
        fn recovers_constant_term(seed: u64, k in 1usize..40) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let q = Modulus::new(P).unwrap();
            let coefficients = q.random_vec(k, &mut rng);
            let points = sample_distinct_nonzero(k, P, &mut rng).unwrap();

            let evaluations = points
                .iter()
                .map(|x| (*x, evaluate(&coefficients, *x, &q)))
                .collect::<Vec<_>>();
            prop_assert_eq!(interpolate_at_zero(&evaluations, &q), Ok(coefficients[0]));
        }

        #[test]
        fn recovers_constant_term_small_field(seed: u64, k in 1usize..16) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let q = Modulus::new(17).unwrap();
            let coefficients = q.random_vec(k, &mut rng);
            let points = sample_distinct_nonzero(k, 17, &mut rng).unwrap();

            let evaluations = points
                .iter()
                .map(|x| (*x, evaluate(&coefficients, *x, &q)))
                .collect::<Vec<_>>();
            prop_assert_eq!(interpolate_at_zero(&evaluations, &q), Ok(coefficients[0]));
        }
    }
}

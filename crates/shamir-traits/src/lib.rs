#![crate_name = "shamir_traits"]
#![crate_type = "lib"]
#![warn(missing_docs, unused_imports)]

//! Traits for the shamir threshold sharing library.
//!
//! The sharing core never looks inside the values it shares. Any additive
//! group whose elements can be scaled by a field scalar can be plugged in by
//! implementing [`SecretElement`].

use rand::{CryptoRng, RngCore};

/// An opaque element of an additive group supplied by an algebraic backend.
///
/// Implementations must satisfy the usual group laws: addition is commutative
/// and associative with [`SecretElement::zero`] as identity, and
/// [`SecretElement::mul_scalar`] distributes over addition. Scalars are field
/// elements already reduced modulo the backend's prime.
pub trait SecretElement: Sized + Clone + Send + Sync {
    /// Shared description of the group the elements live in.
    type Context: Send + Sync;

    /// The neutral element of the group described by `ctx`.
    fn zero(ctx: &Self::Context) -> Self;

    /// Sample a fresh element uniformly at random.
    ///
    /// Dealers mask their secret with such elements, so the distribution must
    /// be uniform over the whole group for shares to hide the secret.
    fn random<R: RngCore + CryptoRng>(ctx: &Self::Context, rng: &mut R) -> Self;

    /// Sample a fresh secret from the backend's secret distribution.
    ///
    /// Defaults to [`SecretElement::random`].
    fn random_secret<R: RngCore + CryptoRng>(ctx: &Self::Context, rng: &mut R) -> Self {
        Self::random(ctx, rng)
    }

    /// Returns the prime modulo which scalars act on the elements of `ctx`.
    fn modulus(ctx: &Self::Context) -> u64;

    /// Add `other` into `self`.
    fn add_assign(&mut self, other: &Self);

    /// Returns `scalar * self`.
    fn mul_scalar(&self, scalar: u64) -> Self;

    /// Returns the context of this element.
    fn context(&self) -> &Self::Context;
}

/// Sum a collection of secret elements, starting from the zero of `ctx`.
pub fn sum<'a, E, I>(ctx: &E::Context, elements: I) -> E
where
    E: SecretElement + 'a,
    I: IntoIterator<Item = &'a E>,
{
    elements.into_iter().fold(E::zero(ctx), |mut acc, e| {
        acc.add_assign(e);
        acc
    })
}

/// Weighted sum `Σ weights[i] * elements[i]`.
///
/// The two iterators are zipped, so the shorter one bounds the sum.
pub fn weighted_sum<'a, E, I, W>(ctx: &E::Context, elements: I, weights: W) -> E
where
    E: SecretElement + 'a,
    I: IntoIterator<Item = &'a E>,
    W: IntoIterator<Item = u64>,
{
    elements
        .into_iter()
        .zip(weights)
        .fold(E::zero(ctx), |mut acc, (e, w)| {
            acc.add_assign(&e.mul_scalar(w));
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::{sum, weighted_sum, SecretElement};
    use rand::{thread_rng, CryptoRng, Rng, RngCore};

    const P: u64 = 97;

    #[derive(Clone, Debug, PartialEq, Eq)]
    struct Toy(u64);

    impl SecretElement for Toy {
        type Context = ();

        fn zero(_: &()) -> Self {
            Toy(0)
        }

        fn random<R: RngCore + CryptoRng>(_: &(), rng: &mut R) -> Self {
            Toy(rng.gen_range(0..P))
        }

        fn add_assign(&mut self, other: &Self) {
            self.0 = (self.0 + other.0) % P
        }

        fn modulus(_: &()) -> u64 {
            P
        }

        fn mul_scalar(&self, scalar: u64) -> Self {
            Toy((self.0 * (scalar % P)) % P)
        }

        fn context(&self) -> &() {
            &()
        }
    }

    #[test]
    fn secrets_default_to_uniform() {
        let mut rng = thread_rng();
        let x = Toy::random_secret(&(), &mut rng);
        assert!(x.0 < P);
        assert_eq!(Toy::modulus(x.context()), P);
    }

    #[test]
    fn sum_of_nothing_is_zero() {
        let empty: Vec<Toy> = vec![];
        assert_eq!(sum(&(), &empty), Toy(0));
    }

    #[test]
    fn sums() {
        let v = vec![Toy(50), Toy(60), Toy(1)];
        assert_eq!(sum(&(), &v), Toy(14));
        assert_eq!(weighted_sum(&(), &v, [1, 2, 3]), Toy((50 + 120 + 3) % P));
        // Extra weights are ignored.
        assert_eq!(weighted_sum(&(), &v[..1], [2, 5]), Toy(3));
    }
}

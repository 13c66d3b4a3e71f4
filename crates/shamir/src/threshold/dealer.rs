//! Dealer polynomials and party records.

use crate::threshold::ThresholdParameters;
use crate::{Error, Result};
use rand::{CryptoRng, RngCore};
use shamir_math::{vandermonde::vandermonde, zq::Modulus};
use shamir_traits::{weighted_sum, SecretElement};

/// A dealer's secret polynomial of degree `k - 1`.
///
/// The coefficients are ordered from the lowest to the highest degree; the
/// constant term is the dealer's own secret. They never change once sampled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dealer<E: SecretElement> {
    coefficients: Box<[E]>,
}

impl<E: SecretElement> Dealer<E> {
    /// Creates a dealer from its `k` coefficients.
    ///
    /// The coefficients must be scaled modulo the prime of `params`.
    pub fn new(params: &ThresholdParameters, coefficients: Vec<E>) -> Result<Self> {
        if coefficients.len() != params.threshold() {
            return Err(Error::coefficient_count_mismatch(
                coefficients.len(),
                params.threshold(),
            ));
        }
        let dealer = Self {
            coefficients: coefficients.into_boxed_slice(),
        };
        dealer.check_modulus(params.modulus())?;
        Ok(dealer)
    }

    /// Sample a dealer polynomial: the constant term from the secret
    /// distribution, the `k - 1` masking coefficients uniformly.
    pub fn random<R: RngCore + CryptoRng>(
        params: &ThresholdParameters,
        ctx: &E::Context,
        rng: &mut R,
    ) -> Self {
        let secret = E::random_secret(ctx, rng);
        let coefficients = std::iter::once(secret)
            .chain((1..params.threshold()).map(|_| E::random(ctx, rng)))
            .collect::<Vec<_>>();
        Self {
            coefficients: coefficients.into_boxed_slice(),
        }
    }

    /// Returns the coefficients, lowest degree first.
    pub fn coefficients(&self) -> &[E] {
        &self.coefficients
    }

    /// Returns the dealer's own secret, the constant coefficient.
    pub fn secret(&self) -> &E {
        &self.coefficients[0]
    }

    /// Returns the context shared by the coefficients.
    pub fn context(&self) -> &E::Context {
        self.coefficients[0].context()
    }

    /// Check that every coefficient is scaled modulo the prime of `q`.
    pub(crate) fn check_modulus(&self, q: &Modulus) -> Result<()> {
        self.coefficients
            .iter()
            .try_for_each(|c| check_context::<E>(c.context(), q))
    }

    /// Evaluate the polynomial at a recipient's `point`, i.e. the weighted sum
    /// of the coefficients by the point's Vandermonde vector.
    pub fn contribution(&self, point: u64, q: &Modulus) -> E {
        let powers = vandermonde(point, self.coefficients.len(), q);
        weighted_sum(self.context(), self.coefficients.iter(), powers)
    }
}

/// Check that the elements of `ctx` are scaled modulo the prime of `q`.
pub(crate) fn check_context<E: SecretElement>(ctx: &E::Context, q: &Modulus) -> Result<()> {
    let found = E::modulus(ctx);
    if found != q.modulus() {
        return Err(Error::IncompatibleModulus(found, q.modulus()));
    }
    Ok(())
}

/// A party's state: its identifier, its evaluation point, and its dealer
/// polynomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Party<E: SecretElement> {
    /// Index of the party, in `[0, N)`.
    pub id: usize,
    /// Evaluation point at which the party's share is computed.
    pub evaluation_point: u64,
    /// The party's dealer polynomial.
    pub dealer: Dealer<E>,
}

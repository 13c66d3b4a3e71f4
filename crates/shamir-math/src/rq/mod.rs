//! Polynomials with coefficients modulo a prime p.
//!
//! A [`Poly`] is a vector of `degree` residues modulo p. It plays the role of
//! the secret element shared by the threshold scheme: polynomials form an
//! additive group and can be scaled coefficient-wise by a field scalar.

mod ops;

use crate::{zq::Modulus, Error, Result};
use rand::{distributions::Uniform, CryptoRng, Rng, RngCore};
use shamir_traits::SecretElement;
use std::sync::Arc;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Struct that holds the context associated with elements in rq.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    /// Modulus of the coefficients.
    pub q: Modulus,
    /// Number of coefficients of a polynomial.
    pub degree: usize,
}

impl Context {
    /// Creates a context from a prime modulus and a number of coefficients.
    ///
    /// Returns an error if the modulus is not an admissible prime or the
    /// degree is zero.
    pub fn new(modulus: u64, degree: usize) -> Result<Self> {
        if degree == 0 {
            return Err(Error::EmptyInput);
        }
        Ok(Self {
            q: Modulus::new(modulus)?,
            degree,
        })
    }

    /// Creates a context in an `Arc`.
    pub fn new_arc(modulus: u64, degree: usize) -> Result<Arc<Self>> {
        Self::new(modulus, degree).map(Arc::new)
    }

    /// Returns the modulus.
    pub fn modulus(&self) -> u64 {
        self.q.modulus()
    }
}

/// Struct that holds a polynomial for a specific context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poly {
    ctx: Arc<Context>,
    coefficients: Box<[u64]>,
}

impl Zeroize for Poly {
    fn zeroize(&mut self) {
        self.coefficients.zeroize();
    }
}

impl Drop for Poly {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for Poly {}

impl Poly {
    /// Creates a polynomial holding the constant 0.
    pub fn zero(ctx: &Arc<Context>) -> Self {
        Self {
            ctx: ctx.clone(),
            coefficients: vec![0u64; ctx.degree].into_boxed_slice(),
        }
    }

    /// Generate a random polynomial with coefficients uniform modulo p.
    pub fn random<R: RngCore + CryptoRng>(ctx: &Arc<Context>, rng: &mut R) -> Self {
        Self {
            ctx: ctx.clone(),
            coefficients: ctx.q.random_vec(ctx.degree, rng).into_boxed_slice(),
        }
    }

    /// Generate a random polynomial with ternary coefficients in {-1, 0, 1}.
    pub fn small<R: RngCore + CryptoRng>(ctx: &Arc<Context>, rng: &mut R) -> Self {
        let distribution = Uniform::from(0..3u64);
        let p = ctx.modulus();
        let coefficients = rng
            .sample_iter(distribution)
            .take(ctx.degree)
            .map(|t| match t {
                0 => p - 1,
                1 => 0,
                _ => 1 % p,
            })
            .collect::<Vec<_>>();
        Self {
            ctx: ctx.clone(),
            coefficients: coefficients.into_boxed_slice(),
        }
    }

    /// Creates a polynomial from its coefficients, reducing them modulo p.
    ///
    /// Missing high-order coefficients are set to zero; returns an error if
    /// more coefficients than the degree are provided.
    pub fn try_from_coefficients(ctx: &Arc<Context>, coefficients: &[u64]) -> Result<Self> {
        if coefficients.len() > ctx.degree {
            return Err(Error::InvalidLength(ctx.degree, coefficients.len()));
        }
        let mut poly = Self::zero(ctx);
        poly.coefficients[..coefficients.len()].copy_from_slice(coefficients);
        ctx.q.reduce_vec(&mut poly.coefficients);
        Ok(poly)
    }

    /// Returns the context of the polynomial.
    pub fn ctx(&self) -> &Arc<Context> {
        &self.ctx
    }

    /// Returns the coefficients of the polynomial.
    pub fn coefficients(&self) -> &[u64] {
        &self.coefficients
    }

    /// Returns `scalar * self`.
    pub fn mul_scalar(&self, scalar: u64) -> Self {
        let mut out = self.clone();
        out.ctx.q.scalar_mul_vec(&mut out.coefficients, scalar);
        out
    }
}

impl SecretElement for Poly {
    type Context = Arc<Context>;

    fn zero(ctx: &Arc<Context>) -> Self {
        Poly::zero(ctx)
    }

    fn random<R: RngCore + CryptoRng>(ctx: &Arc<Context>, rng: &mut R) -> Self {
        Poly::random(ctx, rng)
    }

    fn random_secret<R: RngCore + CryptoRng>(ctx: &Arc<Context>, rng: &mut R) -> Self {
        Poly::small(ctx, rng)
    }

    fn modulus(ctx: &Arc<Context>) -> u64 {
        ctx.modulus()
    }

    fn add_assign(&mut self, other: &Self) {
        *self += other;
    }

    fn mul_scalar(&self, scalar: u64) -> Self {
        Poly::mul_scalar(self, scalar)
    }

    fn context(&self) -> &Arc<Context> {
        &self.ctx
    }
}

#![crate_name = "shamir"]
#![crate_type = "lib"]
#![warn(missing_docs, unused_imports)]

//! Dealerless (N, k)-threshold secret sharing over a prime field.
//!
//! Every party acts as a dealer of a random polynomial of degree `k - 1`
//! whose coefficients are opaque [`SecretElement`]s. Each party receives the
//! sum of all dealers' polynomials evaluated at its own point; any `k` of
//! these combined shares recover the sum of the dealers' constant terms.

mod errors;

pub mod threshold;

pub use errors::{Error, ParametersError, Result};
pub use shamir_math::rq::{Context, Poly};
pub use shamir_traits::SecretElement;

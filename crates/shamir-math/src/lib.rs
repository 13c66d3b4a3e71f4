#![crate_name = "shamir_math"]
#![crate_type = "lib"]
#![warn(missing_docs, unused_imports)]

//! Mathematical utilities for the shamir threshold sharing library.
//!
//! - [`zq`]: arithmetic modulo a prime `p < 2^63`;
//! - [`vandermonde`]: Vandermonde vectors and Lagrange weights at zero;
//! - [`rq`]: polynomials with coefficients modulo `p`, usable as shared
//!   secret elements.

mod errors;
pub mod rq;
pub mod vandermonde;
pub mod zq;

pub use errors::{Error, Result};

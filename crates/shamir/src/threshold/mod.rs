//! Dealerless threshold sharing of additively composed secrets.
//!
//! The protocol runs in a single pass:
//! 1. **Setup**: every party gets a distinct nonzero evaluation point and
//!    samples `k` secret elements, the coefficients of its dealer polynomial.
//! 2. **Distribution**: every dealer evaluates its polynomial at every
//!    recipient's point, giving an `N × N` table of contributions.
//! 3. **Aggregation**: every recipient sums its column of the table into its
//!    combined share.
//! 4. **Reconstruction**: any `k` combined shares, weighted by the Lagrange
//!    weights of their points, sum to the global secret.

/// Validation of threshold configurations
pub mod config;
mod dealer;
mod parameters;
mod points;
mod shares;

pub use dealer::{Dealer, Party};
pub use parameters::{ThresholdParameters, ThresholdParametersBuilder, DEFAULT_MODULUS};
pub use points::EvaluationPoints;
pub use shares::{Share, ShareManager};

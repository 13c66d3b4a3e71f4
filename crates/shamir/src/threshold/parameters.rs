//! Create parameters for threshold sharing.

use crate::threshold::config::validate_all_params;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use shamir_math::zq::Modulus;
use std::sync::Arc;

/// Default prime modulus, a 60-bit NTT-friendly prime.
pub const DEFAULT_MODULUS: u64 = 0xfffffffffffc001;

/// Parameters of an (N, k)-threshold sharing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawParameters", into = "RawParameters")]
pub struct ThresholdParameters {
    /// Number of parties N.
    parties: usize,

    /// Number of shares k needed to reconstruct.
    threshold: usize,

    /// Prime modulus of the field.
    q: Modulus,
}

impl ThresholdParameters {
    /// Returns the number of parties.
    pub const fn parties(&self) -> usize {
        self.parties
    }

    /// Returns the number of shares needed to reconstruct.
    pub const fn threshold(&self) -> usize {
        self.threshold
    }

    /// Returns the degree of the dealers' polynomials, `k - 1`.
    pub const fn degree(&self) -> usize {
        self.threshold - 1
    }

    /// Returns the modulus of the field.
    pub fn modulus(&self) -> &Modulus {
        &self.q
    }
}

/// Serialized form of [`ThresholdParameters`], validated again on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawParameters {
    parties: usize,
    threshold: usize,
    modulus: u64,
}

impl TryFrom<RawParameters> for ThresholdParameters {
    type Error = Error;

    fn try_from(raw: RawParameters) -> Result<Self> {
        ThresholdParametersBuilder::new()
            .set_parties(raw.parties)
            .set_threshold(raw.threshold)
            .set_modulus(raw.modulus)
            .build()
    }
}

impl From<ThresholdParameters> for RawParameters {
    fn from(params: ThresholdParameters) -> Self {
        Self {
            parties: params.parties,
            threshold: params.threshold,
            modulus: params.q.modulus(),
        }
    }
}

/// Builder for parameters for threshold sharing.
#[derive(Debug)]
pub struct ThresholdParametersBuilder {
    parties: usize,
    threshold: usize,
    modulus: u64,
}

impl ThresholdParametersBuilder {
    /// Creates a new instance of the builder
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            parties: Default::default(),
            threshold: Default::default(),
            modulus: DEFAULT_MODULUS,
        }
    }

    /// Sets the number of parties N.
    pub fn set_parties(&mut self, parties: usize) -> &mut Self {
        self.parties = parties;
        self
    }

    /// Sets the number of shares k needed to reconstruct. Building fails
    /// unless `1 <= k <= N`.
    pub fn set_threshold(&mut self, threshold: usize) -> &mut Self {
        self.threshold = threshold;
        self
    }

    /// Sets the prime modulus. Building fails if it is not a prime below 2^63
    /// or if the field has fewer than N nonzero elements.
    pub fn set_modulus(&mut self, modulus: u64) -> &mut Self {
        self.modulus = modulus;
        self
    }

    /// Build a new `ThresholdParameters` inside an `Arc`.
    pub fn build_arc(&self) -> Result<Arc<ThresholdParameters>> {
        self.build().map(Arc::new)
    }

    /// Build a new `ThresholdParameters`.
    pub fn build(&self) -> Result<ThresholdParameters> {
        let q = validate_all_params(self.parties, self.threshold, self.modulus)?;
        Ok(ThresholdParameters {
            parties: self.parties,
            threshold: self.threshold,
            q,
        })
    }
}

//! Evaluation points assigned to the parties.

use crate::threshold::ThresholdParameters;
use crate::{Error, ParametersError, Result};
use rand::{CryptoRng, RngCore};
use shamir_math::zq::Modulus;
use shamir_util::{find_duplicate, sample_distinct_nonzero};

/// A set of pairwise-distinct, nonzero evaluation points, one per party.
///
/// Points are stored reduced modulo p. Two points that coincide modulo p
/// would make the Vandermonde matrix of any subset containing both singular.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationPoints(Box<[u64]>);

impl EvaluationPoints {
    /// Sample one uniformly random nonzero point per party.
    pub fn random<R: RngCore + CryptoRng>(params: &ThresholdParameters, rng: &mut R) -> Result<Self> {
        let p = params.modulus().modulus();
        let points = sample_distinct_nonzero(params.parties(), p, rng)
            .ok_or(ParametersError::FieldTooSmall(p, params.parties()))?;
        Ok(Self(points.into_boxed_slice()))
    }

    /// Validate caller-provided points: exactly one per party, nonzero and
    /// pairwise distinct modulo p.
    pub fn try_new(params: &ThresholdParameters, points: &[u64]) -> Result<Self> {
        if points.len() != params.parties() {
            return Err(Error::party_count_mismatch(points.len(), params.parties()));
        }
        let points = check_points(points, params.modulus())?;
        Ok(Self(points.into_boxed_slice()))
    }

    /// Returns the points.
    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether there is no point.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Reduce `points` modulo p and check that they are nonzero and pairwise
/// distinct.
pub(crate) fn check_points(points: &[u64], q: &Modulus) -> Result<Vec<u64>> {
    let reduced = points.iter().map(|x| q.reduce(*x)).collect::<Vec<_>>();
    if let Some(i) = reduced.iter().position(|x| *x == 0) {
        return Err(Error::ZeroEvaluationPoint(i));
    }
    if let Some(i) = find_duplicate(&reduced) {
        return Err(Error::DuplicateEvaluationPoint(reduced[i]));
    }
    Ok(reduced)
}

//! Share distribution, aggregation and reconstruction.
//!
//! This module provides the ShareManager struct that drives a threshold
//! sharing session from setup to reconstruction.

use crate::threshold::dealer::check_context;
use crate::threshold::points::check_points;
use crate::threshold::{Dealer, EvaluationPoints, Party, ThresholdParameters};
use crate::{Error, Result};
use itertools::Itertools;
use ndarray::Array2;
use rand::{CryptoRng, RngCore};
use rayon::prelude::*;
use shamir_math::vandermonde::lagrange_weights;
use shamir_traits::{sum, weighted_sum, SecretElement};
use std::sync::Arc;
use tracing::{debug, trace};

/// A party's combined share: the sum of every dealer's polynomial evaluated at
/// the party's point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share<E: SecretElement> {
    /// Evaluation point of the recipient.
    pub evaluation_point: u64,
    /// Combined share value.
    pub value: E,
}

/// Manager for threshold sharing operations.
///
/// ShareManager coordinates the phases of a dealerless sharing session.
///
/// # Protocol Flow
/// 1. [`ShareManager::setup`] assigns evaluation points and samples every
///    party's dealer polynomial
/// 2. [`ShareManager::contributions`] evaluates every dealer's polynomial at
///    every recipient's point
/// 3. [`ShareManager::aggregate`] sums the contributions received by each
///    recipient into its combined share
/// 4. [`ShareManager::reconstruct`] recovers the global secret from exactly
///    `k` combined shares
#[derive(Debug, Clone)]
pub struct ShareManager {
    params: Arc<ThresholdParameters>,
}

impl ShareManager {
    /// Create a new share manager.
    pub fn new(params: Arc<ThresholdParameters>) -> Self {
        Self { params }
    }

    /// Returns the parameters of the session.
    pub fn params(&self) -> &Arc<ThresholdParameters> {
        &self.params
    }

    /// Set up `N` parties with random distinct nonzero evaluation points and
    /// random dealer polynomials.
    ///
    /// The elements described by `ctx` must be scaled modulo the same prime as
    /// the session parameters, otherwise [`Error::IncompatibleModulus`] is
    /// returned.
    pub fn setup<E, R>(&self, ctx: &E::Context, rng: &mut R) -> Result<Vec<Party<E>>>
    where
        E: SecretElement,
        R: RngCore + CryptoRng,
    {
        let points = EvaluationPoints::random(&self.params, rng)?;
        self.setup_with_points(&points, ctx, rng)
    }

    /// Set up `N` parties at the given evaluation points with random dealer
    /// polynomials.
    ///
    /// Nothing is sampled if the points do not match the parameters.
    pub fn setup_with_points<E, R>(
        &self,
        points: &EvaluationPoints,
        ctx: &E::Context,
        rng: &mut R,
    ) -> Result<Vec<Party<E>>>
    where
        E: SecretElement,
        R: RngCore + CryptoRng,
    {
        if points.len() != self.params.parties() {
            return Err(Error::party_count_mismatch(
                points.len(),
                self.params.parties(),
            ));
        }
        check_points(points.as_slice(), self.params.modulus())?;
        check_context::<E>(ctx, self.params.modulus())?;

        debug!(
            parties = self.params.parties(),
            threshold = self.params.threshold(),
            "setting up threshold sharing session"
        );
        let parties = points
            .as_slice()
            .iter()
            .enumerate()
            .map(|(id, x)| Party {
                id,
                evaluation_point: *x,
                dealer: Dealer::random(&self.params, ctx, rng),
            })
            .collect_vec();
        Ok(parties)
    }

    /// Compute the `N × N` table of contributions; row `i` holds dealer `i`'s
    /// polynomial evaluated at every recipient's point.
    pub fn contributions<E: SecretElement>(&self, parties: &[Party<E>]) -> Result<Array2<E>> {
        self.check_parties(parties)?;

        let n = parties.len();
        let q = self.params.modulus();
        trace!(n, "computing contribution table");
        let cells = (0..n * n)
            .into_par_iter()
            .map(|cell| {
                let (dealer, recipient) = (cell / n, cell % n);
                parties[dealer]
                    .dealer
                    .contribution(parties[recipient].evaluation_point, q)
            })
            .collect::<Vec<E>>();

        Array2::from_shape_vec((n, n), cells)
            .map_err(|_| Error::DefaultError("Failed to create contribution table".to_string()))
    }

    /// Sum each recipient's column of contributions into its combined share.
    pub fn aggregate<E: SecretElement>(
        &self,
        contributions: &Array2<E>,
        parties: &[Party<E>],
    ) -> Result<Vec<Share<E>>> {
        self.check_parties(parties)?;
        let n = parties.len();
        if contributions.dim() != (n, n) {
            return Err(Error::DefaultError(format!(
                "Expected a {n} × {n} contribution table, found {:?}",
                contributions.dim()
            )));
        }

        let ctx = parties[0].dealer.context();
        trace!(n, "aggregating contributions");
        let shares = parties
            .par_iter()
            .enumerate()
            .map(|(j, party)| Share {
                evaluation_point: party.evaluation_point,
                value: sum(ctx, contributions.column(j).iter()),
            })
            .collect();
        Ok(shares)
    }

    /// Distribute and aggregate in one step, returning every party's combined
    /// share in party order.
    pub fn share<E: SecretElement>(&self, parties: &[Party<E>]) -> Result<Vec<Share<E>>> {
        let contributions = self.contributions(parties)?;
        self.aggregate(&contributions, parties)
    }

    /// Compute the combined share of the recipient at `point` directly from
    /// all dealers' polynomials.
    pub fn combined_share<E: SecretElement>(
        &self,
        dealers: &[Dealer<E>],
        point: u64,
    ) -> Result<Share<E>> {
        if dealers.len() != self.params.parties() {
            return Err(Error::party_count_mismatch(
                dealers.len(),
                self.params.parties(),
            ));
        }
        let point = check_points(&[point], self.params.modulus())?[0];
        for dealer in dealers {
            dealer.check_modulus(self.params.modulus())?;
        }

        let q = self.params.modulus();
        let value = dealers
            .par_iter()
            .map(|dealer| dealer.contribution(point, q))
            .collect::<Vec<_>>();
        Ok(Share {
            evaluation_point: point,
            value: sum(dealers[0].context(), &value),
        })
    }

    /// Recover the global secret from exactly `k` combined shares.
    ///
    /// The shares must come from pairwise-distinct nonzero evaluation points.
    pub fn reconstruct<E: SecretElement>(&self, shares: &[Share<E>]) -> Result<E> {
        let k = self.params.threshold();
        if shares.len() < k {
            return Err(Error::insufficient_shares(shares.len(), k));
        }
        if shares.len() > k {
            return Err(Error::too_many_shares(shares.len(), k));
        }

        for share in shares {
            check_context::<E>(share.value.context(), self.params.modulus())?;
        }
        let points = shares.iter().map(|s| s.evaluation_point).collect_vec();
        let points = check_points(&points, self.params.modulus())?;
        let weights = lagrange_weights(&points, self.params.modulus())?;

        debug!(k, "reconstructing global secret");
        Ok(weighted_sum(
            shares[0].value.context(),
            shares.iter().map(|s| &s.value),
            weights,
        ))
    }

    /// Sum of every dealer's own secret.
    ///
    /// This is the value [`ShareManager::reconstruct`] recovers; it is only
    /// meant for verification.
    pub fn global_secret<E: SecretElement>(&self, parties: &[Party<E>]) -> Result<E> {
        self.check_parties(parties)?;
        Ok(sum(
            parties[0].dealer.context(),
            parties.iter().map(|p| p.dealer.secret()),
        ))
    }

    fn check_parties<E: SecretElement>(&self, parties: &[Party<E>]) -> Result<()> {
        if parties.len() != self.params.parties() {
            return Err(Error::party_count_mismatch(
                parties.len(),
                self.params.parties(),
            ));
        }
        if let Some(p) = parties
            .iter()
            .find(|p| p.dealer.coefficients().len() != self.params.threshold())
        {
            return Err(Error::DefaultError(format!(
                "Party {} holds {} coefficients instead of {}",
                p.id,
                p.dealer.coefficients().len(),
                self.params.threshold()
            )));
        }
        for party in parties {
            party.dealer.check_modulus(self.params.modulus())?;
        }
        let points = parties.iter().map(|p| p.evaluation_point).collect_vec();
        check_points(&points, self.params.modulus())?;
        Ok(())
    }
}

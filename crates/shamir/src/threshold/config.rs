//! Configuration validation for threshold sharing.

use crate::ParametersError;
use shamir_math::zq::Modulus;

/// Validates the number of parties and the reconstruction threshold.
///
/// The threshold `k` is the number of shares needed to reconstruct, so any
/// `1 <= k <= n` is admissible.
pub fn validate_threshold_config(n: usize, threshold: usize) -> Result<(), ParametersError> {
    if n == 0 {
        return Err(ParametersError::InvalidPartyCount(n));
    }
    if threshold == 0 || threshold > n {
        return Err(ParametersError::InvalidThreshold(threshold, n));
    }
    Ok(())
}

/// Validates that `modulus` is an admissible prime.
pub fn validate_modulus(modulus: u64) -> Result<Modulus, ParametersError> {
    Modulus::new(modulus).map_err(|_| ParametersError::InvalidModulus(modulus))
}

/// Validates that the field has at least `n` nonzero elements, so that `n`
/// distinct nonzero evaluation points exist.
pub fn validate_field_size(modulus: u64, n: usize) -> Result<(), ParametersError> {
    if modulus.saturating_sub(1) < n as u64 {
        return Err(ParametersError::FieldTooSmall(modulus, n));
    }
    Ok(())
}

/// Validates all threshold configuration parameters.
pub fn validate_all_params(
    n: usize,
    threshold: usize,
    modulus: u64,
) -> Result<Modulus, ParametersError> {
    validate_threshold_config(n, threshold)?;
    let q = validate_modulus(modulus)?;
    validate_field_size(modulus, n)?;
    Ok(q)
}

use thiserror::Error;

/// The Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Enum encapsulating all the possible errors from this library.
///
/// Violations of the sharing preconditions (bad parameters, wrong number of
/// shares, zero or colliding evaluation points) are reported before any share
/// is generated or combined. A [`Error::MathError`] escaping the arithmetic
/// layer means such a check was bypassed upstream.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Indicates an error in the underlying field arithmetic.
    #[error("{0}")]
    MathError(#[from] shamir_math::Error),

    /// Indicates that too few values were provided.
    #[error("Too few values provided: {0} is below limit {1}")]
    TooFewValues(usize, usize),

    /// Indicates that too many values were provided.
    #[error("Too many values provided: {0} exceeds limit {1}")]
    TooManyValues(usize, usize),

    /// Indicates that the evaluation point at the given index is zero.
    #[error("Evaluation point at index {0} is zero")]
    ZeroEvaluationPoint(usize),

    /// Indicates that an evaluation point is used more than once.
    #[error("Evaluation point {0} is used more than once")]
    DuplicateEvaluationPoint(u64),

    /// Indicates that secret elements are scaled modulo a different prime
    /// than the session's.
    #[error("Incompatible modulus: elements use {0} but the session uses {1}")]
    IncompatibleModulus(u64, u64),

    /// Indicates an error in the parameters.
    #[error("{0}")]
    ParametersError(#[from] ParametersError),

    /// Indicates a default error
    #[error("{0}")]
    DefaultError(String),
}

impl Error {
    /// Create an insufficient shares error.
    pub fn insufficient_shares(provided: usize, required: usize) -> Self {
        Self::TooFewValues(provided, required)
    }

    /// Create a too many shares error.
    pub fn too_many_shares(provided: usize, maximum: usize) -> Self {
        Self::TooManyValues(provided, maximum)
    }

    /// Create a dealer coefficient count mismatch error.
    pub fn coefficient_count_mismatch(provided: usize, expected: usize) -> Self {
        if provided < expected {
            Self::TooFewValues(provided, expected)
        } else {
            Self::TooManyValues(provided, expected)
        }
    }

    /// Create a party count mismatch error.
    pub fn party_count_mismatch(provided: usize, expected: usize) -> Self {
        if provided < expected {
            Self::TooFewValues(provided, expected)
        } else {
            Self::TooManyValues(provided, expected)
        }
    }
}

/// Separate enum to indicate parameters-related errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParametersError {
    /// Indicates that the number of parties is invalid.
    #[error("Invalid party count: {0}")]
    InvalidPartyCount(usize),

    /// Indicates that the threshold is not between 1 and the number of parties.
    #[error("Invalid threshold {0}: must be between 1 and the number of parties {1}")]
    InvalidThreshold(usize, usize),

    /// Indicates that the modulus is invalid.
    #[error("Invalid modulus: {0}")]
    InvalidModulus(u64),

    /// Indicates that the field has fewer nonzero elements than parties.
    #[error("Field of size {0} cannot provide {1} distinct nonzero evaluation points")]
    FieldTooSmall(u64, usize),
}

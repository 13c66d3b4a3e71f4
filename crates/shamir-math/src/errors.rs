use thiserror::Error;

/// The Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Enum encapsulating all the possible errors from this library.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Indicates that the modulus is not a prime that fits with room for one
    /// doubling in 64 bits.
    #[error("Invalid modulus: modulus {0} is either not prime or not below 2^63")]
    InvalidModulus(u64),

    /// Indicates that a value has no inverse modulo the prime.
    #[error("{0} is not invertible modulo {1}")]
    NotInvertible(u64, u64),

    /// Indicates that two evaluation points coincide modulo the prime.
    #[error("Duplicate point {0} at index {1}")]
    DuplicatePoint(u64, usize),

    /// Indicates that an input was empty where at least one value is needed.
    #[error("Empty input")]
    EmptyInput,

    /// Indicates a length mismatch.
    #[error("Invalid length: expected {0}, found {1}")]
    InvalidLength(usize, usize),
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn error_strings() {
        assert_eq!(
            Error::InvalidModulus(4).to_string(),
            "Invalid modulus: modulus 4 is either not prime or not below 2^63"
        );
        assert_eq!(
            Error::NotInvertible(0, 7).to_string(),
            "0 is not invertible modulo 7"
        );
        assert_eq!(
            Error::DuplicatePoint(5, 2).to_string(),
            "Duplicate point 5 at index 2"
        );
        assert_eq!(
            Error::InvalidLength(3, 2).to_string(),
            "Invalid length: expected 3, found 2"
        );
    }
}

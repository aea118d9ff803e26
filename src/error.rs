//! Error types for the Herradura suite.

use thiserror::Error;

/// Result type alias for Herradura operations
pub type Result<T> = std::result::Result<T, HerraduraError>;

/// Errors that can occur during Herradura operations
#[derive(Debug, Error)]
pub enum HerraduraError {
    /// The random source could not supply the requested bits
    #[error("entropy source failure: {0}")]
    Entropy(String),

    /// Two bit vectors of different length were combined
    #[error("bit length mismatch: {left} vs {right}")]
    LengthMismatch {
        /// Length of the left operand in bits
        left: usize,
        /// Length of the right operand in bits
        right: usize,
    },

    /// A negative number of FSCX passes was requested
    #[error("invalid pass count: {0}")]
    InvalidPassCount(isize),

    /// Private and public pass counts do not add up to the bit length
    #[error("invalid split: {private} + {public} != {bits}")]
    InvalidSplit {
        /// Bit length the split was checked against
        bits: usize,
        /// Private-phase passes (i)
        private: usize,
        /// Public-phase passes (r)
        public: usize,
    },

    /// Bit length is not a power of two of at least 8
    #[error("invalid bit length: {0} (must be a power of two >= 8)")]
    InvalidBitLength(usize),

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl HerraduraError {
    /// Builds a `LengthMismatch` from two bit lengths
    pub(crate) fn mismatch(left: usize, right: usize) -> Self {
        Self::LengthMismatch { left, right }
    }
}

//! Constants and configuration types for the Herradura suite.

use serde::{Deserialize, Serialize};

use crate::error::{HerraduraError, Result};

/// Smallest supported bit length
pub const MIN_BITS: usize = 8;

/// Bit length used when the caller does not choose one
pub const DEFAULT_BITS: usize = 256;

/// Checks that `bits` is a power of two of at least [`MIN_BITS`]
pub fn validate_bit_length(bits: usize) -> Result<()> {
    if bits < MIN_BITS || !bits.is_power_of_two() {
        return Err(HerraduraError::InvalidBitLength(bits));
    }
    Ok(())
}

/// Partition of the bit length into private-phase (i) and public-phase (r)
/// pass counts, with `i + r == bits`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Split {
    bits: usize,
    private: usize,
    public: usize,
}

impl Split {
    /// Creates a split, checking `private + public == bits`
    pub fn new(bits: usize, private: usize, public: usize) -> Result<Self> {
        validate_bit_length(bits)?;
        if private.checked_add(public) != Some(bits) {
            return Err(HerraduraError::InvalidSplit {
                bits,
                private,
                public,
            });
        }
        Ok(Self {
            bits,
            private,
            public,
        })
    }

    /// The nominal split: `i = bits / 4`, `r = 3 * bits / 4`
    pub fn quarter(bits: usize) -> Result<Self> {
        Self::with_private(bits, bits / 4)
    }

    /// Creates a split from the private pass count, deriving `r = bits - i`
    pub fn with_private(bits: usize, private: usize) -> Result<Self> {
        validate_bit_length(bits)?;
        let public = bits
            .checked_sub(private)
            .ok_or(HerraduraError::InvalidSplit {
                bits,
                private,
                public: 0,
            })?;
        Self::new(bits, private, public)
    }

    /// Total bit length
    pub fn bits(&self) -> usize {
        self.bits
    }

    /// Private-phase pass count (i)
    pub fn private(&self) -> usize {
        self.private
    }

    /// Public-phase pass count (r)
    pub fn public(&self) -> usize {
        self.public
    }

    /// Fails with `LengthMismatch` unless `bits` is the split's bit length
    pub fn ensure_bits(&self, bits: usize) -> Result<()> {
        if bits != self.bits {
            return Err(HerraduraError::mismatch(bits, self.bits));
        }
        Ok(())
    }
}

/// Caller-facing suite configuration.
///
/// `private_passes` defaults to a quarter of `bits` when unset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    /// Bit length of every vector in a run
    pub bits: usize,
    /// Private-phase pass count (i); `None` means `bits / 4`
    pub private_passes: Option<usize>,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            bits: DEFAULT_BITS,
            private_passes: None,
        }
    }
}

impl SuiteConfig {
    /// Create a config for `bits` with the quarter split
    pub fn new(bits: usize) -> Self {
        Self {
            bits,
            private_passes: None,
        }
    }

    /// Override the private pass count
    pub fn with_private_passes(mut self, private: usize) -> Self {
        self.private_passes = Some(private);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.split().map(|_| ())
    }

    /// The checked split this configuration describes
    pub fn split(&self) -> Result<Split> {
        match self.private_passes {
            Some(private) => Split::with_private(self.bits, private),
            None => Split::quarter(self.bits),
        }
    }

    /// Parse a configuration from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| HerraduraError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

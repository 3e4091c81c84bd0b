//! Rank discount formulas used by DCG.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Position discount applied to relevance scores when computing DCG.
///
/// Weights by rank (1-indexed):
///
/// | rank | `Standard` | `Uniform` |
/// |------|------------|-----------|
/// | 1    | 1.0        | 1.0       |
/// | 2    | 1.0        | 0.6309    |
/// | 3    | 0.6309     | 0.5       |
/// | 4    | 0.5        | 0.4307    |
///
/// Serialized as its integer code (`0` or `1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum DiscountMethod {
    /// Method `0`: rank 1 is undiscounted, rank `i >= 2` is divided by `log2(i)`.
    #[default]
    Standard,
    /// Method `1`: every rank `i` is divided by `log2(i + 1)`.
    Uniform,
}

impl DiscountMethod {
    /// Parses an integer method code.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDiscountMethod`] for any code other than 0 or 1.
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            0 => Ok(Self::Standard),
            1 => Ok(Self::Uniform),
            other => Err(Error::InvalidDiscountMethod(other)),
        }
    }

    /// Returns the integer code of this method.
    #[must_use]
    pub fn code(self) -> i64 {
        match self {
            Self::Standard => 0,
            Self::Uniform => 1,
        }
    }

    /// Returns the divisor applied at the given 1-indexed rank.
    #[inline]
    pub(crate) fn divisor(self, rank: usize) -> f64 {
        // SAFETY: ranks are bounded by slice lengths; f64 is exact up to 2^53.
        #[allow(clippy::cast_precision_loss)]
        let rank = rank as f64;
        match self {
            Self::Standard => rank.log2(),
            Self::Uniform => (rank + 1.0).log2(),
        }
    }
}

impl TryFrom<i64> for DiscountMethod {
    type Error = Error;

    fn try_from(code: i64) -> Result<Self> {
        Self::from_code(code)
    }
}

impl TryFrom<u8> for DiscountMethod {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        Self::from_code(i64::from(code))
    }
}

impl From<DiscountMethod> for i64 {
    fn from(method: DiscountMethod) -> Self {
        method.code()
    }
}

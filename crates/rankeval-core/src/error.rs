//! Error types for rankeval-core.

use thiserror::Error;

/// Coarse classification of [`Error`] values.
///
/// Lets callers decide how to react (fix the input data, fix a parameter,
/// fix the configuration) without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An identifier could not be resolved against the item universe.
    Lookup,
    /// Two sequences that must have equal length do not.
    Shape,
    /// A numeric argument is outside its permitted range.
    Range,
    /// An argument has a value the operation does not accept.
    InvalidArgument,
    /// Configuration could not be loaded or is invalid.
    Config,
}

/// Evaluation error types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Identifier is not part of the item universe.
    #[error("Unknown item: '{0}' is not in the item universe")]
    UnknownItem(String),

    /// Identifier appears more than once while building an item universe.
    #[error("Duplicate item: '{0}' appears more than once in the item universe")]
    DuplicateItem(String),

    /// Relevance vector length does not match the item universe length.
    #[error("Shape mismatch: expected vector of length {expected}, got {actual}")]
    ShapeMismatch {
        /// Length of the item universe.
        expected: usize,
        /// Length of the supplied vector.
        actual: usize,
    },

    /// Masking fraction outside `[0, 1]` (or NaN).
    #[error("Fraction out of range: {0} is not in [0, 1]")]
    FractionOutOfRange(f64),

    /// Discount method code other than 0 or 1.
    #[error("Invalid discount method {0}: method must be 0 or 1")]
    InvalidDiscountMethod(i64),

    /// Cutoff rank of zero in a configuration.
    #[error("Invalid cutoff: k must be at least 1")]
    InvalidCutoff,

    /// Configuration loading error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns the coarse kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownItem(_) | Self::DuplicateItem(_) => ErrorKind::Lookup,
            Self::ShapeMismatch { .. } => ErrorKind::Shape,
            Self::FractionOutOfRange(_) => ErrorKind::Range,
            Self::InvalidDiscountMethod(_) | Self::InvalidCutoff => ErrorKind::InvalidArgument,
            Self::Config(_) => ErrorKind::Config,
        }
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for evaluation operations.
pub type Result<T> = std::result::Result<T, Error>;

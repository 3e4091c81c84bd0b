//! Evaluation configuration.
//!
//! Values are layered the usual way: built-in defaults, then a TOML file,
//! then `RANKEVAL_*` environment variables.
//!
//! ```toml
//! k = 10
//! method = 0          # 0 = standard, 1 = uniform discount
//! mask_fraction = 0.2
//! seed = 42
//! ```

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::metrics::DiscountMethod;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "RANKEVAL_";

/// Parameters shared by an evaluation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Cutoff rank for DCG/NDCG.
    pub k: usize,
    /// Discount formula, stored as its integer code.
    pub method: DiscountMethod,
    /// Fraction of positive labels hidden when masking.
    pub mask_fraction: f64,
    /// Seed for reproducible masking; `None` draws from OS entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            k: 10,
            method: DiscountMethod::Standard,
            mask_fraction: 0.2,
            seed: None,
        }
    }
}

impl EvalConfig {
    /// Loads configuration from defaults, the TOML file at `path` and the environment.
    ///
    /// A missing file is not an error; defaults and environment still apply.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a source cannot be parsed, or a validation
    /// error from [`EvalConfig::validate`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(
                path = %path.display(),
                "Config file not found, falling back to defaults"
            );
        }

        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?;
        config.validate()?;

        tracing::debug!(?config, "Evaluation config loaded");
        Ok(config)
    }

    /// Parses configuration from a TOML string layered over the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] on malformed TOML or a validation error.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::string(toml))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every field is usable.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidCutoff`] if `k` is zero.
    /// - [`Error::FractionOutOfRange`] if `mask_fraction` is outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(Error::InvalidCutoff);
        }
        if !(0.0..=1.0).contains(&self.mask_fraction) {
            return Err(Error::FractionOutOfRange(self.mask_fraction));
        }
        Ok(())
    }

    /// Creates the random source for masking.
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

//! # rankeval Core
//!
//! Ranking-quality metrics for evaluating recommendation output against
//! ground truth.
//!
//! ## Features
//!
//! - **DCG / NDCG @k**: two discount formulas, ideal-ordering normalization
//! - **Relevance vectors**: identifier lists ↔ fixed-position 0/1 vectors
//! - **Masking**: hide a random fraction of known positives, seeded or not
//! - **Config**: defaults → TOML → `RANKEVAL_*` environment layering
//!
//! ## Quick Start
//!
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//! use rankeval_core::{
//!     build_relevance_vector, extract_identifiers, mask_random_subset, ndcg_at_k,
//!     ranked_relevances, DiscountMethod, ItemUniverse,
//! };
//!
//! fn main() -> Result<(), rankeval_core::Error> {
//!     let universe = ItemUniverse::new(["a", "b", "c", "d", "e", "f"])?;
//!
//!     // Ground truth, with half of it hidden from the recommender
//!     let truth = build_relevance_vector(&["a", "c", "d", "f"], &universe)?;
//!     let seed = mask_random_subset(&truth, 0.5, &mut StdRng::seed_from_u64(42))?;
//!     assert_eq!(extract_identifiers(&seed, &universe)?.len(), 2);
//!
//!     // Score a ranking produced by some recommender
//!     let hidden = extract_identifiers(&truth, &universe)?;
//!     let relevances = ranked_relevances(&["c", "b", "f", "e"], &hidden);
//!     let score = ndcg_at_k(&relevances, 4, DiscountMethod::Standard);
//!     assert!(score > 0.0 && score < 1.0);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::float_cmp))]

pub mod config;
#[cfg(test)]
mod config_tests;
pub mod error;
pub mod metrics;
pub mod relevance;

pub use config::EvalConfig;
pub use error::{Error, ErrorKind, Result};
pub use metrics::{
    dcg_at_k, dcg_at_k_with_code, mean_ndcg_at_k, ndcg_at_k, ndcg_at_k_with_code, DiscountMethod,
};
pub use relevance::{
    build_relevance_vector, extract_identifiers, mask_random_subset, ranked_relevances,
    ItemUniverse,
};

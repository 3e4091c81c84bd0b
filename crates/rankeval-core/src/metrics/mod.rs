//! Ranking quality metrics for evaluating recommendation output.
//!
//! This module provides:
//! - **DCG@k**: Discounted Cumulative Gain with two discount formulas
//! - **NDCG@k**: DCG normalized by the DCG of the ideal ordering
//! - **Mean NDCG@k**: NDCG averaged over many ranked lists
//!
//! # Example
//!
//! ```rust
//! use rankeval_core::metrics::{dcg_at_k, ndcg_at_k, DiscountMethod};
//!
//! let relevances = [3, 2, 3, 0, 0, 1, 2, 2, 3, 0]; // rank order, top first
//!
//! let dcg = dcg_at_k(&relevances, 2, DiscountMethod::Standard);  // 3 + 2/log2(2) = 5.0
//! let ndcg = ndcg_at_k(&relevances, 1, DiscountMethod::Standard); // 1.0
//! assert!((dcg - 5.0).abs() < 1e-12);
//! assert!((ndcg - 1.0).abs() < 1e-12);
//! ```

mod aggregate;
mod dcg;
mod discount;

pub use aggregate::mean_ndcg_at_k;
pub use dcg::{dcg_at_k, dcg_at_k_with_code, ndcg_at_k, ndcg_at_k_with_code};
pub use discount::DiscountMethod;

//! Discounted Cumulative Gain and its normalized form.

use super::discount::DiscountMethod;
use crate::error::Result;

/// Calculates DCG@k (Discounted Cumulative Gain).
///
/// DCG rewards rankings that place high relevance scores near the top.
/// Only the first `min(k, relevances.len())` positions are considered;
/// a `k` beyond the length of the input is not an error.
///
/// # Formula
///
/// With 1-indexed rank `i` over the truncated sequence `r` of length `n`:
///
/// `Standard: DCG@k = r_1 + Σ r_i / log2(i)`       for i in 2..=n
/// `Uniform:  DCG@k = Σ r_i / log2(i + 1)`         for i in 1..=n
///
/// # Arguments
///
/// * `relevances` - Relevance scores in rank order (first element = top-ranked item)
/// * `k` - Number of top positions to consider
/// * `method` - Discount formula
///
/// # Returns
///
/// The discounted gain, or exactly `0.0` when the truncated sequence is empty.
#[must_use]
pub fn dcg_at_k<T: Copy + Into<f64>>(relevances: &[T], k: usize, method: DiscountMethod) -> f64 {
    let truncated = &relevances[..k.min(relevances.len())];

    let Some((&first, rest)) = truncated.split_first() else {
        return 0.0;
    };

    match method {
        DiscountMethod::Standard => {
            let top: f64 = first.into();
            let discounted: f64 = rest
                .iter()
                .enumerate()
                .map(|(i, &rel)| Into::<f64>::into(rel) / method.divisor(i + 2))
                .sum();
            top + discounted
        }
        DiscountMethod::Uniform => truncated
            .iter()
            .enumerate()
            .map(|(i, &rel)| Into::<f64>::into(rel) / method.divisor(i + 1))
            .sum(),
    }
}

/// Calculates NDCG@k (Normalized Discounted Cumulative Gain).
///
/// The DCG of `relevances` divided by the DCG of the same scores sorted in
/// descending order (the ideal DCG). A score of 1.0 means the first `k`
/// positions are already in non-increasing order.
///
/// # Formula
///
/// `NDCG@k = DCG@k / IDCG@k` where IDCG is DCG of ideal ranking
///
/// # Arguments
///
/// * `relevances` - Relevance scores in rank order (higher = more relevant)
/// * `k` - Number of top positions to consider
/// * `method` - Discount formula, applied to both DCG and IDCG
///
/// # Returns
///
/// A value between 0.0 and 1.0 for non-negative scores. Returns exactly
/// `0.0` when the ideal DCG is zero (empty input or all-zero scores).
#[must_use]
pub fn ndcg_at_k<T: Copy + Into<f64>>(relevances: &[T], k: usize, method: DiscountMethod) -> f64 {
    let mut ideal: Vec<f64> = relevances.iter().map(|&rel| Into::<f64>::into(rel)).collect();
    ideal.sort_unstable_by(|a, b| b.total_cmp(a));

    let idcg = dcg_at_k(&ideal, k, method);
    if idcg == 0.0 {
        return 0.0;
    }

    dcg_at_k(relevances, k, method) / idcg
}

/// [`dcg_at_k`] taking the discount method as an integer code (`0` or `1`).
///
/// # Errors
///
/// Returns [`crate::Error::InvalidDiscountMethod`] if `code` is not 0 or 1.
pub fn dcg_at_k_with_code<T: Copy + Into<f64>>(
    relevances: &[T],
    k: usize,
    code: i64,
) -> Result<f64> {
    let method = DiscountMethod::from_code(code)?;
    Ok(dcg_at_k(relevances, k, method))
}

/// [`ndcg_at_k`] taking the discount method as an integer code (`0` or `1`).
///
/// # Errors
///
/// Returns [`crate::Error::InvalidDiscountMethod`] if `code` is not 0 or 1.
pub fn ndcg_at_k_with_code<T: Copy + Into<f64>>(
    relevances: &[T],
    k: usize,
    code: i64,
) -> Result<f64> {
    let method = DiscountMethod::from_code(code)?;
    Ok(ndcg_at_k(relevances, k, method))
}

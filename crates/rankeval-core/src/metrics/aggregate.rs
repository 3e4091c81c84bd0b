//! Aggregate metrics over many ranked lists.

use super::dcg::ndcg_at_k;
use super::discount::DiscountMethod;

/// Calculates mean NDCG@k over multiple ranked lists.
///
/// Each inner list is scored independently with [`ndcg_at_k`]; lists with
/// zero ideal DCG contribute `0.0` to the mean.
///
/// # Arguments
///
/// * `relevance_lists` - For each query, relevance scores in rank order
/// * `k` - Number of top positions to consider per list
/// * `method` - Discount formula
///
/// # Returns
///
/// The arithmetic mean of the per-list scores, or `0.0` for no lists.
#[must_use]
pub fn mean_ndcg_at_k<T: Copy + Into<f64>>(
    relevance_lists: &[Vec<T>],
    k: usize,
    method: DiscountMethod,
) -> f64 {
    if relevance_lists.is_empty() {
        return 0.0;
    }

    let total: f64 = relevance_lists
        .iter()
        .map(|relevances| ndcg_at_k(relevances, k, method))
        .sum();

    #[allow(clippy::cast_precision_loss)]
    let mean = total / relevance_lists.len() as f64;
    mean
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_ndcg_empty() {
        let lists: Vec<Vec<f64>> = vec![];
        assert!((mean_ndcg_at_k(&lists, 5, DiscountMethod::Standard) - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_mean_ndcg_perfect_and_zero() {
        // One ideal ranking (1.0) and one with no relevant items (0.0)
        let lists = vec![vec![1, 1, 0], vec![0, 0, 0]];
        let mean = mean_ndcg_at_k(&lists, 3, DiscountMethod::Standard);
        assert!((mean - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_mean_ndcg_matches_single() {
        let lists = vec![vec![2.0, 1.0, 2.0, 0.0]];
        let mean = mean_ndcg_at_k(&lists, 4, DiscountMethod::Uniform);
        assert!((mean - ndcg_at_k(&lists[0], 4, DiscountMethod::Uniform)).abs() < 1e-12);
    }
}

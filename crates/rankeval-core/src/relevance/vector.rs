//! Conversions between identifier lists and binary relevance vectors.

use std::collections::HashSet;

use super::universe::ItemUniverse;
use crate::error::{Error, Result};

/// Builds a binary relevance vector marking `items` within `universe`.
///
/// The result has one entry per universe position: `1.0` where the
/// identifier at that position appears in `items`, `0.0` elsewhere.
/// Repeated identifiers in `items` are idempotent.
///
/// # Errors
///
/// Returns [`Error::UnknownItem`] for the first identifier not in `universe`.
pub fn build_relevance_vector<S: AsRef<str>>(
    items: &[S],
    universe: &ItemUniverse,
) -> Result<Vec<f64>> {
    let mut vector = vec![0.0; universe.len()];

    for item in items {
        let item = item.as_ref();
        let index = universe
            .position(item)
            .ok_or_else(|| Error::UnknownItem(item.to_string()))?;
        vector[index] = 1.0;
    }

    Ok(vector)
}

/// Returns the identifiers flagged present in `vector`, in universe order.
///
/// Only entries exactly equal to `1.0` count as present; real-valued or
/// out-of-range entries are treated as absent.
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] if `vector` and `universe` differ in length.
pub fn extract_identifiers<'u, T: Copy + Into<f64>>(
    vector: &[T],
    universe: &'u ItemUniverse,
) -> Result<Vec<&'u str>> {
    if vector.len() != universe.len() {
        return Err(Error::ShapeMismatch {
            expected: universe.len(),
            actual: vector.len(),
        });
    }

    #[allow(clippy::float_cmp)]
    let present = vector
        .iter()
        .zip(universe.iter())
        .filter(|&(&flag, _)| Into::<f64>::into(flag) == 1.0)
        .map(|(_, item)| item)
        .collect();

    Ok(present)
}

/// Scores a ranked list of identifiers against a ground-truth set.
///
/// Returns, in ranking order, `1.0` for each ranked identifier that appears
/// in `relevant` and `0.0` otherwise. The output is a ranked relevance
/// sequence ready for [`crate::metrics::ndcg_at_k`].
#[must_use]
pub fn ranked_relevances<R, G>(ranking: &[R], relevant: &[G]) -> Vec<f64>
where
    R: AsRef<str>,
    G: AsRef<str>,
{
    let truth_set: HashSet<&str> = relevant.iter().map(|item| item.as_ref()).collect();

    ranking
        .iter()
        .map(|item| {
            if truth_set.contains(item.as_ref()) {
                1.0
            } else {
                0.0
            }
        })
        .collect()
}

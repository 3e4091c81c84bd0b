//! Random masking of positive relevance labels.

use rand::seq::index;
use rand::Rng;

use crate::error::{Error, Result};

/// Hides a random `fraction` of the positive entries of `vector`.
///
/// The positive ("hit") positions are those holding a non-zero value.
/// `floor((1 - fraction) * hits)` of them are chosen uniformly at random
/// without replacement and set to `1.0` in a fresh all-zero vector of the
/// same length. Positions that were zero in the input stay zero.
///
/// The caller owns the random source, so a seeded generator gives
/// reproducible masks.
///
/// # Errors
///
/// Returns [`Error::FractionOutOfRange`] if `fraction` is NaN or outside
/// `[0, 1]`. That check also bounds the sample size by the hit count.
///
/// # Example
///
/// ```rust
/// use rand::{rngs::StdRng, SeedableRng};
/// use rankeval_core::relevance::mask_random_subset;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let masked = mask_random_subset(&[1, 0, 1, 1, 0, 1], 0.5, &mut rng)?;
///
/// assert_eq!(masked.len(), 6);
/// assert_eq!(masked.iter().filter(|&&v| v == 1.0).count(), 2);
/// assert_eq!(masked[1], 0.0);
/// # Ok::<(), rankeval_core::Error>(())
/// ```
pub fn mask_random_subset<T, R>(vector: &[T], fraction: f64, rng: &mut R) -> Result<Vec<f64>>
where
    T: Copy + Into<f64>,
    R: Rng + ?Sized,
{
    if !(0.0..=1.0).contains(&fraction) {
        return Err(Error::FractionOutOfRange(fraction));
    }

    let hits: Vec<usize> = vector
        .iter()
        .enumerate()
        .filter(|&(_, &value)| Into::<f64>::into(value) != 0.0)
        .map(|(position, _)| position)
        .collect();

    // SAFETY: fraction is in [0, 1], so the product is in [0, hits.len()]
    // and non-negative; floor() then truncates exactly to usize.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    let num_keep = ((1.0 - fraction) * hits.len() as f64).floor() as usize;

    debug_assert!(num_keep <= hits.len());

    let mut masked = vec![0.0; vector.len()];
    for chosen in index::sample(rng, hits.len(), num_keep) {
        masked[hits[chosen]] = 1.0;
    }

    tracing::debug!(
        hits = hits.len(),
        kept = num_keep,
        fraction,
        "Masked relevance vector"
    );

    Ok(masked)
}

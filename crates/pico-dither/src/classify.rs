//! Nearest-color classification in Oklab.

use crate::api::DitherError;
use crate::color::Oklab;

/// Index of the candidate closest to `sample` by squared Oklab distance.
///
/// Ties go to the lowest index: a later candidate only wins with a strictly
/// smaller distance.
///
/// # Errors
///
/// [`DitherError::InvalidArgument`] when `candidates` is empty.
///
/// # Example
///
/// ```
/// use pico_dither::{classify, Oklab};
///
/// let candidates = [Oklab::new(0.0, 0.0, 0.0), Oklab::new(1.0, 0.0, 0.0)];
/// assert_eq!(classify::nearest(Oklab::new(0.8, 0.0, 0.0), &candidates).unwrap(), 1);
/// assert!(classify::nearest(Oklab::new(0.8, 0.0, 0.0), &[]).is_err());
/// ```
pub fn nearest(sample: Oklab, candidates: &[Oklab]) -> Result<usize, DitherError> {
    if candidates.is_empty() {
        return Err(DitherError::invalid("cannot classify against an empty candidate set"));
    }
    Ok(nearest_in(sample, candidates))
}

/// Linear scan for the nearest candidate. Callers guarantee `candidates` is non-empty.
#[inline]
pub(crate) fn nearest_in(sample: Oklab, candidates: &[Oklab]) -> usize {
    let mut best_idx = 0;
    let mut best_dist = f32::MAX;

    for (i, &candidate) in candidates.iter().enumerate() {
        let dist = sample.distance_squared(candidate);
        if dist < best_dist {
            best_dist = dist;
            best_idx = i;
        }
    }

    best_idx
}

//! Greedy palette reduction.
//!
//! The console shows 16 colors at once, drawn from a 32-entry catalog. An
//! oversized candidate palette is shrunk by repeatedly removing the entry
//! that the fewest pixels use, then repairing the index map so the next
//! choice sees up-to-date usage.

mod histogram;
mod strategy;

pub use histogram::Histogram;
pub use strategy::{FullReclassify, IncrementalReclassify, MeasureAndReduce};

use crate::api::DitherError;
use crate::color::Srgb;
use crate::dither::{self, DitherOptions};
use crate::output::IndexedImage;
use crate::palette::Palette;

/// Number of hardware color slots.
pub const TARGET_COLORS: usize = 16;

/// Classify an image and count how often each catalog index is used.
///
/// # Errors
///
/// [`DitherError::InvalidArgument`] for an empty palette or mismatched
/// dimensions.
pub fn measure(
    image: &[Srgb],
    width: usize,
    height: usize,
    palette: &Palette,
    options: &DitherOptions,
) -> Result<(IndexedImage, Histogram), DitherError> {
    let indexed = dither::dither_image(image, width, height, palette, options)?;
    let histogram = indexed.histogram();
    Ok((indexed, histogram))
}

/// Shrink `candidate` to [`TARGET_COLORS`] entries.
///
/// Palettes with 16 or fewer entries come back unchanged. Otherwise each
/// round removes the entry with the smallest pixel count (lowest position
/// on ties). Removal order follows usage as measured with `options`: exact
/// classification repairs the index map incrementally, while a dithering
/// pass re-dithers the whole image after each removal.
///
/// The result keeps the relative order of the surviving entries.
///
/// # Errors
///
/// [`DitherError::InvalidArgument`] for an empty image when reduction is
/// needed, or mismatched dimensions.
///
/// # Example
///
/// ```
/// use pico_dither::{reduce, DitherOptions, Palette, Srgb};
///
/// let pixels = vec![Srgb::from_u8(0, 0, 0); 4];
/// let reduced = reduce(&pixels, 2, 2, Palette::full(), &DitherOptions::exact()).unwrap();
/// assert_eq!(reduced.len(), 16);
/// assert!(reduced.entries().contains(&0));
/// ```
pub fn reduce(
    image: &[Srgb],
    width: usize,
    height: usize,
    candidate: Palette,
    options: &DitherOptions,
) -> Result<Palette, DitherError> {
    if candidate.len() <= TARGET_COLORS {
        return Ok(candidate);
    }
    if image.is_empty() {
        return Err(DitherError::invalid(format!(
            "cannot reduce {} candidates against an empty image",
            candidate.len()
        )));
    }
    dither::validate(image, width, height, &candidate)?;

    if options.is_dithering() {
        let strategy = FullReclassify::new(image, width, height, options.clone());
        run(&strategy, candidate, "full")
    } else {
        let strategy = IncrementalReclassify::new(image);
        run(&strategy, candidate, "incremental")
    }
}

/// The removal loop shared by both strategies.
fn run<S: MeasureAndReduce>(
    strategy: &S,
    mut palette: Palette,
    strategy_name: &str,
) -> Result<Palette, DitherError> {
    let (mut indices, mut histogram) = strategy.measure(&palette)?;
    tracing::info!(
        candidates = palette.len(),
        pixels = indices.len(),
        strategy = strategy_name,
        "Reducing palette"
    );

    while palette.len() > TARGET_COLORS {
        let worst = least_used(&palette, &histogram);
        let removed = palette.remove(worst);
        let count = histogram.take(removed);

        tracing::debug!(
            catalog_index = removed,
            count,
            remaining = palette.len(),
            "Removed color"
        );

        if count == 0 {
            renumber(&mut indices, worst);
        } else {
            strategy.reclassify(&mut indices, &mut histogram, &palette, worst)?;
        }
    }

    tracing::info!(kept = ?palette.entries(), "Palette reduced");
    Ok(palette)
}

/// Position of the entry with the smallest count; first position wins ties.
fn least_used(palette: &Palette, histogram: &Histogram) -> usize {
    let mut worst = 0;
    let mut worst_count = u32::MAX;
    for (position, &index) in palette.entries().iter().enumerate() {
        let count = histogram.count(index);
        if count < worst_count {
            worst_count = count;
            worst = position;
        }
    }
    worst
}

/// Shift every index above `removed` down by one.
fn renumber(indices: &mut [u8], removed: usize) {
    let removed = removed as u8;
    for slot in indices.iter_mut() {
        if *slot > removed {
            *slot -= 1;
        }
    }
}

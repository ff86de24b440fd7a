//! Assign a reduced palette to the 16 hardware slots.

use crate::api::DitherError;
use crate::catalog::{self, PRIMARY_COUNT};
use crate::palette::Palette;

/// Lay out a 16-entry palette so that position equals hardware slot.
///
/// Primary colors (catalog index below 16) keep their own slot, so slot `n`
/// shows catalog color `n` whenever that color survived reduction. Secret
/// colors fill the remaining slots lowest first, in their input order.
///
/// # Errors
///
/// [`DitherError::PreconditionViolation`] unless the palette has exactly 16
/// entries.
///
/// # Example
///
/// ```
/// use pico_dither::{arrange, Palette};
///
/// let reduced = Palette::new(&[16, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 31]).unwrap();
/// let slots = arrange(&reduced).unwrap();
/// assert_eq!(slots.catalog_index(0), 16);
/// assert_eq!(slots.catalog_index(15), 31);
/// assert_eq!(slots.catalog_index(7), 7);
/// ```
pub fn arrange(reduced: &Palette) -> Result<Palette, DitherError> {
    if reduced.len() != PRIMARY_COUNT {
        return Err(DitherError::precondition(format!(
            "arrangement needs exactly {PRIMARY_COUNT} colors, palette has {}",
            reduced.len()
        )));
    }

    let mut slots: [Option<u8>; PRIMARY_COUNT] = [None; PRIMARY_COUNT];
    for &index in reduced.entries() {
        if !catalog::is_secret(index) {
            slots[index as usize] = Some(index);
        }
    }

    let mut free = 0;
    for &index in reduced.entries() {
        if !catalog::is_secret(index) {
            continue;
        }
        while slots[free].is_some() {
            free += 1;
        }
        slots[free] = Some(index);
    }

    let arranged: Vec<u8> = slots.iter().flatten().copied().collect();
    tracing::debug!(slots = ?arranged, "Arranged palette");
    Ok(Palette::new(&arranged)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ErrorKind;

    #[test]
    fn test_primaries_stay_in_place() {
        let reversed: Vec<u8> = (0..16).rev().collect();
        let arranged = arrange(&Palette::new(&reversed).unwrap()).unwrap();
        assert_eq!(arranged.entries(), &(0..16).collect::<Vec<u8>>()[..]);
    }

    #[test]
    fn test_secrets_fill_lowest_free_slots_in_order() {
        let input = [20, 1, 3, 17, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 30];
        let arranged = arrange(&Palette::new(&input).unwrap()).unwrap();
        assert_eq!(
            arranged.entries(),
            &[20, 1, 17, 3, 30, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]
        );
    }

    #[test]
    fn test_all_secrets() {
        let input: Vec<u8> = (16..32).collect();
        let arranged = arrange(&Palette::new(&input).unwrap()).unwrap();
        assert_eq!(arranged.entries(), &input[..]);
    }

    #[test]
    fn test_wrong_length_is_precondition_violation() {
        for palette in [Palette::primaries().without(&[0]), Palette::full()] {
            let err = arrange(&palette).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::PreconditionViolation);
        }
    }
}

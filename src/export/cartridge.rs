//! `.p8` cartridge text.
//!
//! The cartridge holds a tiny Lua program that installs the slot table and
//! draws the sprite sheet, plus the image itself in the `__gfx__` section.

use pico_dither::catalog::{self, PRIMARY_COUNT};
use pico_dither::IndexedImage;

use crate::error::ConvertError;

/// Sprite sheet side in pixels.
pub const SHEET_SIZE: usize = 128;

const HEADER: &str = "pico-8 cartridge // http://www.pico-8.com\nversion 27\n";

/// Serialize an arranged image as cartridge text.
///
/// Each palette position is a hardware slot. Slots whose catalog color
/// differs from the slot's default get an entry in a `pal` call; the secret
/// bank is enabled with `poke(0x5f2e,1)` when any slot needs it.
pub fn encode_cartridge(image: &IndexedImage) -> Result<String, ConvertError> {
    let palette = image.palette();
    if palette.len() > PRIMARY_COUNT {
        return Err(ConvertError::Precondition(format!(
            "cartridge palette has {} colors, the console shows at most {PRIMARY_COUNT}",
            palette.len()
        )));
    }
    if image.width() == 0 || image.height() == 0 {
        return Err(ConvertError::Precondition(format!(
            "image is {}x{}, a cartridge needs at least one pixel",
            image.width(),
            image.height()
        )));
    }
    if image.width() > SHEET_SIZE || image.height() > SHEET_SIZE {
        return Err(ConvertError::Precondition(format!(
            "image is {}x{}, the sprite sheet holds at most {SHEET_SIZE}x{SHEET_SIZE}",
            image.width(),
            image.height()
        )));
    }

    let mut out = String::with_capacity(HEADER.len() + 256 + image.height() * (SHEET_SIZE + 1));
    out.push_str(HEADER);
    out.push_str("__lua__\n");
    out.push_str("pal()\n");
    if palette.uses_secret_bank() {
        out.push_str("poke(0x5f2e,1)\n");
    }

    let remaps: Vec<String> = palette
        .entries()
        .iter()
        .enumerate()
        .filter_map(|(slot, &index)| {
            let code = catalog::index_to_code(index) as usize;
            (slot != code).then(|| format!("[{slot}]={code}"))
        })
        .collect();
    if !remaps.is_empty() {
        out.push_str(&format!("pal({{{}}},1)\n", remaps.join(",")));
    }

    out.push_str("palt(0,false) spr(0,0,0,16,16) while true do end\n");
    out.push_str("__gfx__\n");

    for row in image.rows() {
        out.extend(
            row.iter()
                .map(|&slot| char::from_digit(u32::from(slot), 16).unwrap_or('0')),
        );
        for _ in row.len()..SHEET_SIZE {
            out.push('0');
        }
        out.push('\n');
    }

    Ok(out)
}

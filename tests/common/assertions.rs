//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use std::path::Path;

const HEADER: &str = "pico-8 cartridge // http://www.pico-8.com\nversion 27\n__lua__\n";

/// Read a cartridge and check its overall layout.
pub fn read_cartridge(path: &Path) -> String {
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Cannot read cartridge {}: {e}", path.display()));
    assert!(
        text.starts_with(HEADER),
        "Cartridge should start with the header, got: {}",
        &text[..text.len().min(80)]
    );
    assert!(
        text.contains("\n__gfx__\n"),
        "Cartridge should contain a __gfx__ section"
    );
    text
}

/// The `__gfx__` rows as slot numbers, checking each row is 128 hex digits.
pub fn gfx_rows(cartridge: &str) -> Vec<Vec<u8>> {
    let (_, gfx) = cartridge
        .split_once("__gfx__\n")
        .expect("Cartridge has no __gfx__ section");
    gfx.lines()
        .map(|line| {
            assert_eq!(line.len(), 128, "gfx row should be 128 digits: {line}");
            line.chars()
                .map(|c| {
                    c.to_digit(16)
                        .unwrap_or_else(|| panic!("Not a hex digit in gfx row: {c:?}"))
                        as u8
                })
                .collect()
        })
        .collect()
}

/// The Lua section of a cartridge.
pub fn lua_section(cartridge: &str) -> &str {
    let start = cartridge.find("__lua__\n").expect("No __lua__ section") + "__lua__\n".len();
    let end = cartridge.find("__gfx__").expect("No __gfx__ section");
    &cartridge[start..end]
}

/// Assert a file holds a PNG of the given size.
pub fn assert_png_file(path: &Path, width: u32, height: u32) {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Cannot read PNG {}: {e}", path.display()));
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n", "Expected a PNG signature");
    let img = image::load_from_memory(&bytes).expect("Preview should decode");
    assert_eq!((img.width(), img.height()), (width, height));
}

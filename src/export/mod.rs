pub mod cartridge;
pub mod preview;

pub use cartridge::{encode_cartridge, SHEET_SIZE};
pub use preview::encode_preview;

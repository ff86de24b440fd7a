//! Image adjustment before palette reduction.
//!
//! Resizing happens in the application, where the image decoder lives; this
//! module only holds the per-pixel tone adjustment.

mod adjust;

pub use adjust::Adjustment;

//! Public API for the pico-dither crate.
//!
//! This module provides the high-level API: the [`PicoConverter`] builder
//! and the [`DitherError`] unified error type.

mod builder;
mod error;

pub use builder::PicoConverter;
pub use error::{DitherError, ErrorKind};

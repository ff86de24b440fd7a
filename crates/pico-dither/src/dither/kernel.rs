//! Error diffusion kernel definitions.

/// An error diffusion kernel.
///
/// Each entry is a `(dx, dy, weight)` triple naming a neighbor that has not
/// been visited yet. A neighbor receives `error * weight / divisor`.
///
/// `max_dy` is the furthest row the kernel reaches, so the error buffer
/// needs `max_dy + 1` rows.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries.
    ///
    /// `dx` is mirrored on right-to-left rows.
    pub entries: &'static [(i32, i32, u8)],

    /// Shared denominator of all weights.
    pub divisor: u8,

    /// Maximum dy value in entries.
    pub max_dy: usize,
}

impl Kernel {
    /// Sum of all weights divided by the divisor.
    pub fn propagation(&self) -> f32 {
        let total: u32 = self.entries.iter().map(|&(_, _, w)| w as u32).sum();
        total as f32 / self.divisor as f32
    }
}

/// Floyd-Steinberg kernel.
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
    max_dy: 1,
};

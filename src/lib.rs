//! Pyramerge - A stacked-pyramid tile merging puzzle
//!
//! Core modules:
//! - `sim`: Deterministic game core (pyramid, support graph, hit testing, selection)
//! - `effects`: Time-bounded merge effects, driven by the frame loop
//! - `renderer`: WebGPU rendering pipeline and scene building
//! - `settings`: Player preferences

pub mod effects;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use effects::{CombinationEffect, Effects};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Cell sprite dimensions in pixels
    pub const CELL_WIDTH: f32 = 64.0;
    pub const CELL_HEIGHT: f32 = 74.0;

    /// Hexagon footprint: y offset of the upper corners for a 74px cell
    pub const HEX_SHOULDER: f32 = 18.0;
    /// Hexagon footprint: y offset of the lower corners for a 74px cell
    pub const HEX_HIP: f32 = 55.0;

    /// Pyramid defaults
    pub const LAYER_COUNT: usize = 6;
    /// Tallest pyramid a deal accepts (5984 cells)
    pub const MAX_LAYER_COUNT: usize = 32;
    pub const GROUP_COUNT: u8 = 4;
    /// Seed values handed to every group (14 per group fills 56 cells)
    pub const GROUP_VALUES: [u32; 14] = [32, 32, 16, 8, 8, 8, 4, 4, 4, 4, 2, 2, 2, 2];

    /// Offset between the pointer and a held cell's anchor
    pub const GRAB_OFFSET: (f32, f32) = (28.0, 16.0);

    /// Merge effect lifetime, force-cancelled after this long
    pub const EFFECT_DURATION_MS: f64 = 2500.0;
    /// Per-frame drift of a merge effect
    pub const EFFECT_RISE_PER_FRAME: f32 = 1.0;
    pub const EFFECT_SPIN_PER_FRAME: f32 = 1.0; // degrees
}

/// Triangular number `k * (k + 1) / 2`
#[inline]
pub const fn triangular(k: usize) -> usize {
    k * (k + 1) / 2
}

/// Total number of cells in a pyramid with `layer_count` layers
pub const fn pyramid_cell_count(layer_count: usize) -> usize {
    let mut total = 0;
    let mut k = 1;
    while k <= layer_count {
        total += triangular(k);
        k += 1;
    }
    total
}

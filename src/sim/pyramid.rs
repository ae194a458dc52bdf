//! Pyramid construction
//!
//! Layers are laid out widest first. A layer of size `i` is a triangle of rows
//! `1..=i`, row `j` holding `j` cells, rows receding H/4 apart on screen. Each
//! narrower layer starts H/2 higher, so cell (row, col) of one layer sits right
//! above cell (row, col) of the layer below it.

use glam::Vec2;
use rand::Rng;

use super::distribution::Distribution;
use super::error::BuildError;
use super::state::{Board, Cell};
use super::support::SupportGraph;
use crate::consts::{CELL_HEIGHT, CELL_WIDTH, LAYER_COUNT, MAX_LAYER_COUNT};
use crate::{pyramid_cell_count, triangular};

/// Where and how big to lay the pyramid out
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PyramidLayout {
    pub layer_count: usize,
    /// Horizontal centre and vertical start of the widest layer
    pub origin: Vec2,
    pub cell_size: Vec2,
}

impl PyramidLayout {
    pub fn new(layer_count: usize, origin: Vec2) -> Self {
        Self {
            layer_count,
            origin,
            cell_size: Vec2::new(CELL_WIDTH, CELL_HEIGHT),
        }
    }

    pub fn cell_count(&self) -> usize {
        pyramid_cell_count(self.layer_count)
    }

    /// Reject layer counts that cannot be dealt, before any sizing arithmetic
    pub fn check(&self) -> Result<(), BuildError> {
        match self.layer_count {
            0 => Err(BuildError::NoLayers),
            n if n > MAX_LAYER_COUNT => Err(BuildError::TooManyLayers {
                layer_count: n,
                max: MAX_LAYER_COUNT,
            }),
            _ => Ok(()),
        }
    }
}

impl Default for PyramidLayout {
    fn default() -> Self {
        Self::new(LAYER_COUNT, Vec2::ZERO)
    }
}

/// Lay out every cell, deal it a tile and derive the support graph.
///
/// The distribution must hold exactly one tile per cell.
pub fn build<R: Rng + ?Sized>(
    layout: &PyramidLayout,
    mut distribution: Distribution,
    rng: &mut R,
) -> Result<Board, BuildError> {
    layout.check()?;

    let cells_needed = layout.cell_count();
    let tiles = distribution.len();
    if tiles < cells_needed {
        return Err(BuildError::DistributionExhausted {
            cells: cells_needed,
            tiles,
        });
    }
    if tiles > cells_needed {
        return Err(BuildError::DistributionSurplus {
            cells: cells_needed,
            tiles,
        });
    }

    let (w, h) = (layout.cell_size.x, layout.cell_size.y);
    let mut cells: Vec<Cell> = Vec::with_capacity(cells_needed);
    let mut supports = SupportGraph::new();
    let mut start_y = layout.origin.y;

    for size in (1..=layout.layer_count).rev() {
        let tier = layout.layer_count - size;

        for row in 1..=size {
            let y = start_y + row as f32 * h / 4.0;
            let mut x = layout.origin.x - row as f32 * w / 2.0;

            for _ in 0..row {
                let n = cells.len();
                let Some(tile) = distribution.take_random(rng) else {
                    // Sized up front, so running dry here means the count check is wrong
                    return Err(BuildError::DistributionExhausted {
                        cells: cells_needed,
                        tiles,
                    });
                };

                let layer = tier + row - 1;
                cells.push(
                    Cell::new(Vec2::new(x, y), tier, layer, tile.value, tile.group)
                        .with_size(layout.cell_size),
                );
                x += w;

                if row < size {
                    supports.set_front_pair(n, n + row, n + row + 1);
                }
                if size < layout.layer_count {
                    supports.set_rests_on(n, n - triangular(size + 1));
                }
            }
        }

        start_y -= h / 2.0;
    }

    debug_assert!(distribution.is_empty());
    Ok(Board::new(cells, supports))
}

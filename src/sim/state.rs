//! Game state and core types
//!
//! Cells live in one index-addressed vector owned by the board. Nothing is ever
//! removed or reordered; merged cells are only disabled.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::distribution::{Distribution, ValueSet};
use super::error::BuildError;
use super::geometry::Footprint;
use super::pyramid::{PyramidLayout, build};
use super::selection::SelectionController;
use super::support::SupportGraph;
use crate::consts::{CELL_HEIGHT, CELL_WIDTH};

/// One pyramid piece
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Sprite top-left anchor (follows the pointer while held)
    pub position: Vec2,
    /// Where the cell was placed; a cancelled pick returns here
    pub origin: Vec2,
    /// Pyramid level, 0 = widest bottom level
    pub tier: usize,
    /// Draw depth; higher wins hit tests
    pub layer: usize,
    pub value: u32,
    pub group: u8,
    /// Set once merged away
    pub disabled: bool,
    /// Sprite size
    #[serde(default = "default_cell_size")]
    pub size: Vec2,
}

fn default_cell_size() -> Vec2 {
    Vec2::new(CELL_WIDTH, CELL_HEIGHT)
}

impl Cell {
    pub fn new(position: Vec2, tier: usize, layer: usize, value: u32, group: u8) -> Self {
        Self {
            position,
            origin: position,
            tier,
            layer,
            value,
            group,
            disabled: false,
            size: default_cell_size(),
        }
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    /// Hexagon at the cell's current position
    pub fn footprint(&self) -> Footprint {
        Footprint::new(self.position, self.size)
    }

    /// Same group and same value
    pub fn can_merge_with(&self, other: &Cell) -> bool {
        self.group == other.group && self.value == other.value
    }

    pub fn return_to_origin(&mut self) {
        self.position = self.origin;
    }
}

/// All cells plus the support graph between them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub cells: Vec<Cell>,
    pub supports: SupportGraph,
}

impl Board {
    pub fn new(cells: Vec<Cell>, supports: SupportGraph) -> Self {
        Self { cells, supports }
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Indices of cells still in play
    pub fn active(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.disabled)
            .map(|(i, _)| i)
    }

    /// Active cells nothing rests on
    pub fn uncovered(&self) -> impl Iterator<Item = usize> + '_ {
        self.active().filter(|&i| !self.supports.is_covered(i))
    }

    pub fn is_cleared(&self) -> bool {
        self.active().count() <= 1
    }
}

/// Something that happened in response to pointer input, for the shell to present
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Cell lifted; `released` is the cell it was resting on, if any
    Picked { index: usize, released: Option<usize> },
    /// Pick refused because something rests on the cell
    Blocked { index: usize },
    /// Held cell went back to its origin
    Returned { index: usize, restored: Option<usize> },
    /// `source` merged into `target`, whose value is now `value`
    Merged {
        source: usize,
        target: usize,
        value: u32,
        at: Vec2,
    },
}

/// Rules a new game is dealt with
#[derive(Debug, Clone, PartialEq)]
pub struct GameRules {
    pub layout: PyramidLayout,
    pub group_count: u8,
    pub values: ValueSet,
    pub grab_offset: Vec2,
}

/// Complete state of one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Deal seed for reproducibility
    pub seed: u64,
    pub board: Board,
    pub selection: SelectionController,
    /// Sum of the values produced by merges
    pub score: u64,
    pub merges: u32,
}

impl GameState {
    /// Deal a fresh pyramid
    pub fn new(seed: u64, rules: &GameRules) -> Result<Self, BuildError> {
        rules.layout.check()?;
        let mut rng = Pcg32::seed_from_u64(seed);
        let total = rules.layout.cell_count();
        let distribution =
            Distribution::sized_for(total, rules.group_count, &rules.values, &mut rng)?;
        let board = build(&rules.layout, distribution, &mut rng)?;

        log::info!(
            "Dealt {} cells over {} layers (seed {})",
            board.cells.len(),
            rules.layout.layer_count,
            seed
        );

        Ok(Self::from_board(seed, board, rules.grab_offset))
    }

    /// Wrap an existing board (tests, hand-made puzzles)
    pub fn from_board(seed: u64, board: Board, grab_offset: Vec2) -> Self {
        Self {
            seed,
            board,
            selection: SelectionController::new(grab_offset),
            score: 0,
            merges: 0,
        }
    }
}

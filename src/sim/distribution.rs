//! Tile distribution: the shuffled multiset of (group, value) pairs dealt onto the pyramid

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::error::BuildError;

/// A (group, value) pair dealt to one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub group: u8,
    pub value: u32,
}

impl Tile {
    pub const fn new(group: u8, value: u32) -> Self {
        Self { group, value }
    }
}

/// Per-group seed values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueSet(pub Vec<u32>);

impl ValueSet {
    /// Repeat (or cut) the list cyclically to exactly `len` entries
    pub fn fitted(&self, len: usize) -> Vec<u32> {
        self.0.iter().copied().cycle().take(len).collect()
    }

    /// True when every distinct value occurs an even number of times,
    /// so each dealt tile has at least one same-group partner.
    pub fn has_even_multiplicities(&self) -> bool {
        let mut sorted = self.0.clone();
        sorted.sort_unstable();
        sorted
            .chunk_by(|a, b| a == b)
            .all(|run| run.len().is_multiple_of(2))
    }
}

/// Tiles waiting to be dealt. Consumed one random entry at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Distribution {
    tiles: Vec<Tile>,
}

impl Distribution {
    /// Shuffle a copy of `values` per group, tag with the group, concatenate
    /// and shuffle the whole sequence.
    pub fn generate<R: Rng + ?Sized>(group_count: u8, values: &[u32], rng: &mut R) -> Self {
        let mut group_values = values.to_vec();
        let mut tiles = Vec::with_capacity(group_count as usize * values.len());

        for group in 0..group_count {
            group_values.shuffle(rng);
            tiles.extend(group_values.iter().map(|&value| Tile { group, value }));
        }

        tiles.shuffle(rng);
        Self { tiles }
    }

    /// Distribution holding exactly `total` tiles split evenly across groups
    pub fn sized_for<R: Rng + ?Sized>(
        total: usize,
        group_count: u8,
        values: &ValueSet,
        rng: &mut R,
    ) -> Result<Self, BuildError> {
        if group_count == 0 || values.0.is_empty() {
            return Err(BuildError::EmptyDistribution);
        }
        if !total.is_multiple_of(group_count as usize) {
            return Err(BuildError::UnevenGroups { total, group_count });
        }

        let per_group = values.fitted(total / group_count as usize);
        Ok(Self::generate(group_count, &per_group, rng))
    }

    /// Use the given tiles as-is (tests, replays)
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Remove and return a uniformly chosen remaining tile
    pub fn take_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Tile> {
        if self.tiles.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.tiles.len());
        Some(self.tiles.swap_remove(index))
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

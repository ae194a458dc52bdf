//! Support graph: which cell rests on which
//!
//! Stored per cell as a small fixed-shape record. A cell is covered while any
//! other cell's `rests_on` points at it. Picking a cell temporarily lifts its own
//! `rests_on` edge; the edge comes back on a cancelled pick and is gone for good
//! once the picked cell merges away.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::state::Cell;

/// Support links recorded for one cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportEntry {
    /// Front-left cell of the triad below whatever rests on this cell
    pub left_supports: Option<usize>,
    /// Front-right cell of that triad
    pub right_supports: Option<usize>,
    /// Cell directly below that this one rests on
    pub rests_on: Option<usize>,
}

impl SupportEntry {
    pub fn is_empty(&self) -> bool {
        self.left_supports.is_none() && self.right_supports.is_none() && self.rests_on.is_none()
    }

    /// Drop every link that points at `index`
    fn forget(&mut self, index: usize) {
        for link in [
            &mut self.left_supports,
            &mut self.right_supports,
            &mut self.rests_on,
        ] {
            if *link == Some(index) {
                *link = None;
            }
        }
    }
}

/// A `rests_on` edge lifted during a pick, kept so a cancel can put it back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleasedSupport {
    /// Cell that was underneath
    pub supporter: usize,
    /// Cell that was resting on it (the picked cell)
    pub former_top: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportGraph {
    entries: BTreeMap<usize, SupportEntry>,
}

impl SupportGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(&self, index: usize) -> Option<&SupportEntry> {
        self.entries.get(&index)
    }

    pub fn entries(&self) -> impl Iterator<Item = (usize, &SupportEntry)> {
        self.entries.iter().map(|(&i, e)| (i, e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn set_front_pair(&mut self, index: usize, left: usize, right: usize) {
        let entry = self.entries.entry(index).or_default();
        entry.left_supports = Some(left);
        entry.right_supports = Some(right);
    }

    pub(crate) fn set_rests_on(&mut self, index: usize, supporter: usize) {
        self.entries.entry(index).or_default().rests_on = Some(supporter);
    }

    /// True iff some cell rests on `index`
    pub fn is_covered(&self, index: usize) -> bool {
        self.covered_by(index).is_some()
    }

    /// The cell resting on `index`, if any
    pub fn covered_by(&self, index: usize) -> Option<usize> {
        self.entries
            .iter()
            .find(|&(&top, e)| top != index && e.rests_on == Some(index))
            .map(|(&top, _)| top)
    }

    /// The cell `index` rests on, if any
    pub fn supporter_of(&self, index: usize) -> Option<usize> {
        self.entries.get(&index).and_then(|e| e.rests_on)
    }

    /// Lift `index` off its supporter. Returns the token needed to undo it.
    pub fn release_support(&mut self, index: usize) -> Option<ReleasedSupport> {
        let entry = self.entries.get_mut(&index)?;
        let supporter = entry.rests_on.take()?;
        if entry.is_empty() {
            self.entries.remove(&index);
        }

        log::debug!("Temporarily releasing cell {} (cell {} lifted)", supporter, index);
        Some(ReleasedSupport {
            supporter,
            former_top: index,
        })
    }

    /// Put a released edge back, unless either cell has since been disabled.
    /// Returns whether the edge was restored.
    pub fn restore_support(&mut self, token: ReleasedSupport, cells: &[Cell]) -> bool {
        let gone = |i: usize| cells.get(i).is_none_or(|c| c.disabled);
        if gone(token.former_top) || gone(token.supporter) {
            log::debug!("Release of cell {} is permanent", token.supporter);
            return false;
        }

        log::debug!("Restoring support {:?}", token);
        self.set_rests_on(token.former_top, token.supporter);
        true
    }

    /// Remove every link to `index` (and its own entry) once it has merged away
    pub fn clear_references_to(&mut self, index: usize) {
        self.entries.remove(&index);
        for entry in self.entries.values_mut() {
            entry.forget(index);
        }
        self.entries.retain(|_, e| !e.is_empty());
    }
}

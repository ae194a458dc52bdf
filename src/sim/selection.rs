//! Pick / drag / drop state machine
//!
//! Idle --pick--> Holding --release--> (merge | return) --> Idle
//!
//! Every transition runs to completion on the board it is handed; there is no
//! deferred work. Invalid picks and drops are outcomes, not errors.

use glam::Vec2;

use super::geometry::Point;
use super::hit::hit_test;
use super::state::Board;
use super::support::ReleasedSupport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// `index` follows the pointer
    Holding { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// Nothing under the pointer
    Missed,
    /// Something rests on the cell under the pointer
    Blocked { index: usize },
    /// Cell lifted; `released` is the cell it was resting on
    Picked {
        index: usize,
        released: Option<usize>,
    },
    /// Already holding a cell
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    NotHolding,
    /// Back to its origin; `restored` is the supporter covered again, if any
    Returned {
        index: usize,
        restored: Option<usize>,
    },
    Merged {
        source: usize,
        target: usize,
        value: u32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionController {
    phase: Phase,
    released: Option<ReleasedSupport>,
    grab_offset: Vec2,
}

impl SelectionController {
    pub fn new(grab_offset: Vec2) -> Self {
        Self {
            phase: Phase::Idle,
            released: None,
            grab_offset,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selected(&self) -> Option<usize> {
        match self.phase {
            Phase::Holding { index } => Some(index),
            Phase::Idle => None,
        }
    }

    /// Pending temporary release, if any
    pub fn released_support(&self) -> Option<ReleasedSupport> {
        self.released
    }

    pub fn pick_at(&mut self, board: &mut Board, point: Point) -> PickOutcome {
        if self.selected().is_some() {
            return PickOutcome::Busy;
        }

        let Some(index) = hit_test(point, &board.cells, None) else {
            return PickOutcome::Missed;
        };
        if board.supports.is_covered(index) {
            log::debug!("Cell {} is covered, pick ignored", index);
            return PickOutcome::Blocked { index };
        }

        // Only one release is ever outstanding
        let token = board.supports.release_support(index);
        self.released = token;
        self.phase = Phase::Holding { index };

        log::debug!("Picked cell {}", index);
        PickOutcome::Picked {
            index,
            released: token.map(|t| t.supporter),
        }
    }

    /// Drag the held cell; a no-op while idle
    pub fn move_to(&mut self, board: &mut Board, point: Point) {
        if let Some(cell) = self.selected().and_then(|i| board.cells.get_mut(i)) {
            cell.position = point - self.grab_offset;
        }
    }

    pub fn release_at(&mut self, board: &mut Board, point: Point) -> DropOutcome {
        let Some(source) = self.selected() else {
            return DropOutcome::NotHolding;
        };

        let target = hit_test(point, &board.cells, Some(source))
            .filter(|&t| board.cells[t].can_merge_with(&board.cells[source]));
        // A doubling past u32::MAX is refused like any other bad drop
        let merge = target.and_then(|t| match board.cells[t].value.checked_mul(2) {
            Some(value) => Some((t, value)),
            None => {
                log::warn!("Cell {} cannot grow past {}", t, board.cells[t].value);
                None
            }
        });

        let outcome = match merge {
            Some((target, value)) => {
                board.cells[target].value = value;
                board.cells[source].disabled = true;
                board.supports.clear_references_to(source);
                // Whatever the source was holding down stays free
                self.released = None;

                log::info!("Merged cell {} into cell {} (now {})", source, target, value);
                DropOutcome::Merged {
                    source,
                    target,
                    value,
                }
            }
            None => {
                board.cells[source].return_to_origin();
                let restored = self
                    .released
                    .take()
                    .filter(|&token| board.supports.restore_support(token, &board.cells))
                    .map(|token| token.supporter);

                DropOutcome::Returned {
                    index: source,
                    restored,
                }
            }
        };

        self.phase = Phase::Idle;
        outcome
    }
}

impl Default for SelectionController {
    fn default() -> Self {
        let (x, y) = crate::consts::GRAB_OFFSET;
        Self::new(Vec2::new(x, y))
    }
}

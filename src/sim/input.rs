//! Pointer input dispatch
//!
//! The shell turns mouse/touch events into `PointerInput` (canvas pixels) and
//! feeds them here one at a time.

use glam::Vec2;

use super::selection::{DropOutcome, PickOutcome};
use super::state::{GameEvent, GameState};

/// Abstract pointer events
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    /// Pointer went down
    Pick(Vec2),
    /// Pointer moved (only matters while holding)
    Move(Vec2),
    /// Pointer went up
    Release(Vec2),
}

/// Apply one input to the game, returning what the shell should present
pub fn apply(state: &mut GameState, input: PointerInput) -> Option<GameEvent> {
    match input {
        PointerInput::Pick(point) => match state.selection.pick_at(&mut state.board, point) {
            PickOutcome::Picked { index, released } => Some(GameEvent::Picked { index, released }),
            PickOutcome::Blocked { index } => Some(GameEvent::Blocked { index }),
            PickOutcome::Missed | PickOutcome::Busy => None,
        },
        PointerInput::Move(point) => {
            state.selection.move_to(&mut state.board, point);
            None
        }
        PointerInput::Release(point) => {
            match state.selection.release_at(&mut state.board, point) {
                DropOutcome::NotHolding => None,
                DropOutcome::Returned { index, restored } => {
                    Some(GameEvent::Returned { index, restored })
                }
                DropOutcome::Merged {
                    source,
                    target,
                    value,
                } => {
                    state.score += u64::from(value);
                    state.merges += 1;
                    if state.board.is_cleared() {
                        log::info!("Board cleared after {} merges", state.merges);
                    }
                    Some(GameEvent::Merged {
                        source,
                        target,
                        value,
                        at: state.board.cells[target].position,
                    })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Board, Cell};
    use crate::sim::support::SupportGraph;

    fn game() -> GameState {
        let board = Board::new(
            vec![
                Cell::new(Vec2::new(0.0, 0.0), 0, 0, 8, 2),
                Cell::new(Vec2::new(100.0, 0.0), 0, 0, 8, 2),
                Cell::new(Vec2::new(200.0, 0.0), 0, 0, 8, 2),
            ],
            SupportGraph::new(),
        );
        GameState::from_board(0, board, Vec2::new(28.0, 16.0))
    }

    #[test]
    fn test_pick_move_merge_scores() {
        let mut state = game();
        let drop = Vec2::new(132.0, 37.0);

        assert_eq!(
            apply(&mut state, PointerInput::Pick(Vec2::new(32.0, 37.0))),
            Some(GameEvent::Picked {
                index: 0,
                released: None
            })
        );
        assert_eq!(apply(&mut state, PointerInput::Move(drop)), None);
        assert_eq!(
            apply(&mut state, PointerInput::Release(drop)),
            Some(GameEvent::Merged {
                source: 0,
                target: 1,
                value: 16,
                at: Vec2::new(100.0, 0.0),
            })
        );
        assert_eq!(state.score, 16);
        assert_eq!(state.merges, 1);
        assert!(!state.board.is_cleared());
    }

    #[test]
    fn test_events_for_noops() {
        let mut state = game();
        assert_eq!(
            apply(&mut state, PointerInput::Pick(Vec2::new(-100.0, 0.0))),
            None
        );
        assert_eq!(
            apply(&mut state, PointerInput::Release(Vec2::new(32.0, 37.0))),
            None
        );
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_release_off_canvas_returns_cell() {
        let mut state = game();
        let outside = Vec2::new(-40.0, -25.0);
        apply(&mut state, PointerInput::Pick(Vec2::new(132.0, 37.0)));
        apply(&mut state, PointerInput::Move(outside));
        assert_eq!(
            apply(&mut state, PointerInput::Release(outside)),
            Some(GameEvent::Returned {
                index: 1,
                restored: None
            })
        );
        assert_eq!(state.selection.selected(), None);
        assert_eq!(state.board.cells[1].position, Vec2::new(100.0, 0.0));
        // A later press starts a fresh pick instead of being swallowed
        assert!(matches!(
            apply(&mut state, PointerInput::Pick(Vec2::new(32.0, 37.0))),
            Some(GameEvent::Picked { index: 0, .. })
        ));
    }

    #[test]
    fn test_cancel_event() {
        let mut state = game();
        apply(&mut state, PointerInput::Pick(Vec2::new(232.0, 37.0)));
        assert_eq!(
            apply(&mut state, PointerInput::Release(Vec2::new(900.0, 0.0))),
            Some(GameEvent::Returned {
                index: 2,
                restored: None
            })
        );
        assert_eq!(state.board.cells[2].position, Vec2::new(200.0, 0.0));
    }
}

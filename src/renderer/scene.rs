//! Frame scene: turns game state into a flat vertex list, back to front

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::effects::Effects;
use crate::sim::GameState;

/// Value label height relative to cell height
const LABEL_SCALE: f32 = 0.16;
/// Label sits on the lit top face
const LABEL_OFFSET: Vec2 = Vec2::new(0.0, -0.12);

/// Cells in paint order: every active unheld cell by index, then the held cell
pub fn draw_order(state: &GameState) -> Vec<usize> {
    let held = state.selection.selected();
    let mut order: Vec<usize> = state.board.active().filter(|&i| Some(i) != held).collect();
    if let Some(i) = held.filter(|&i| !state.board.cells[i].disabled) {
        order.push(i);
    }
    order
}

/// Everything to draw this frame, in render-space pixels
pub fn build_scene(state: &GameState, effects: &Effects, show_values: bool) -> Vec<Vertex> {
    let order = draw_order(state);
    let mut vertices = Vec::with_capacity(order.len() * 18 * 4);

    for index in order {
        let cell = &state.board.cells[index];
        let footprint = cell.footprint();
        vertices.extend(shapes::cell_cube(&footprint, colors::group(cell.group)));

        if show_values {
            let label_height = cell.size.y * LABEL_SCALE;
            let anchor = footprint.center() + LABEL_OFFSET * cell.size.y;
            vertices.extend(shapes::number(
                cell.value,
                anchor,
                label_height,
                0.0,
                colors::VALUE_TEXT,
            ));
        }
    }

    for effect in effects.iter() {
        vertices.extend(shapes::number(
            effect.value,
            effect.pos,
            14.0,
            effect.angle,
            colors::EFFECT_TEXT,
        ));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Board, Cell, PointerInput, SupportGraph, apply};

    fn game() -> GameState {
        let board = Board::new(
            vec![
                Cell::new(Vec2::new(0.0, 0.0), 0, 0, 2, 0),
                Cell::new(Vec2::new(100.0, 0.0), 0, 0, 2, 0),
                Cell::new(Vec2::new(200.0, 0.0), 0, 0, 4, 1),
            ],
            SupportGraph::new(),
        );
        GameState::from_board(0, board, Vec2::new(28.0, 16.0))
    }

    #[test]
    fn test_draw_order_idle() {
        assert_eq!(draw_order(&game()), vec![0, 1, 2]);
    }

    #[test]
    fn test_held_cell_drawn_last() {
        let mut state = game();
        apply(&mut state, PointerInput::Pick(Vec2::new(32.0, 37.0)));
        assert_eq!(draw_order(&state), vec![1, 2, 0]);
    }

    #[test]
    fn test_disabled_not_drawn() {
        let mut state = game();
        apply(&mut state, PointerInput::Pick(Vec2::new(32.0, 37.0)));
        apply(&mut state, PointerInput::Release(Vec2::new(132.0, 37.0)));
        assert_eq!(draw_order(&state), vec![1, 2]);
    }

    #[test]
    fn test_scene_includes_effects() {
        let state = game();
        let effects = Effects::default();
        let plain = build_scene(&state, &effects, false);
        assert_eq!(plain.len(), 3 * 18);

        let mut effects = Effects::default();
        let mut rng = rand_pcg::Pcg32::new(1, 1);
        effects.spawn(Vec2::ZERO, 8, 0.0, &mut rng);
        let with_effect = build_scene(&state, &effects, false);
        assert_eq!(with_effect.len(), 3 * 18 + 7 * 6);
    }

    #[test]
    fn test_scene_labels_values() {
        let state = game();
        let labelled = build_scene(&state, &Effects::default(), true);
        // 2 -> five segments (twice), 4 -> four segments
        assert_eq!(labelled.len(), 3 * 18 + (5 + 5 + 4) * 6);
    }
}

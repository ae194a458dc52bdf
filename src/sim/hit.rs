//! Pointer hit testing against cell footprints

use super::geometry::Point;
use super::state::Cell;

/// Topmost active cell whose footprint contains `point`.
///
/// Disabled cells and `exclude` (the held cell) are skipped. Highest `layer`
/// wins; equal layers go to the higher index, which is drawn later.
pub fn hit_test(point: Point, cells: &[Cell], exclude: Option<usize>) -> Option<usize> {
    cells
        .iter()
        .enumerate()
        .filter(|&(i, c)| !c.disabled && Some(i) != exclude)
        .filter(|(_, c)| c.footprint().contains(point))
        .max_by_key(|&(i, c)| (c.layer, i))
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn cell_at(x: f32, y: f32, layer: usize) -> Cell {
        Cell::new(Vec2::new(x, y), 0, layer, 2, 0)
    }

    #[test]
    fn test_hit_single() {
        let cells = vec![cell_at(0.0, 0.0, 0)];
        assert_eq!(hit_test(Vec2::new(32.0, 37.0), &cells, None), Some(0));
    }

    #[test]
    fn test_miss_outside_all() {
        let cells = vec![cell_at(0.0, 0.0, 0), cell_at(64.0, 0.0, 0)];
        assert_eq!(hit_test(Vec2::new(500.0, 500.0), &cells, None), None);
        // Cut corner between the two hexagons
        assert_eq!(hit_test(Vec2::new(64.0, 2.0), &cells, None), None);
    }

    #[test]
    fn test_highest_layer_wins() {
        let cells = vec![cell_at(0.0, 0.0, 3), cell_at(0.0, 10.0, 1)];
        assert_eq!(hit_test(Vec2::new(32.0, 40.0), &cells, None), Some(0));
    }

    #[test]
    fn test_tie_goes_to_higher_index() {
        let cells = vec![cell_at(0.0, 0.0, 2), cell_at(0.0, 0.0, 2)];
        assert_eq!(hit_test(Vec2::new(32.0, 37.0), &cells, None), Some(1));
    }

    #[test]
    fn test_disabled_is_skipped() {
        let mut cells = vec![cell_at(0.0, 0.0, 0), cell_at(0.0, 0.0, 5)];
        cells[1].disabled = true;
        assert_eq!(hit_test(Vec2::new(32.0, 37.0), &cells, None), Some(0));
    }

    #[test]
    fn test_excluded_is_skipped() {
        let cells = vec![cell_at(0.0, 0.0, 0), cell_at(0.0, 0.0, 5)];
        assert_eq!(hit_test(Vec2::new(32.0, 37.0), &cells, Some(1)), Some(0));
        assert_eq!(hit_test(Vec2::new(32.0, 37.0), &cells[..1], Some(0)), None);
    }

    #[test]
    fn test_uses_current_position() {
        let mut cells = vec![cell_at(0.0, 0.0, 0)];
        cells[0].position = Vec2::new(200.0, 200.0);
        assert_eq!(hit_test(Vec2::new(32.0, 37.0), &cells, None), None);
        assert_eq!(hit_test(Vec2::new(232.0, 237.0), &cells, None), Some(0));
    }
}

//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::sim::Footprint;

/// Two triangles for a convex quad given in winding order
pub fn quad(a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    [
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(a.x, a.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}

/// Isometric cube filling a cell footprint: lit top face, two shaded side faces
pub fn cell_cube(footprint: &Footprint, color: [f32; 4]) -> Vec<Vertex> {
    let [left_top, top, right_top, right_bottom, bottom, left_bottom] = footprint.vertices;
    let center = footprint.center();

    let mut vertices = Vec::with_capacity(18);
    vertices.extend(quad(left_top, top, right_top, center, colors::shade(color, 1.25)));
    vertices.extend(quad(left_top, center, bottom, left_bottom, colors::shade(color, 0.85)));
    vertices.extend(quad(center, right_top, right_bottom, bottom, colors::shade(color, 0.65)));
    vertices
}

/// Seven-segment masks, bit 0 = top segment, clockwise, bit 6 = middle
const DIGIT_SEGMENTS: [u8; 10] = [0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F];

/// Segment rectangles (min, max) for a glyph of size `w` x `h`, stroke `t`
fn segment_rects(w: f32, h: f32, t: f32) -> [(Vec2, Vec2); 7] {
    let mid = h / 2.0;
    [
        (Vec2::new(0.0, 0.0), Vec2::new(w, t)),
        (Vec2::new(w - t, 0.0), Vec2::new(w, mid)),
        (Vec2::new(w - t, mid), Vec2::new(w, h)),
        (Vec2::new(0.0, h - t), Vec2::new(w, h)),
        (Vec2::new(0.0, mid), Vec2::new(t, h)),
        (Vec2::new(0.0, 0.0), Vec2::new(t, mid)),
        (Vec2::new(0.0, mid - t / 2.0), Vec2::new(w, mid + t / 2.0)),
    ]
}

/// Decimal number in seven-segment glyphs, centred on `anchor` and rotated
/// `angle_deg` degrees around it
pub fn number(
    value: u32,
    anchor: Vec2,
    height: f32,
    angle_deg: f32,
    color: [f32; 4],
) -> Vec<Vertex> {
    let digits: Vec<usize> = value
        .to_string()
        .bytes()
        .map(|b| (b - b'0') as usize)
        .collect();

    let w = height * 0.5;
    let t = (height * 0.14).max(1.0);
    let gap = height * 0.2;
    let total_w = digits.len() as f32 * w + (digits.len() - 1) as f32 * gap;
    let origin = anchor - Vec2::new(total_w / 2.0, height / 2.0);
    let rotation = Vec2::from_angle(angle_deg.to_radians());
    let place = |p: Vec2| anchor + rotation.rotate(p - anchor);

    let rects = segment_rects(w, height, t);
    let mut vertices = Vec::with_capacity(digits.len() * 7 * 6);

    for (i, &digit) in digits.iter().enumerate() {
        let glyph = origin + Vec2::new(i as f32 * (w + gap), 0.0);
        let mask = DIGIT_SEGMENTS[digit];

        for (bit, (min, max)) in rects.iter().enumerate() {
            if mask & (1 << bit) == 0 {
                continue;
            }
            let (min, max) = (glyph + *min, glyph + *max);
            vertices.extend(quad(
                place(min),
                place(Vec2::new(max.x, min.y)),
                place(max),
                place(Vec2::new(min.x, max.y)),
                color,
            ));
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{CELL_HEIGHT, CELL_WIDTH};

    #[test]
    fn test_cell_cube_covers_footprint_vertices() {
        let f = Footprint::new(Vec2::new(10.0, 10.0), Vec2::new(CELL_WIDTH, CELL_HEIGHT));
        let vertices = cell_cube(&f, colors::group(0));
        assert_eq!(vertices.len(), 18);
        for corner in f.vertices {
            assert!(
                vertices
                    .iter()
                    .any(|v| v.position == [corner.x, corner.y])
            );
        }
    }

    #[test]
    fn test_number_segment_counts() {
        // 8 lights all seven segments
        assert_eq!(number(8, Vec2::ZERO, 10.0, 0.0, colors::VALUE_TEXT).len(), 7 * 6);
        // 1 (two) + 6 (six)
        assert_eq!(number(16, Vec2::ZERO, 10.0, 0.0, colors::VALUE_TEXT).len(), 8 * 6);
        // 2 (five) + 0 (six) + 4 (four) + 8 (seven)
        assert_eq!(number(2048, Vec2::ZERO, 10.0, 0.0, colors::VALUE_TEXT).len(), 22 * 6);
    }

    #[test]
    fn test_number_is_centred() {
        let vertices = number(88, Vec2::new(50.0, 20.0), 10.0, 0.0, colors::VALUE_TEXT);
        let (min_x, max_x) = vertices.iter().fold((f32::MAX, f32::MIN), |(lo, hi), v| {
            (lo.min(v.position[0]), hi.max(v.position[0]))
        });
        assert!(((min_x + max_x) / 2.0 - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_number_rotation_keeps_distance() {
        let anchor = Vec2::new(5.0, 5.0);
        let flat = number(4, anchor, 10.0, 0.0, colors::VALUE_TEXT);
        let turned = number(4, anchor, 10.0, 90.0, colors::VALUE_TEXT);
        for (a, b) in flat.iter().zip(&turned) {
            let da = Vec2::from(a.position).distance(anchor);
            let db = Vec2::from(b.position).distance(anchor);
            assert!((da - db).abs() < 1e-3);
        }
    }
}

//! Minimal stroke font for shape labels.
//!
//! Glyphs are polylines on a small grid: x grows right, y grows up from the
//! baseline, capitals are 7 units tall and descenders reach -2. One unit is
//! [`UNIT_PX`] pixels at scale 1.0.

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;

pub const UNIT_PX: f32 = 3.0;

type Stroke = &'static [(i8, i8)];

const LOWER_BOWL: Stroke = &[(3, 3), (2, 4), (1, 4), (0, 3), (0, 1), (1, 0), (2, 0), (3, 1)];

fn glyph(c: char) -> Option<&'static [Stroke]> {
    let strokes: &'static [Stroke] = match c {
        'C' => &[&[(4, 6), (3, 7), (1, 7), (0, 6), (0, 1), (1, 0), (3, 0), (4, 1)]],
        'H' => &[&[(0, 0), (0, 7)], &[(4, 0), (4, 7)], &[(0, 4), (4, 4)]],
        'P' => &[&[(0, 0), (0, 7), (3, 7), (4, 6), (4, 4), (3, 3), (0, 3)]],
        'Q' => &[
            &[(1, 0), (3, 0), (4, 1), (4, 6), (3, 7), (1, 7), (0, 6), (0, 1), (1, 0)],
            &[(2, 2), (4, -1)],
        ],
        'S' => &[&[
            (4, 6), (3, 7), (1, 7), (0, 6), (0, 5), (1, 4), (3, 3), (4, 2), (4, 1), (3, 0), (1, 0), (0, 1),
        ]],
        'T' => &[&[(0, 7), (4, 7)], &[(2, 7), (2, 0)]],
        'a' => &[&[(3, 4), (3, 0)], LOWER_BOWL],
        'c' => &[&[(3, 3), (2, 4), (1, 4), (0, 3), (0, 1), (1, 0), (2, 0), (3, 1)]],
        'd' => &[&[(3, 7), (3, 0)], LOWER_BOWL],
        'e' => &[&[(0, 2), (3, 2), (3, 3), (2, 4), (1, 4), (0, 3), (0, 1), (1, 0), (3, 0)]],
        'g' => &[&[(3, 4), (3, -1), (2, -2), (1, -2), (0, -1)], LOWER_BOWL],
        'i' => &[&[(0, 0), (0, 4)], &[(0, 6), (0, 6)]],
        'l' => &[&[(0, 0), (0, 7)]],
        'n' => &[&[(0, 0), (0, 4)], &[(0, 3), (1, 4), (2, 4), (3, 3), (3, 0)]],
        'o' => &[&[(1, 0), (2, 0), (3, 1), (3, 3), (2, 4), (1, 4), (0, 3), (0, 1), (1, 0)]],
        'r' => &[&[(0, 0), (0, 4)], &[(0, 3), (1, 4), (3, 4)]],
        't' => &[&[(1, 6), (1, 1), (2, 0), (3, 0)], &[(0, 4), (2, 4)]],
        'u' => &[&[(0, 4), (0, 1), (1, 0), (2, 0), (3, 1)], &[(3, 4), (3, 0)]],
        'x' => &[&[(0, 0), (3, 4)], &[(0, 4), (3, 0)]],
        _ => return None,
    };
    Some(strokes)
}

/// Horizontal advance of a character in grid units
fn advance(c: char) -> i32 {
    match glyph(c) {
        Some(strokes) => {
            let width = strokes
                .iter()
                .flat_map(|s| s.iter())
                .map(|&(x, _)| x as i32)
                .max()
                .unwrap_or(0);
            width + 2
        }
        None => 4,
    }
}

/// Rendered width of `text` in pixels
pub fn text_width(text: &str, scale: f32) -> f32 {
    text.chars().map(advance).sum::<i32>() as f32 * UNIT_PX * scale
}

/// Draw `text` with its baseline starting at `origin` (bottom-left corner).
/// Characters without a glyph advance the pen but draw nothing.
pub fn draw_text_mut(
    canvas: &mut RgbImage,
    text: &str,
    origin: (i32, i32),
    scale: f32,
    thickness: u32,
    color: Rgb<u8>,
) {
    let unit = UNIT_PX * scale;
    let thickness = thickness.max(1) as i32;
    let lo = -(thickness - 1) / 2;
    let hi = thickness / 2;

    let mut pen_x = origin.0 as f32;
    let base_y = origin.1 as f32;

    for c in text.chars() {
        if let Some(strokes) = glyph(c) {
            for stroke in strokes {
                for pair in stroke.windows(2) {
                    let (x0, y0) = pair[0];
                    let (x1, y1) = pair[1];
                    let start = (pen_x + x0 as f32 * unit, base_y - y0 as f32 * unit);
                    let end = (pen_x + x1 as f32 * unit, base_y - y1 as f32 * unit);
                    for dy in lo..=hi {
                        for dx in lo..=hi {
                            draw_line_segment_mut(
                                canvas,
                                (start.0 + dx as f32, start.1 + dy as f32),
                                (end.0 + dx as f32, end.1 + dy as f32),
                                color,
                            );
                        }
                    }
                }
            }
        }
        pen_x += advance(c) as f32 * unit;
    }
}

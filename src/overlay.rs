//! Debug overlays: a tiny 3x5 glyph set, hitbox outlines, and the
//! physics readout drawn under a sprite.
//!
//! Overlay drawing goes through [`IndexGrid::set`], so everything here
//! clips silently at the target edges.

use crate::camera::Rect;
use crate::grid::IndexGrid;
use crate::sprite::Entity;

/// Glyph cell width in pixels, not counting spacing.
pub const GLYPH_WIDTH: i32 = 3;

/// Glyph cell height in pixels.
pub const GLYPH_HEIGHT: i32 = 5;

/// Horizontal advance per character: glyph plus one blank column.
pub const CHAR_ADVANCE: i32 = GLYPH_WIDTH + 1;

/// Vertical gap between a sprite and its readout, and between lines.
const MARGIN: i32 = 2;

/// Row bitmaps for one glyph, top to bottom. Bit 2 is the left pixel.
type Glyph = [u8; 5];

const GLYPH_DIGITS: [Glyph; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b001, 0b001, 0b001],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];
const GLYPH_MINUS: Glyph = [0b000, 0b000, 0b111, 0b000, 0b000];
const GLYPH_COMMA: Glyph = [0b000, 0b000, 0b000, 0b010, 0b100];
const GLYPH_V: Glyph = [0b101, 0b101, 0b101, 0b101, 0b010];
const GLYPH_A: Glyph = [0b010, 0b101, 0b111, 0b101, 0b101];

fn glyph(ch: char) -> Option<&'static Glyph> {
    match ch {
        '0'..='9' => Some(&GLYPH_DIGITS[ch as usize - '0' as usize]),
        '-' => Some(&GLYPH_MINUS),
        ',' => Some(&GLYPH_COMMA),
        'v' | 'V' => Some(&GLYPH_V),
        'a' | 'A' => Some(&GLYPH_A),
        _ => None,
    }
}

/// Draw `text` with the glyph set, top-left corner at (x, y).
///
/// Characters without a glyph still advance the cursor, so unknown
/// characters read as blanks rather than collapsing the line.
pub fn draw_text(target: &mut IndexGrid, text: &str, x: i32, y: i32, color: u8) {
    let mut gx = x;
    for ch in text.chars() {
        if let Some(rows) = glyph(ch) {
            for (dy, row) in rows.iter().enumerate() {
                for dx in 0..GLYPH_WIDTH {
                    if row >> (GLYPH_WIDTH - 1 - dx) & 1 != 0 {
                        target.set(gx + dx, y + dy as i32, color);
                    }
                }
            }
        }
        gx += CHAR_ADVANCE;
    }
}

/// Trace the perimeter of `rect` in `color`.
pub fn draw_outline(target: &mut IndexGrid, rect: &Rect, color: u8) {
    if rect.width <= 0 || rect.height <= 0 {
        return;
    }
    for x in rect.left..rect.right() {
        target.set(x, rect.top, color);
        target.set(x, rect.bottom() - 1, color);
    }
    for y in rect.top + 1..rect.bottom() - 1 {
        target.set(rect.left, y, color);
        target.set(rect.right() - 1, y, color);
    }
}

/// Print the position/velocity/acceleration lines under a sprite whose
/// screen-space top-left corner is (left, top).
///
/// The first line is always `x,y`. Velocity and acceleration lines only
/// appear when their vector is non-zero, prefixed `v` and `a` and
/// shifted one character left so the digits column-align with the
/// position line. Values are truncated toward zero.
pub fn draw_physics_readout(target: &mut IndexGrid, entity: &Entity, left: i32, top: i32) {
    let mut tx = left;
    let mut ty = top + entity.image().height() as i32 + MARGIN;

    let line = format!("{},{}", entity.x as i32, entity.y as i32);
    draw_text(target, &line, tx, ty, 1);
    tx -= CHAR_ADVANCE;

    if entity.vx != 0.0 || entity.vy != 0.0 {
        ty += GLYPH_HEIGHT + MARGIN;
        let line = format!("v{},{}", entity.vx as i32, entity.vy as i32);
        draw_text(target, &line, tx, ty, 1);
    }
    if entity.ax != 0.0 || entity.ay != 0.0 {
        ty += GLYPH_HEIGHT + MARGIN;
        let line = format!("a{},{}", entity.ax as i32, entity.ay as i32);
        draw_text(target, &line, tx, ty, 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_text_renders_digit_one() {
        let mut grid = IndexGrid::new(4, 6);
        draw_text(&mut grid, "1", 0, 0, 7);
        // 010 / 110 / 010 / 010 / 111
        assert_eq!(grid.get(1, 0), Some(7));
        assert_eq!(grid.get(0, 0), Some(0));
        assert_eq!(grid.get(0, 1), Some(7));
        assert_eq!(grid.get(1, 1), Some(7));
        assert_eq!(grid.get(0, 4), Some(7));
        assert_eq!(grid.get(1, 4), Some(7));
        assert_eq!(grid.get(2, 4), Some(7));
        assert_eq!(grid.count(7), 8);
    }

    #[test]
    fn test_draw_text_advances_per_char() {
        let mut grid = IndexGrid::new(12, 6);
        draw_text(&mut grid, "11", 0, 0, 7);
        assert_eq!(grid.get(5, 0), Some(7));
        assert_eq!(grid.count(7), 16);
    }

    #[test]
    fn test_unknown_chars_are_blank_but_advance() {
        let mut grid = IndexGrid::new(12, 6);
        draw_text(&mut grid, "? ", 0, 0, 7);
        assert_eq!(grid.count(7), 0);
        draw_text(&mut grid, "?1", 0, 0, 7);
        assert_eq!(grid.get(5, 0), Some(7));
        assert_eq!(grid.count(7), 8);
    }

    #[test]
    fn test_draw_text_clips_at_edges() {
        let mut grid = IndexGrid::new(2, 2);
        draw_text(&mut grid, "-8", -2, -1, 7);
        assert!(grid.count(7) <= 4);
    }

    #[test]
    fn test_minus_and_comma_glyphs() {
        let mut grid = IndexGrid::new(8, 6);
        draw_text(&mut grid, "-,", 0, 0, 7);
        // Minus is the middle row only.
        assert_eq!(grid.get(0, 2), Some(7));
        assert_eq!(grid.get(1, 2), Some(7));
        assert_eq!(grid.get(2, 2), Some(7));
        assert_eq!(grid.get(0, 0), Some(0));
        // Comma hangs in the bottom two rows of the next cell.
        assert_eq!(grid.get(5, 3), Some(7));
        assert_eq!(grid.get(4, 4), Some(7));
        assert_eq!(grid.count(7), 5);
    }

    #[test]
    fn test_outline_perimeter_only() {
        let mut grid = IndexGrid::new(8, 8);
        draw_outline(&mut grid, &Rect::new(1, 1, 4, 3), 6);
        assert_eq!(grid.count(6), 10);
        assert_eq!(grid.get(1, 1), Some(6));
        assert_eq!(grid.get(4, 3), Some(6));
        assert_eq!(grid.get(2, 2), Some(0));
    }

    #[test]
    fn test_outline_clips_offscreen() {
        let mut grid = IndexGrid::new(4, 4);
        draw_outline(&mut grid, &Rect::new(-2, -2, 8, 8), 6);
        // Only the parts of the perimeter inside the grid survive.
        assert_eq!(grid.get(0, 0), Some(0));
        assert_eq!(grid.count(6), 0);
        draw_outline(&mut grid, &Rect::new(-2, -2, 5, 5), 6);
        assert_eq!(grid.get(2, 0), Some(6));
        assert_eq!(grid.get(0, 2), Some(6));
    }

    #[test]
    fn test_outline_degenerate_rect_is_noop() {
        let mut grid = IndexGrid::new(4, 4);
        draw_outline(&mut grid, &Rect::new(1, 1, 0, 3), 6);
        draw_outline(&mut grid, &Rect::new(1, 1, 3, -1), 6);
        assert_eq!(grid.count(6), 0);
    }

    #[test]
    fn test_readout_position_line_below_sprite() {
        let mut grid = IndexGrid::new(24, 24);
        let mut entity = Entity::sprite(IndexGrid::filled(4, 4, 2));
        entity.set_top_left(6, 0);
        // First line starts at (6, 0 + 4 + 2); "8,2" leads with digit 8.
        entity.x = 8.0;
        entity.y = 2.0;
        draw_physics_readout(&mut grid, &entity, 6, 0);
        assert_eq!(grid.get(6, 6), Some(1));
        assert_eq!(grid.get(7, 6), Some(1));
        assert_eq!(grid.get(8, 6), Some(1));
        assert_eq!(grid.get(6, 7), Some(1));
        // No velocity or acceleration lines when both are zero.
        for y in 12..24 {
            for x in 0..24 {
                assert_eq!(grid.get(x, y), Some(0));
            }
        }
    }

    #[test]
    fn test_readout_velocity_line_shifted_left() {
        let mut grid = IndexGrid::new(24, 24);
        let mut entity = Entity::sprite(IndexGrid::filled(4, 4, 2));
        entity.set_top_left(6, 0);
        entity.vx = 1.9;
        entity.vy = 0.0;
        draw_physics_readout(&mut grid, &entity, 6, 0);
        // Second line at (6 - 4, 6 + 5 + 2): 'v' glyph then "1,0".
        assert_eq!(grid.get(2, 13), Some(1));
        assert_eq!(grid.get(3, 13), Some(0));
        assert_eq!(grid.get(4, 13), Some(1));
        assert_eq!(grid.get(3, 17), Some(1));
        // Truncated velocity digit '1' in the next cell.
        assert_eq!(grid.get(7, 13), Some(1));
    }

    #[test]
    fn test_readout_acceleration_line_order() {
        let mut grid = IndexGrid::new(24, 32);
        let mut entity = Entity::sprite(IndexGrid::filled(4, 4, 2));
        entity.set_top_left(6, 0);
        entity.vx = 1.0;
        entity.ay = -2.0;
        draw_physics_readout(&mut grid, &entity, 6, 0);
        // Acceleration line sits one line below velocity: 'a' at (2, 20).
        assert_eq!(grid.get(3, 20), Some(1));
        assert_eq!(grid.get(2, 21), Some(1));
        assert_eq!(grid.get(4, 21), Some(1));
    }

    #[test]
    fn test_readout_skips_velocity_line_when_only_accelerating() {
        let mut grid = IndexGrid::new(24, 24);
        let mut entity = Entity::sprite(IndexGrid::filled(4, 4, 2));
        entity.set_top_left(6, 0);
        entity.ax = 3.0;
        draw_physics_readout(&mut grid, &entity, 6, 0);
        // The acceleration line takes the second slot at y = 13.
        assert_eq!(grid.get(3, 13), Some(1));
        assert_eq!(grid.get(2, 14), Some(1));
    }
}

//! Bitmap Digit Rendering
//!
//! Score digits are drawn from a 4x5 bitmap font, one filled square per lit
//! cell, through any `Renderer`.

use crate::render::Renderer;
use sdl2::rect::Rect;

/// Glyph width in cells
pub const GLYPH_COLUMNS: i32 = 4;
/// Glyph height in cells
pub const GLYPH_ROWS: i32 = 5;

/// 4x5 glyphs for 0-9, row-major: cell (x, y) is `GLYPHS[d][y * 4 + x]`
pub const GLYPHS: [[u8; 20]; 10] = [
    [1, 1, 1, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1, 1, 1, 1],
    [0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 1],
    [1, 1, 1, 1, 0, 0, 0, 1, 1, 1, 1, 1, 1, 0, 0, 0, 1, 1, 1, 1],
    [1, 1, 1, 1, 0, 0, 0, 1, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 1, 1],
    [1, 0, 0, 1, 1, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 0, 0, 0, 1, 1, 1, 1, 1, 0, 0, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0],
    [1, 1, 1, 1, 1, 0, 0, 1, 1, 1, 1, 1, 1, 0, 0, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 1, 1, 1, 1, 1],
];

/// Draws one digit with its top-left corner at (`col`, `row`)
///
/// # Parameters
///
/// - `renderer`: target, already set to the digit color
/// - `digit`: 0-9; larger values use their last decimal digit
/// - `col`, `row`: top-left position in pixels
/// - `cell`: side of one glyph cell in pixels (at least 1 is drawn)
pub fn draw_digit<R: Renderer + ?Sized>(
    renderer: &mut R,
    digit: u32,
    col: i32,
    row: i32,
    cell: i32,
) -> Result<(), String> {
    let glyph = &GLYPHS[(digit % 10) as usize];
    let side = cell.max(1) as u32;

    for y in 0..GLYPH_ROWS {
        for x in 0..GLYPH_COLUMNS {
            if glyph[(y * GLYPH_COLUMNS + x) as usize] == 1 {
                renderer.fill_rect(Rect::new(col + x * cell, row + y * cell, side, side))?;
            }
        }
    }

    Ok(())
}

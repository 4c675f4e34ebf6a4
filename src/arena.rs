//! Play field dimensions and the pixel scale derived from them.
//!
//! Every entity size and speed in the game is a multiple of the unit size,
//! so a resize changes the feel of the game as little as possible.

use sdl2::rect::Rect;

/// `width + height` is divided by this to get the unit size.
const UNIT_DIVISOR: i32 = 60;

/// The rectangular play field, resized with the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arena {
    pub width: i32,
    pub height: i32,
}

impl Arena {
    pub fn new(width: i32, height: i32) -> Self {
        Arena { width, height }
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }

    /// Whole-arena rectangle, used for the fade overlay.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width.max(0) as u32, self.height.max(0) as u32)
    }
}

/// Sizes and speeds derived from the arena when a round starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    /// Base pixel size: ball side, paddle width, dot size.
    pub unit: i32,
    /// Horizontal ball speed in pixels per frame.
    pub speed: i32,
    /// Paddle speed in pixels per frame.
    pub paddle_speed: i32,
}

impl Scale {
    pub fn from_arena(arena: &Arena) -> Self {
        let unit = ((arena.width + arena.height) / UNIT_DIVISOR).max(1);
        let speed = unit / 2;
        let paddle_speed = (speed as f32 * 1.5) as i32;

        Scale {
            unit,
            speed,
            paddle_speed,
        }
    }
}

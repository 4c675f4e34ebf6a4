use crate::arena::{Arena, Scale};
use crate::collision::Collidable;
use crate::game::Side;
use sdl2::rect::Rect;

/// A player's paddle. `x` is fixed per side, only `y` moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paddle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Paddle {
    /// Places a paddle one unit in from its side of the arena, vertically centered.
    pub fn spawn(side: Side, arena: &Arena, scale: &Scale) -> Self {
        let unit = scale.unit;
        let x = match side {
            Side::Left => unit,
            Side::Right => arena.width - 2 * unit,
        };

        Paddle {
            x,
            y: arena.height / 2 - 2 * unit,
            width: unit,
            height: 4 * unit,
        }
    }

    /// Highest allowed y. All but one row may leave the top of the arena.
    pub fn min_y(&self) -> i32 {
        -self.height + 1
    }

    /// Lowest allowed y. All but one row may leave the bottom of the arena.
    pub fn max_y(arena_height: i32) -> i32 {
        arena_height - 1
    }

    /// Moves the paddle for one frame.
    ///
    /// Up is applied and clamped before down is applied and clamped, so
    /// holding both keys against the top edge nudges the paddle down.
    pub fn step(&mut self, up: bool, down: bool, speed: i32, arena_height: i32) {
        if up {
            self.y -= speed;
        }
        if self.y < self.min_y() {
            self.y = self.min_y();
        }
        if down {
            self.y += speed;
        }
        if self.y > Self::max_y(arena_height) {
            self.y = Self::max_y(arena_height);
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center_y(&self) -> i32 {
        self.y + self.height / 2
    }
}

impl Collidable for Paddle {
    fn get_bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width as u32, self.height as u32)
    }
}

/// Frame rendering for the pong court
///
/// This module draws one frame of the game through the `Renderer` trait, so
/// the drawing order can be checked in tests without opening a window.
///
/// # Architecture
///
/// - `Renderer` trait: the three drawing capabilities the game needs
/// - `impl Renderer for Canvas<Window>`: the SDL2 implementation
/// - `draw_frame()`: fade overlay, center line, scores, paddles and ball
///
/// The screen is never cleared. Each frame paints a translucent black layer
/// over the previous one instead, which leaves a short trail behind anything
/// that moves.
use crate::arena::Arena;
use crate::collision::Collidable;
use crate::game::{GameWorld, Side};
use crate::text::draw_digit;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Translucent black laid over the previous frame
pub const FADE: Color = Color::RGBA(0, 0, 0, 92);
/// Normal color for everything drawn on top of the fade
pub const FOREGROUND: Color = Color::RGBA(200, 200, 200, 255);
/// Draw color after a wall or paddle rebound
pub const FLASH_REBOUND: Color = Color::RGBA(0, 0, 0, 255);
/// Draw color after the ball leaves the arena
pub const FLASH_EXIT: Color = Color::RGBA(200, 0, 0, 255);

/// Drawing surface used by the game loop.
///
/// Alpha in the draw color must be honored (blend mode), since the fade
/// overlay depends on it.
pub trait Renderer {
    fn set_draw_color(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Rect) -> Result<(), String>;

    /// Shows the finished frame
    fn present(&mut self);
}

impl Renderer for Canvas<Window> {
    fn set_draw_color(&mut self, color: Color) {
        Canvas::set_draw_color(self, color);
    }

    fn fill_rect(&mut self, rect: Rect) -> Result<(), String> {
        Canvas::fill_rect(self, rect)
    }

    fn present(&mut self) {
        Canvas::present(self);
    }
}

/// Draws one complete frame.
///
/// `tint` is the color for the center line, the scores, the paddles and the
/// ball; it is `FOREGROUND` unless a collision flashed it this frame.
pub fn draw_frame<R: Renderer + ?Sized>(
    renderer: &mut R,
    world: &GameWorld,
    tint: Color,
) -> Result<(), String> {
    renderer.set_draw_color(FADE);
    renderer.fill_rect(world.arena.bounds())?;

    renderer.set_draw_color(tint);
    draw_center_line(renderer, &world.arena, world.scale.unit)?;
    draw_scores(renderer, world)?;

    for side in [Side::Left, Side::Right] {
        renderer.fill_rect(world.paddle(side).get_bounds())?;
    }
    renderer.fill_rect(world.ball.get_bounds())?;

    Ok(())
}

/// Dashed line down the middle: unit squares, one unit apart
fn draw_center_line<R: Renderer + ?Sized>(
    renderer: &mut R,
    arena: &Arena,
    unit: i32,
) -> Result<(), String> {
    let x = (arena.width - unit) / 2;
    let side = unit as u32;

    for y in (unit / 2..arena.height).step_by((unit * 2) as usize) {
        renderer.fill_rect(Rect::new(x, y, side, side))?;
    }

    Ok(())
}

/// Two digits per player, left score left of the center line
fn draw_scores<R: Renderer + ?Sized>(renderer: &mut R, world: &GameWorld) -> Result<(), String> {
    let unit = world.scale.unit;
    let cell = unit / 2;
    let mid = world.arena.width / 2;
    let left = world.score.left;
    let right = world.score.right;

    draw_digit(renderer, left / 10, mid - 7 * unit, unit, cell)?;
    draw_digit(renderer, left % 10, mid - 4 * unit, unit, cell)?;
    draw_digit(renderer, right / 10, mid + 2 * unit, unit, cell)?;
    draw_digit(renderer, right % 10, mid + 5 * unit, unit, cell)?;

    Ok(())
}

/// One call made on a `RecordingRenderer`
#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCall {
    Color(Color),
    Fill(Rect),
    Present,
}

/// Renderer that records every call instead of drawing
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<DrawCall>,
}

#[cfg(test)]
impl RecordingRenderer {
    pub fn fills(&self) -> Vec<Rect> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Fill(rect) => Some(*rect),
                _ => None,
            })
            .collect()
    }

    pub fn colors(&self) -> Vec<Color> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Color(color) => Some(*color),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
impl Renderer for RecordingRenderer {
    fn set_draw_color(&mut self, color: Color) {
        self.calls.push(DrawCall::Color(color));
    }

    fn fill_rect(&mut self, rect: Rect) -> Result<(), String> {
        self.calls.push(DrawCall::Fill(rect));
        Ok(())
    }

    fn present(&mut self) {
        self.calls.push(DrawCall::Present);
    }
}

// Shared enums used throughout the game

use crate::audio::SoundEffect;
use crate::render::{FLASH_EXIT, FLASH_REBOUND};
use sdl2::pixels::Color;

/// Which half of the arena a paddle or player belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Something the collision resolver noticed during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom edge
    WallRebound,
    /// Ball left the arena; `scorer` is the player on the other side
    BallExited { scorer: Side },
    /// Ball bounced off a paddle
    PaddleHit(Side),
}

impl GameEvent {
    pub fn sound(&self) -> SoundEffect {
        match self {
            GameEvent::WallRebound | GameEvent::PaddleHit(_) => SoundEffect::Rebound,
            GameEvent::BallExited { .. } => SoundEffect::Exit,
        }
    }

    /// Draw color for the rest of the frame once this event fires
    pub fn flash_color(&self) -> Color {
        match self {
            GameEvent::WallRebound | GameEvent::PaddleHit(_) => FLASH_REBOUND,
            GameEvent::BallExited { .. } => FLASH_EXIT,
        }
    }
}

/// Loop lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    /// Simulating and drawing every frame
    Running,
    /// Window lost focus: only input polling and sleeping happen
    Suspended,
    /// Quit requested, no further frames
    Stopped,
}

use crate::arena::{Arena, Scale};
use crate::collision::Collidable;
use rand::Rng;
use sdl2::rect::Rect;

/// The ball. Position is in whole pixels, velocity is fractional.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub vx: f32,
    pub vy: f32,
}

impl Ball {
    /// Centers a fresh ball in the arena with a random launch direction.
    pub fn spawn<R: Rng + ?Sized>(arena: &Arena, scale: &Scale, rng: &mut R) -> Self {
        let size = scale.unit;
        let vx = launch_vx(scale.speed, rng);
        let vy = random_vy(scale.speed, rng);

        Ball {
            x: (arena.width - size) / 2,
            y: (arena.height - size) / 2,
            width: size,
            height: size,
            vx,
            vy,
        }
    }

    /// Adds one frame of velocity. The result truncates toward zero.
    pub fn advance(&mut self) {
        self.x = (self.x as f32 + self.vx) as i32;
        self.y = (self.y as f32 + self.vy) as i32;
    }

    /// Puts the ball back in play at `x`, vertically centered, with a new
    /// vertical speed. The horizontal direction is kept.
    pub fn serve<R: Rng + ?Sized>(&mut self, x: i32, arena: &Arena, speed: i32, rng: &mut R) {
        self.x = x;
        self.y = (arena.height - self.height) / 2;
        self.vy = random_vy(speed, rng);
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

impl Collidable for Ball {
    fn get_bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width as u32, self.height as u32)
    }
}

/// `+speed` or `-speed` with equal probability.
pub fn launch_vx<R: Rng + ?Sized>(speed: i32, rng: &mut R) -> f32 {
    if rng.random_bool(0.5) {
        speed as f32
    } else {
        -speed as f32
    }
}

/// Uniform whole number in `[-speed, speed)`, or 0 when the speed is 0.
pub fn random_vy<R: Rng + ?Sized>(speed: i32, rng: &mut R) -> f32 {
    if speed <= 0 {
        return 0.0;
    }
    rng.random_range(-speed..speed) as f32
}

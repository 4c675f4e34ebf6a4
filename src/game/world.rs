// GameWorld struct and round lifecycle
//
// This module contains the GameWorld struct which owns every piece of mutable
// round state. Nothing survives a reinit except the arena dimensions and the
// random number generator.

use crate::arena::{Arena, Scale};
use crate::ball::Ball;
use crate::paddle::Paddle;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::{Score, Side};

/// GameWorld encapsulates the arena, both paddles, the ball and the score
pub struct GameWorld {
    pub arena: Arena,
    pub scale: Scale,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub rng: Pcg32,
    needs_reinit: bool,
}

impl GameWorld {
    /// Builds a world for `arena`. The first frame still runs a full reinit.
    pub fn new(arena: Arena, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let scale = Scale::from_arena(&arena);
        let ball = Ball::spawn(&arena, &scale, &mut rng);

        GameWorld {
            arena,
            scale,
            left: Paddle::spawn(Side::Left, &arena, &scale),
            right: Paddle::spawn(Side::Right, &arena, &scale),
            ball,
            score: Score::default(),
            rng,
            needs_reinit: true,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn needs_reinit(&self) -> bool {
        self.needs_reinit
    }

    /// Schedules a new round for the start of the next frame
    pub fn request_reinit(&mut self) {
        self.needs_reinit = true;
    }

    /// Records new window dimensions and schedules a new round
    pub fn resize(&mut self, width: i32, height: i32) {
        self.arena.resize(width, height);
        self.needs_reinit = true;
    }

    /// Rebuilds every derived field from the current arena dimensions
    pub fn reinit(&mut self) {
        self.scale = Scale::from_arena(&self.arena);
        self.left = Paddle::spawn(Side::Left, &self.arena, &self.scale);
        self.right = Paddle::spawn(Side::Right, &self.arena, &self.scale);
        self.ball = Ball::spawn(&self.arena, &self.scale, &mut self.rng);
        self.score.reset();
        self.needs_reinit = false;
    }

    /// Runs `reinit` if one was requested. Returns whether it ran.
    pub fn reinit_if_requested(&mut self) -> bool {
        if !self.needs_reinit {
            return false;
        }
        self.reinit();
        true
    }
}

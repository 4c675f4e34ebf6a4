/// Collision detection and response for the ball
///
/// This module resolves everything the ball can run into during a frame: the
/// top and bottom walls, the left and right exits, and both paddles.
///
/// # Architecture
///
/// - `Collidable` trait: implemented by entities that occupy a rectangle
/// - Band tests: pure functions deciding whether the ball touches a paddle
/// - `resolve_collisions()`: the per-frame resolver, returns what happened
///
/// Every check runs every frame, in a fixed order, and each one sees the
/// result of the checks before it. Nothing is interpolated between frames,
/// so a fast ball can skip over a paddle, and a ball that exits can also
/// register a paddle hit in the same frame.
use crate::ball::Ball;
use crate::game::{GameEvent, GameWorld, Side};
use crate::paddle::Paddle;
use sdl2::rect::Rect;

/// Trait for entities that occupy an axis-aligned rectangle.
pub trait Collidable {
    /// Returns the rectangle this entity covers, as drawn on screen.
    fn get_bounds(&self) -> Rect;
}

/// Checks whether the ball and paddle share at least one row.
///
/// Both edges are inclusive, so a ball resting exactly on the paddle's top or
/// bottom edge still counts.
pub fn vertical_overlap(ball: &Ball, paddle: &Paddle) -> bool {
    ball.bottom() >= paddle.y && ball.y <= paddle.bottom()
}

/// The ball's right edge is inside the right paddle's horizontal band.
pub fn hits_right_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    let leading = ball.right();
    leading >= paddle.x && leading <= paddle.right() && vertical_overlap(ball, paddle)
}

/// The ball's left edge is inside the left paddle's horizontal band.
pub fn hits_left_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.x <= paddle.right() && ball.x >= paddle.x && vertical_overlap(ball, paddle)
}

/// Vertical speed after bouncing off `paddle`.
///
/// Linear in the distance between the two centers: 0 for a dead-center hit,
/// `±speed` when the ball only touches the paddle's top or bottom edge.
pub fn deflection(ball: &Ball, paddle: &Paddle, speed: i32) -> f32 {
    let offset = ball.center_y() - paddle.center_y();
    let reach = ball.height / 2 + paddle.height / 2;
    speed as f32 * (offset as f32 / reach as f32)
}

/// Runs every collision check for this frame and applies the responses.
///
/// Scoring is not applied here; a `BallExited` event carries the scorer and
/// the score tracker consumes it.
pub fn resolve_collisions(world: &mut GameWorld) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let arena = world.arena;
    let speed = world.scale.speed;

    // Top and bottom walls
    if world.ball.y < 0 || world.ball.y >= arena.height - world.ball.height {
        world.ball.vy = -world.ball.vy;
        events.push(GameEvent::WallRebound);
    }

    // Left exit: served from the right player's half
    if world.ball.x < 0 {
        let x = 3 * arena.width / 4 - world.ball.width / 2;
        world.ball.serve(x, &arena, speed, &mut world.rng);
        events.push(GameEvent::BallExited { scorer: Side::Right });
    }

    // Right exit: served from the left player's half
    if world.ball.x >= arena.width - world.ball.width {
        let x = arena.width / 4 - world.ball.width / 2;
        world.ball.serve(x, &arena, speed, &mut world.rng);
        events.push(GameEvent::BallExited { scorer: Side::Left });
    }

    if hits_right_paddle(&world.ball, &world.right) {
        world.ball.x = world.right.x - world.ball.width;
        world.ball.vx = -world.ball.vx;
        world.ball.vy = deflection(&world.ball, &world.right, speed);
        events.push(GameEvent::PaddleHit(Side::Right));
    }

    if hits_left_paddle(&world.ball, &world.left) {
        world.ball.x = world.left.right();
        world.ball.vx = -world.ball.vx;
        world.ball.vy = deflection(&world.ball, &world.left, speed);
        events.push(GameEvent::PaddleHit(Side::Left));
    }

    events
}

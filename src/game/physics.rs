// Physics integration: one fixed step per frame, no sub-steps.

use crate::input_system::InputState;

use super::{GameWorld, Side};

/// Moves both paddles from the held keys, then moves the ball by its velocity
pub fn integrate(world: &mut GameWorld, input: &InputState) {
    let speed = world.scale.paddle_speed;
    let height = world.arena.height;

    let (up, down) = input.paddle(Side::Left);
    world.left.step(up, down, speed, height);
    let (up, down) = input.paddle(Side::Right);
    world.right.step(up, down, speed, height);
    world.ball.advance();
}

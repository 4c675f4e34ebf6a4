// Game module - Contains the round state and the per-frame pipeline
//
// This module contains:
// - world.rs: GameWorld struct owning every piece of mutable round state
// - types.rs: Shared enums (Side, GameEvent, LoopPhase)
// - score.rs: Score tracker with the joint cap
// - physics.rs: Paddle and ball integration
// - game_loop.rs: GameLoop driving input, physics, collisions, scoring and drawing

pub mod game_loop;
pub mod physics;
pub mod score;
pub mod types;
pub mod world;

// Re-export types for convenience
pub use game_loop::GameLoop;
pub use score::{Score, SCORE_CAP};
pub use types::*;
pub use world::GameWorld;

// GameLoop - runs one frame of the game at a time
//
// Frame pipeline, strictly in this order:
//   round reinit (if flagged) -> input sampling -> physics -> collisions
//   -> scoring -> sound/flash feedback -> drawing
//
// Pacing and presenting the frame are left to the caller, which also owns
// the platform event source. While suspended only input sampling runs, and a
// pending reinit waits for the first frame that starts running.

use crate::audio::SoundPlayer;
use crate::collision::resolve_collisions;
use crate::input_system::{Control, InputEvent, InputState};
use crate::render::{draw_frame, Renderer, FOREGROUND};
use log::{debug, info};
use sdl2::pixels::Color;

use super::physics::integrate;
use super::{GameEvent, GameWorld, LoopPhase, SCORE_CAP};

pub struct GameLoop {
    world: GameWorld,
    input: InputState,
    phase: LoopPhase,
}

impl GameLoop {
    pub fn new(world: GameWorld) -> Self {
        GameLoop {
            world,
            input: InputState::default(),
            phase: LoopPhase::Running,
        }
    }

    pub fn world(&self) -> &GameWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut GameWorld {
        &mut self.world
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    /// Runs one frame and returns the phase the loop is in afterwards.
    ///
    /// `events` are this frame's inputs in arrival order. Nothing is drawn
    /// or played unless the loop is still `Running` after sampling them.
    pub fn step<I, R, S>(
        &mut self,
        events: I,
        renderer: &mut R,
        sounds: &mut S,
    ) -> Result<LoopPhase, String>
    where
        I: IntoIterator<Item = InputEvent>,
        R: Renderer + ?Sized,
        S: SoundPlayer + ?Sized,
    {
        // A round requested while suspended starts once play resumes
        if self.phase == LoopPhase::Running && self.world.reinit_if_requested() {
            let scale = self.world.scale;
            info!(
                "New round: {}x{} arena, unit {}, speed {}",
                self.world.arena.width, self.world.arena.height, scale.unit, scale.speed
            );
        }

        self.sample_input(events);
        if self.phase != LoopPhase::Running {
            return Ok(self.phase);
        }

        integrate(&mut self.world, &self.input);
        let events = resolve_collisions(&mut self.world);
        self.track_score(&events);
        let tint = play_feedback(&events, sounds);
        draw_frame(renderer, &self.world, tint)?;

        Ok(self.phase)
    }

    /// Applies a batch of input events in order.
    ///
    /// Quit ends the batch; later events are never looked at.
    pub fn sample_input<I: IntoIterator<Item = InputEvent>>(&mut self, events: I) {
        for event in events {
            match self.phase {
                LoopPhase::Stopped => break,
                LoopPhase::Suspended => self.handle_suspended(event),
                LoopPhase::Running => self.handle_running(event),
            }
        }
    }

    fn handle_running(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit | InputEvent::KeyDown(Control::Quit) => self.stop(),
            InputEvent::KeyDown(control) => self.input.press(control),
            InputEvent::KeyUp(Control::Restart) => {
                info!("Restart requested");
                self.world.request_reinit();
            }
            InputEvent::KeyUp(control) => self.input.release(control),
            InputEvent::Resized { width, height } => {
                info!("Window resized to {}x{}", width, height);
                self.world.resize(width, height);
            }
            InputEvent::FocusLost => {
                info!("Focus lost, pausing");
                self.phase = LoopPhase::Suspended;
            }
            InputEvent::FocusGained => {}
        }
    }

    fn handle_suspended(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit | InputEvent::KeyDown(Control::Quit) => self.stop(),
            InputEvent::FocusGained => {
                info!("Focus regained, resuming");
                self.phase = LoopPhase::Running;
            }
            _ => {}
        }
    }

    fn stop(&mut self) {
        info!("Quit requested");
        self.phase = LoopPhase::Stopped;
    }

    fn track_score(&mut self, events: &[GameEvent]) {
        for event in events {
            if let GameEvent::BallExited { scorer } = *event {
                let score = &mut self.world.score;
                if score.award(scorer) {
                    debug!(
                        "Ball out on the {:?} side, score {} - {}",
                        scorer.opponent(),
                        score.left,
                        score.right
                    );
                } else {
                    debug!("Score capped at {}, point for {:?} ignored", SCORE_CAP, scorer);
                }
            }
        }
    }
}

/// Plays one sound per event; the last event picks the frame's draw color
fn play_feedback<S: SoundPlayer + ?Sized>(events: &[GameEvent], sounds: &mut S) -> Color {
    let mut tint = FOREGROUND;
    for event in events {
        sounds.play(event.sound());
        tint = event.flash_color();
    }
    tint
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::{Arena, Scale};
    use crate::audio::{RecordingSounds, SoundEffect};
    use crate::game::{Score, Side};
    use crate::render::{DrawCall, RecordingRenderer, FADE, FLASH_EXIT, FLASH_REBOUND};
    use proptest::prelude::*;

    fn game() -> GameLoop {
        GameLoop::new(GameWorld::new(Arena::new(600, 400), 3))
    }

    /// Runs one frame, returning what was drawn and played
    fn frame(
        game: &mut GameLoop,
        events: Vec<InputEvent>,
    ) -> (LoopPhase, RecordingRenderer, RecordingSounds) {
        let mut renderer = RecordingRenderer::default();
        let mut sounds = RecordingSounds::default();
        let phase = game.step(events, &mut renderer, &mut sounds).unwrap();
        (phase, renderer, sounds)
    }

    /// Puts the ball somewhere harmless, moving slowly to the right
    fn park_ball(game: &mut GameLoop) {
        let ball = &mut game.world_mut().ball;
        ball.x = 292;
        ball.y = 192;
        ball.vx = 8.0;
        ball.vy = 0.0;
    }

    #[test]
    fn test_first_frame_initializes_and_draws() {
        let mut game = game();
        let (phase, renderer, _) = frame(&mut game, vec![]);

        assert_eq!(phase, LoopPhase::Running);
        assert!(!game.world().needs_reinit());
        assert_eq!(renderer.calls[0], DrawCall::Color(FADE));
        assert_eq!(game.world().scale, Scale { unit: 16, speed: 8, paddle_speed: 12 });
    }

    #[test]
    fn test_quit_stops_and_drops_later_events() {
        let mut game = game();
        let (phase, renderer, sounds) = frame(
            &mut game,
            vec![InputEvent::Quit, InputEvent::KeyDown(Control::LeftUp)],
        );

        assert_eq!(phase, LoopPhase::Stopped);
        assert!(!game.input().left_up);
        assert!(renderer.calls.is_empty());
        assert!(sounds.played.is_empty());
    }

    #[test]
    fn test_quit_key_acts_on_press() {
        let mut game = game();
        let (phase, _, _) = frame(&mut game, vec![InputEvent::KeyUp(Control::Quit)]);
        assert_eq!(phase, LoopPhase::Running);

        let (phase, _, _) = frame(&mut game, vec![InputEvent::KeyDown(Control::Quit)]);
        assert_eq!(phase, LoopPhase::Stopped);
    }

    #[test]
    fn test_movement_keys_hold_until_released() {
        let mut game = game();
        frame(&mut game, vec![InputEvent::KeyDown(Control::LeftUp)]);
        assert_eq!(game.world().left.y, 156);

        frame(&mut game, vec![]);
        assert_eq!(game.world().left.y, 144);

        frame(
            &mut game,
            vec![
                InputEvent::KeyUp(Control::LeftUp),
                InputEvent::KeyDown(Control::RightDown),
            ],
        );
        assert_eq!(game.world().left.y, 144);
        assert_eq!(game.world().right.y, 180);
    }

    #[test]
    fn test_restart_fires_on_release() {
        let mut game = game();
        frame(&mut game, vec![]);
        park_ball(&mut game);
        game.world_mut().score = Score { left: 5, right: 3 };
        game.world_mut().left.y = 0;

        frame(&mut game, vec![InputEvent::KeyDown(Control::Restart)]);
        assert!(!game.world().needs_reinit());
        assert_eq!(game.world().score, Score { left: 5, right: 3 });

        frame(&mut game, vec![InputEvent::KeyUp(Control::Restart)]);
        assert!(game.world().needs_reinit());

        frame(&mut game, vec![]);
        assert_eq!(game.world().score, Score::default());
        assert_eq!(game.world().left.y, 168);
        assert_eq!(game.world().right.y, 168);
    }

    #[test]
    fn test_resize_starts_new_round_at_new_scale() {
        let mut game = game();
        frame(&mut game, vec![]);
        game.world_mut().score.right = 9;

        frame(&mut game, vec![InputEvent::Resized { width: 1200, height: 600 }]);
        assert_eq!(game.world().arena, Arena::new(1200, 600));
        assert!(game.world().needs_reinit());

        frame(&mut game, vec![]);
        assert_eq!(game.world().scale.unit, 30);
        assert_eq!(game.world().score.right, 0);
        assert_eq!(game.world().ball.vx.abs(), 15.0);
    }

    #[test]
    fn test_focus_loss_suspends_everything() {
        let mut game = game();
        frame(&mut game, vec![]);
        park_ball(&mut game);
        let ball = game.world().ball.clone();

        let (phase, renderer, sounds) = frame(&mut game, vec![InputEvent::FocusLost]);
        assert_eq!(phase, LoopPhase::Suspended);
        assert!(renderer.calls.is_empty());
        assert!(sounds.played.is_empty());
        assert_eq!(game.world().ball, ball);

        // Ignored while suspended
        let (phase, renderer, _) = frame(
            &mut game,
            vec![
                InputEvent::KeyDown(Control::LeftUp),
                InputEvent::Resized { width: 800, height: 800 },
                InputEvent::KeyUp(Control::Restart),
            ],
        );
        assert_eq!(phase, LoopPhase::Suspended);
        assert!(renderer.calls.is_empty());
        assert!(!game.input().left_up);
        assert_eq!(game.world().arena, Arena::new(600, 400));
        assert!(!game.world().needs_reinit());
        assert_eq!(game.world().ball, ball);

        let (phase, renderer, _) = frame(&mut game, vec![InputEvent::FocusGained]);
        assert_eq!(phase, LoopPhase::Running);
        assert!(!renderer.calls.is_empty());
        assert_eq!(game.world().ball.x, ball.x + 8);
    }

    #[test]
    fn test_restart_waits_out_suspension() {
        let mut game = game();
        frame(&mut game, vec![]);
        park_ball(&mut game);
        game.world_mut().score = Score { left: 5, right: 3 };
        game.world_mut().left.y = 0;
        let ball = game.world().ball.clone();

        let (phase, _, _) = frame(
            &mut game,
            vec![InputEvent::KeyUp(Control::Restart), InputEvent::FocusLost],
        );
        assert_eq!(phase, LoopPhase::Suspended);

        let (phase, renderer, _) = frame(&mut game, vec![]);
        assert_eq!(phase, LoopPhase::Suspended);
        assert!(renderer.calls.is_empty());
        assert!(game.world().needs_reinit());
        assert_eq!(game.world().score, Score { left: 5, right: 3 });
        assert_eq!(game.world().left.y, 0);
        assert_eq!(game.world().ball, ball);

        // Resuming frame still plays the old round
        frame(&mut game, vec![InputEvent::FocusGained]);
        assert_eq!(game.world().score, Score { left: 5, right: 3 });

        frame(&mut game, vec![]);
        assert!(!game.world().needs_reinit());
        assert_eq!(game.world().score, Score::default());
        assert_eq!(game.world().left.y, 168);
    }

    #[test]
    fn test_resize_while_suspended_applies_after_resume() {
        let mut game = game();
        frame(&mut game, vec![]);
        frame(
            &mut game,
            vec![
                InputEvent::Resized { width: 1200, height: 600 },
                InputEvent::FocusLost,
            ],
        );

        frame(&mut game, vec![]);
        assert_eq!(game.world().scale.unit, 16);

        frame(&mut game, vec![InputEvent::FocusGained]);
        frame(&mut game, vec![]);
        assert_eq!(game.world().scale.unit, 30);
    }

    #[test]
    fn test_quit_while_suspended() {
        let mut game = game();
        frame(&mut game, vec![InputEvent::FocusLost]);
        let (phase, _, _) = frame(&mut game, vec![InputEvent::Quit]);
        assert_eq!(phase, LoopPhase::Stopped);
    }

    #[test]
    fn test_events_after_focus_loss_in_same_batch_are_dropped() {
        let mut game = game();
        let (phase, _, _) = frame(
            &mut game,
            vec![
                InputEvent::KeyDown(Control::RightUp),
                InputEvent::FocusLost,
                InputEvent::KeyDown(Control::LeftUp),
            ],
        );
        assert_eq!(phase, LoopPhase::Suspended);
        assert!(game.input().right_up);
        assert!(!game.input().left_up);
    }

    #[test]
    fn test_left_exit_scores_for_right() {
        let mut game = game();
        frame(&mut game, vec![]);
        {
            let ball = &mut game.world_mut().ball;
            ball.x = 2;
            ball.y = 100;
            ball.vx = -8.0;
            ball.vy = 0.0;
        }

        let (_, renderer, sounds) = frame(&mut game, vec![]);
        let world = game.world();
        assert_eq!(world.score, Score { left: 0, right: 1 });
        assert_eq!((world.ball.x, world.ball.y), (442, 192));
        assert_eq!(sounds.played, vec![SoundEffect::Exit]);
        assert_eq!(renderer.colors(), vec![FADE, FLASH_EXIT]);
    }

    #[test]
    fn test_right_exit_scores_for_left() {
        let mut game = game();
        frame(&mut game, vec![]);
        {
            let ball = &mut game.world_mut().ball;
            ball.x = 580;
            ball.y = 100;
            ball.vx = 8.0;
            ball.vy = 0.0;
        }

        frame(&mut game, vec![]);
        assert_eq!(game.world().score, Score { left: 1, right: 0 });
        assert_eq!(game.world().ball.x, 142);
    }

    #[test]
    fn test_capped_score_stays_put() {
        let mut game = game();
        frame(&mut game, vec![]);
        game.world_mut().score = Score { left: 15, right: 2 };
        {
            let ball = &mut game.world_mut().ball;
            ball.x = 2;
            ball.y = 100;
            ball.vx = -8.0;
            ball.vy = 0.0;
        }

        let (_, _, sounds) = frame(&mut game, vec![]);
        assert_eq!(game.world().score, Score { left: 15, right: 2 });
        assert_eq!(sounds.played, vec![SoundEffect::Exit]);
    }

    #[test]
    fn test_paddle_hit_rebounds_and_flashes() {
        let mut game = game();
        frame(&mut game, vec![]);
        {
            let ball = &mut game.world_mut().ball;
            ball.x = 552;
            ball.y = 192;
            ball.vx = 8.0;
            ball.vy = 0.0;
        }

        let (_, renderer, sounds) = frame(&mut game, vec![]);
        assert_eq!(game.world().ball.x, 552);
        assert_eq!(game.world().ball.vx, -8.0);
        assert_eq!(sounds.played, vec![SoundEffect::Rebound]);
        assert_eq!(renderer.colors(), vec![FADE, FLASH_REBOUND]);
    }

    #[test]
    fn test_quiet_frame_uses_foreground() {
        let mut game = game();
        frame(&mut game, vec![]);
        park_ball(&mut game);

        let (_, renderer, sounds) = frame(&mut game, vec![]);
        assert!(sounds.played.is_empty());
        assert_eq!(renderer.colors(), vec![FADE, FOREGROUND]);
    }

    #[test]
    fn test_last_event_picks_tint() {
        let mut sounds = RecordingSounds::default();
        let tint = play_feedback(
            &[
                GameEvent::BallExited { scorer: Side::Left },
                GameEvent::PaddleHit(Side::Left),
            ],
            &mut sounds,
        );
        assert_eq!(tint, FLASH_REBOUND);
        assert_eq!(sounds.played, vec![SoundEffect::Exit, SoundEffect::Rebound]);
    }

    const MOVES: [Control; 4] = [
        Control::LeftUp,
        Control::LeftDown,
        Control::RightUp,
        Control::RightDown,
    ];

    fn movement_event() -> impl Strategy<Value = InputEvent> {
        prop_oneof![
            (0usize..4).prop_map(|i| InputEvent::KeyDown(MOVES[i])),
            (0usize..4).prop_map(|i| InputEvent::KeyUp(MOVES[i])),
        ]
    }

    fn any_event() -> impl Strategy<Value = InputEvent> {
        prop_oneof![
            8 => movement_event(),
            1 => Just(InputEvent::KeyUp(Control::Restart)),
            1 => (60i32..2000, 60i32..1500)
                .prop_map(|(width, height)| InputEvent::Resized { width, height }),
            1 => Just(InputEvent::FocusLost),
            1 => Just(InputEvent::FocusGained),
        ]
    }

    proptest! {
        #[test]
        fn prop_frame_invariants(
            width in 60i32..2000,
            height in 60i32..1500,
            seed in any::<u64>(),
            frames in prop::collection::vec(prop::collection::vec(any_event(), 0..3), 1..200),
        ) {
            let mut game = GameLoop::new(GameWorld::new(Arena::new(width, height), seed));
            let mut sounds = RecordingSounds::default();

            for batch in frames {
                let phase_before = game.phase();
                let reinit_due = phase_before == LoopPhase::Running && game.world().needs_reinit();
                let resumes = batch.contains(&InputEvent::FocusGained);
                let before = game.world().score;
                let ball_before = game.world().ball.clone();
                let paddles_before = (game.world().left.clone(), game.world().right.clone());
                let arena_before = game.world().arena;

                let mut renderer = RecordingRenderer::default();
                let phase = game.step(batch, &mut renderer, &mut sounds).unwrap();
                let world = game.world();

                prop_assert_eq!(phase == LoopPhase::Running, !renderer.calls.is_empty());

                if phase_before == LoopPhase::Suspended && !resumes {
                    prop_assert_eq!(phase, LoopPhase::Suspended);
                    prop_assert_eq!(&world.ball, &ball_before);
                    prop_assert_eq!(&(world.left.clone(), world.right.clone()), &paddles_before);
                    prop_assert_eq!(world.arena, arena_before);
                    prop_assert_eq!(world.score, before);
                }

                if phase == LoopPhase::Running {
                    for paddle in [&world.left, &world.right] {
                        prop_assert!(paddle.y >= paddle.min_y());
                        prop_assert!(paddle.y <= world.arena.height - 1);
                    }
                }
                prop_assert_eq!(world.ball.vx.abs(), world.scale.speed as f32);

                let after = world.score;
                prop_assert!(after.left <= SCORE_CAP && after.right <= SCORE_CAP);
                if reinit_due {
                    prop_assert!(after.left + after.right <= 1);
                } else {
                    prop_assert!(after.left >= before.left && after.right >= before.right);
                    prop_assert!(after.left + after.right <= before.left + before.right + 1);
                    if before.is_capped() {
                        prop_assert_eq!(after, before);
                    }
                }
            }
        }
    }
}

use sdl2::image::LoadSurface;
use sdl2::render::BlendMode;
use sdl2::surface::Surface;
use sdl2::video::Window;

mod arena;
mod audio;
mod ball;
mod collision;
mod config;
mod game;
mod input_system;
mod pacing;
mod paddle;
mod render;
mod text;

use arena::Arena;
use audio::Sounds;
use config::GameConfig;
use game::{GameLoop, GameWorld, LoopPhase, Side};
use input_system::{Control, InputSystem, KeyBindings};
use pacing::FramePacer;
use render::Renderer;
use std::path::{Path, PathBuf};
use std::thread;

fn main() -> Result<(), String> {
    env_logger::init();

    // Optional first argument: path to a config file
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = GameConfig::locate(config_path)?;
    let bindings = KeyBindings::from_config(&config.keys)?;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _audio_subsystem = sdl_context.audio()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let mut window = video_subsystem
        .window(&config.window.title, config.window.width, config.window.height)
        .position_centered()
        .resizable()
        .opengl()
        .build()
        .map_err(|e| e.to_string())?;

    set_window_icon(&mut window, &config.window.icon);

    let mut canvas = window
        .into_canvas()
        .accelerated()
        .present_vsync()
        .build()
        .map_err(|e| e.to_string())?;

    // The fade layer needs alpha blending
    canvas.set_blend_mode(BlendMode::Blend);

    let mut sounds = Sounds::open(&config.audio);
    let mut event_pump = sdl_context.event_pump()?;
    let input = InputSystem::new(bindings);

    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!("RNG seed: {}", seed);

    let (width, height) = canvas.window().size();
    let world = GameWorld::new(Arena::new(width as i32, height as i32), seed);
    let mut game = GameLoop::new(world);
    let mut pacer = FramePacer::new(config.frame_delay());
    log::info!("Frame budget: {:?}", pacer.budget());

    log_controls(input.bindings());

    while game.phase() != LoopPhase::Stopped {
        pacer.begin_frame();
        let events = input.poll_events(&mut event_pump);

        match game.step(events, &mut canvas, &mut sounds)? {
            LoopPhase::Running => {
                pacer.wait();
                Renderer::present(&mut canvas);
            }
            LoopPhase::Suspended => thread::sleep(config.suspend_poll()),
            LoopPhase::Stopped => {}
        }
    }

    let score = game.world().score;
    log::info!(
        "Final score: {} - {}",
        score.get(Side::Left),
        score.get(Side::Right)
    );

    Ok(())
}

/// A missing or unreadable icon only costs the window its icon
fn set_window_icon(window: &mut Window, path: &Path) {
    match Surface::from_file(path) {
        Ok(icon) => window.set_icon(icon),
        Err(e) => log::warn!("Could not load window icon {}: {}", path.display(), e),
    }
}

fn log_controls(bindings: &KeyBindings) {
    let name = |control| {
        bindings
            .key_for(control)
            .map(|key| key.name())
            .unwrap_or_default()
    };

    log::info!(
        "Left paddle: {}/{}  Right paddle: {}/{}  Restart: {}  Quit: {}",
        name(Control::LeftUp),
        name(Control::LeftDown),
        name(Control::RightUp),
        name(Control::RightDown),
        name(Control::Restart),
        name(Control::Quit)
    );
}

//! Sound effects through SDL_mixer
//!
//! Two short clips loaded from disk at startup, played fire-and-forget on
//! whichever mixer channel is free. If the device or a clip is unavailable
//! the game runs silently.

use crate::config::AudioConfig;
use sdl2::mixer::{Channel, Chunk};
use std::path::Path;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Ball bounced off a wall or a paddle
    Rebound,
    /// Ball left the arena
    Exit,
}

/// Anything that can play a sound effect without blocking the frame
pub trait SoundPlayer {
    fn play(&mut self, effect: SoundEffect);
}

/// Keeps the mixer device open for as long as it lives
struct MixerDevice;

impl MixerDevice {
    fn open(config: &AudioConfig) -> Result<Self, String> {
        sdl2::mixer::open_audio(
            config.frequency,
            sdl2::mixer::DEFAULT_FORMAT,
            config.channels,
            config.chunk_size,
        )?;
        let allocated = sdl2::mixer::allocate_channels(config.mix_channels);
        log::info!(
            "Audio open: {} Hz, {} output channels, {} mixer channels",
            config.frequency,
            config.channels,
            allocated
        );
        Ok(MixerDevice)
    }
}

impl Drop for MixerDevice {
    fn drop(&mut self) {
        sdl2::mixer::close_audio();
    }
}

/// The game's sound clips plus the device they play on
///
/// Fields drop in declaration order, so the clips are freed before the
/// device is closed.
pub struct SoundBank {
    rebound: Chunk,
    exit: Chunk,
    _device: MixerDevice,
}

impl SoundBank {
    /// Opens the audio device and loads both clips
    pub fn open(config: &AudioConfig) -> Result<Self, String> {
        let device = MixerDevice::open(config)?;
        let rebound = load_chunk(&config.rebound_sound)?;
        let exit = load_chunk(&config.exit_sound)?;

        Ok(SoundBank {
            rebound,
            exit,
            _device: device,
        })
    }

    fn chunk(&self, effect: SoundEffect) -> &Chunk {
        match effect {
            SoundEffect::Rebound => &self.rebound,
            SoundEffect::Exit => &self.exit,
        }
    }
}

impl SoundPlayer for SoundBank {
    fn play(&mut self, effect: SoundEffect) {
        if let Err(e) = Channel::all().play(self.chunk(effect), 0) {
            log::debug!("Dropped {:?} sound: {}", effect, e);
        }
    }
}

/// Game audio: the sound bank when it could be opened, silence otherwise
pub struct Sounds {
    bank: Option<SoundBank>,
}

impl Sounds {
    /// Opens the sound bank, falling back to silence on failure
    pub fn open(config: &AudioConfig) -> Self {
        Self::from_result(SoundBank::open(config))
    }

    fn from_result(bank: Result<SoundBank, String>) -> Self {
        match bank {
            Ok(bank) => Sounds { bank: Some(bank) },
            Err(e) => {
                log::warn!("Audio disabled: {}", e);
                Sounds { bank: None }
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.bank.is_some()
    }
}

impl SoundPlayer for Sounds {
    fn play(&mut self, effect: SoundEffect) {
        let Some(bank) = &mut self.bank else { return };
        bank.play(effect);
    }
}

fn load_chunk(path: &Path) -> Result<Chunk, String> {
    Chunk::from_file(path).map_err(|e| format!("Failed to load {}: {}", path.display(), e))
}

/// Sound player that remembers what it was asked to play
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSounds {
    pub played: Vec<SoundEffect>,
}

#[cfg(test)]
impl SoundPlayer for RecordingSounds {
    fn play(&mut self, effect: SoundEffect) {
        self.played.push(effect);
    }
}

//! Game configuration
//!
//! Loaded once at startup from a JSON file. Every field has a default, so a
//! config file only needs to list what it changes, and a missing file simply
//! means "use the defaults".

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Directory under the user's config dir holding `config.json`
const APP_DIR: &str = "sdl-pong";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub audio: AudioConfig,
    pub keys: KeyConfig,
    /// Frame budget in milliseconds
    pub frame_delay_ms: u64,
    /// Sleep between event polls while the window is unfocused
    pub suspend_poll_ms: u64,
    /// Fixed RNG seed, for reproducible serves
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub icon: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub frequency: i32,
    /// 1 = mono, 2 = stereo
    pub channels: i32,
    pub chunk_size: i32,
    /// Mixer channels available for overlapping effects
    pub mix_channels: i32,
    pub rebound_sound: PathBuf,
    pub exit_sound: PathBuf,
}

/// SDL key names, resolved by `KeyBindings::from_config`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    pub left_up: String,
    pub left_down: String,
    pub right_up: String,
    pub right_down: String,
    pub restart: String,
    pub quit: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            window: WindowConfig::default(),
            audio: AudioConfig::default(),
            keys: KeyConfig::default(),
            frame_delay_ms: 17,
            suspend_poll_ms: 200,
            seed: None,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "pong".to_string(),
            width: 600,
            height: 400,
            icon: PathBuf::from("assets/pongIcon256.bmp"),
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        AudioConfig {
            frequency: 44_100,
            channels: 2,
            chunk_size: 2048,
            mix_channels: 16,
            rebound_sound: PathBuf::from("assets/pongIN.wav"),
            exit_sound: PathBuf::from("assets/pongOUT.wav"),
        }
    }
}

impl Default for KeyConfig {
    fn default() -> Self {
        KeyConfig {
            left_up: "Q".to_string(),
            left_down: "A".to_string(),
            right_up: "Up".to_string(),
            right_down: "Down".to_string(),
            restart: "Space".to_string(),
            quit: "Escape".to_string(),
        }
    }
}

impl GameConfig {
    /// Load a config file. The file must exist.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// `<config dir>/sdl-pong/config.json`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Find the configuration to run with
    ///
    /// An explicit path must load. Otherwise the per-user file is used when
    /// it exists, and the built-in defaults when it doesn't.
    pub fn locate(explicit: Option<PathBuf>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            log::info!("Loading config from {}", path.display());
            return Self::load_from_file(&path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                log::info!("Loading config from {}", path.display());
                Self::load_from_file(&path)
            }
            _ => {
                log::info!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }

    pub fn suspend_poll(&self) -> Duration {
        Duration::from_millis(self.suspend_poll_ms)
    }
}

/// Error types for loading configuration
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(serde_json::Error),
    UnknownKey(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Config parse error: {}", e),
            ConfigError::UnknownKey(name) => write!(f, "Unknown key name: {}", name),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError(err)
    }
}

impl From<ConfigError> for String {
    fn from(error: ConfigError) -> Self {
        error.to_string()
    }
}

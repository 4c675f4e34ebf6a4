use crate::config::{ConfigError, KeyConfig};
use crate::game::Side;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::EventPump;

/// Game controls a key can be bound to
///
/// Movement controls are held (level state); restart and quit are one-shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
    Restart,
    Quit,
}

/// Platform-independent input, in the order it happened
///
/// The game loop only ever sees these; SDL events are translated by
/// `InputSystem` and anything irrelevant is dropped there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close button or OS quit request
    Quit,
    KeyDown(Control),
    KeyUp(Control),
    Resized { width: i32, height: i32 },
    FocusLost,
    FocusGained,
}

/// Keycodes for every control, resolved once from the configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    bindings: [(Keycode, Control); 6],
}

impl KeyBindings {
    /// Resolves SDL key names such as `"Q"`, `"Up"` or `"Escape"`.
    pub fn from_config(keys: &KeyConfig) -> Result<Self, ConfigError> {
        Ok(KeyBindings {
            bindings: [
                (resolve_key(&keys.left_up)?, Control::LeftUp),
                (resolve_key(&keys.left_down)?, Control::LeftDown),
                (resolve_key(&keys.right_up)?, Control::RightUp),
                (resolve_key(&keys.right_down)?, Control::RightDown),
                (resolve_key(&keys.restart)?, Control::Restart),
                (resolve_key(&keys.quit)?, Control::Quit),
            ],
        })
    }

    /// First control bound to `key`, if any
    pub fn control_for(&self, key: Keycode) -> Option<Control> {
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == key)
            .map(|(_, control)| *control)
    }

    /// Key currently bound to `control`
    pub fn key_for(&self, control: Control) -> Option<Keycode> {
        self.bindings
            .iter()
            .find(|(_, bound)| *bound == control)
            .map(|(key, _)| *key)
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        KeyBindings {
            bindings: [
                (Keycode::Q, Control::LeftUp),
                (Keycode::A, Control::LeftDown),
                (Keycode::Up, Control::RightUp),
                (Keycode::Down, Control::RightDown),
                (Keycode::Space, Control::Restart),
                (Keycode::Escape, Control::Quit),
            ],
        }
    }
}

fn resolve_key(name: &str) -> Result<Keycode, ConfigError> {
    Keycode::from_name(name).ok_or_else(|| ConfigError::UnknownKey(name.to_string()))
}

/// InputSystem translates SDL2 events into `InputEvent`s
///
/// Key events for unbound keys and window events other than resize and
/// focus changes are dropped.
pub struct InputSystem {
    bindings: KeyBindings,
}

impl InputSystem {
    pub fn new(bindings: KeyBindings) -> Self {
        InputSystem { bindings }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Translates one SDL event
    pub fn translate(&self, event: &Event) -> Option<InputEvent> {
        match event {
            Event::Quit { .. } => Some(InputEvent::Quit),
            Event::KeyDown {
                keycode: Some(key), ..
            } => self.bindings.control_for(*key).map(InputEvent::KeyDown),
            Event::KeyUp {
                keycode: Some(key), ..
            } => self.bindings.control_for(*key).map(InputEvent::KeyUp),
            Event::Window { win_event, .. } => match win_event {
                WindowEvent::Resized(width, height) => Some(InputEvent::Resized {
                    width: *width,
                    height: *height,
                }),
                WindowEvent::FocusLost => Some(InputEvent::FocusLost),
                WindowEvent::FocusGained => Some(InputEvent::FocusGained),
                _ => None,
            },
            _ => None,
        }
    }

    /// Drains every pending SDL event, keeping their order
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<InputEvent> {
        event_pump
            .poll_iter()
            .filter_map(|event| self.translate(&event))
            .collect()
    }
}

/// Which movement keys are currently held
///
/// Only the latest press or release counts; nothing is queued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
}

impl InputState {
    pub fn press(&mut self, control: Control) {
        self.set(control, true);
    }

    pub fn release(&mut self, control: Control) {
        self.set(control, false);
    }

    /// `(up, down)` for one paddle
    pub fn paddle(&self, side: Side) -> (bool, bool) {
        match side {
            Side::Left => (self.left_up, self.left_down),
            Side::Right => (self.right_up, self.right_down),
        }
    }

    fn set(&mut self, control: Control, held: bool) {
        match control {
            Control::LeftUp => self.left_up = held,
            Control::LeftDown => self.left_down = held,
            Control::RightUp => self.right_up = held,
            Control::RightDown => self.right_down = held,
            Control::Restart | Control::Quit => {}
        }
    }
}

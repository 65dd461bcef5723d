//! Input latch and abstract key identities

use serde::{Deserialize, Serialize};

/// Abstract key identity delivered by the input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Shoot
    Fire,
    /// Pause toggle
    Pause,
    /// Starts from the menu, confirms exit on the end screens
    Confirm,
    /// Settings toggle
    Settings,
    /// Restart after the run ended
    Restart,
    /// Return to the start menu
    Menu,
    /// Escape
    Cancel,
}

impl Key {
    pub const COUNT: usize = 11;

    pub const ALL: [Key; Key::COUNT] = [
        Key::Up,
        Key::Down,
        Key::Left,
        Key::Right,
        Key::Fire,
        Key::Pause,
        Key::Confirm,
        Key::Settings,
        Key::Restart,
        Key::Menu,
        Key::Cancel,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Look up a key by host name. Accepts the keyboard names of the
    /// original layout (WASD, arrows, space, P, Enter, O, R, Shift, Esc).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "up" | "w" => Some(Key::Up),
            "down" | "s" => Some(Key::Down),
            "left" | "a" => Some(Key::Left),
            "right" | "d" => Some(Key::Right),
            "fire" | "space" => Some(Key::Fire),
            "pause" | "p" => Some(Key::Pause),
            "confirm" | "enter" | "start" => Some(Key::Confirm),
            "settings" | "o" => Some(Key::Settings),
            "restart" | "r" => Some(Key::Restart),
            "menu" | "shift" => Some(Key::Menu),
            "cancel" | "escape" | "esc" => Some(Key::Cancel),
            _ => None,
        }
    }
}

/// Press/release notification from the input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(Key),
    Released(Key),
}

impl KeyEvent {
    pub fn key(self) -> Key {
        match self {
            KeyEvent::Pressed(key) | KeyEvent::Released(key) => key,
        }
    }
}

/// Held/not-held state for every key. Read by the movement step each tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputLatch {
    held: [bool; Key::COUNT],
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_held(&mut self, key: Key, held: bool) {
        self.held[key.index()] = held;
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held[key.index()]
    }

    /// Record a press or release
    pub fn apply(&mut self, event: KeyEvent) {
        match event {
            KeyEvent::Pressed(key) => self.set_held(key, true),
            KeyEvent::Released(key) => self.set_held(key, false),
        }
    }
}

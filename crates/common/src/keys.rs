use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Keys the camera exercises poll each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Key {
    W,
    A,
    S,
    D,
    Space,
    LeftControl,
    LeftShift,
    Escape,
}

impl Key {
    pub const ALL: [Key; 8] = [
        Key::W,
        Key::A,
        Key::S,
        Key::D,
        Key::Space,
        Key::LeftControl,
        Key::LeftShift,
        Key::Escape,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Key::W => "w",
            Key::A => "a",
            Key::S => "s",
            Key::D => "d",
            Key::Space => "space",
            Key::LeftControl => "left_control",
            Key::LeftShift => "left_shift",
            Key::Escape => "escape",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown key name: {0:?}")]
pub struct ParseKeyError(pub String);

impl FromStr for Key {
    type Err = ParseKeyError;

    /// Case-insensitive; `_`, `-` and spaces are ignored so `LeftControl`,
    /// `left_control` and `left-control` all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "w" => Ok(Key::W),
            "a" => Ok(Key::A),
            "s" => Ok(Key::S),
            "d" => Ok(Key::D),
            "space" => Ok(Key::Space),
            "leftcontrol" | "leftctrl" | "lctrl" => Ok(Key::LeftControl),
            "leftshift" | "lshift" => Ok(Key::LeftShift),
            "escape" | "esc" => Ok(Key::Escape),
            _ => Err(ParseKeyError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Key {
    type Error = ParseKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.name().to_string()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction of a single translation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// What a bound key does while held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    MoveForward,
    MoveBackward,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    /// Multiply movement speed while held.
    Boost,
    /// Ask the host to close the window.
    Quit,
}

impl Action {
    pub fn direction(&self) -> Option<MoveDirection> {
        match self {
            Action::MoveForward => Some(MoveDirection::Forward),
            Action::MoveBackward => Some(MoveDirection::Backward),
            Action::MoveLeft => Some(MoveDirection::Left),
            Action::MoveRight => Some(MoveDirection::Right),
            Action::MoveUp => Some(MoveDirection::Up),
            Action::MoveDown => Some(MoveDirection::Down),
            Action::Boost | Action::Quit => None,
        }
    }
}

/// Key-to-action table. Each key maps to at most one action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bindings {
    map: BTreeMap<Key, Action>,
}

impl Bindings {
    pub fn empty() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    pub fn action_for(&self, key: Key) -> Option<Action> {
        self.map.get(&key).copied()
    }

    /// Bind `key` to `action`, returning the binding it replaced.
    pub fn bind(&mut self, key: Key, action: Action) -> Option<Action> {
        self.map.insert(key, action)
    }

    pub fn unbind(&mut self, key: Key) -> Option<Action> {
        self.map.remove(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Key, Action)> + '_ {
        self.map.iter().map(|(k, a)| (*k, *a))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for Bindings {
    fn default() -> Self {
        let mut b = Self::empty();
        b.bind(Key::W, Action::MoveForward);
        b.bind(Key::S, Action::MoveBackward);
        b.bind(Key::A, Action::MoveLeft);
        b.bind(Key::D, Action::MoveRight);
        b.bind(Key::Space, Action::MoveUp);
        b.bind(Key::LeftControl, Action::MoveDown);
        b.bind(Key::LeftShift, Action::Boost);
        b.bind(Key::Escape, Action::Quit);
        b
    }
}

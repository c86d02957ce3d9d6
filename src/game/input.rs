use std::collections::HashMap;

use super::vector::Direction;

/// Abstract input tokens the simulation reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKey {
    Left,
    Up,
    Right,
    Down,
    Restart,
}

impl From<Direction> for InputKey {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Left => InputKey::Left,
            Direction::Up => InputKey::Up,
            Direction::Right => InputKey::Right,
            Direction::Down => InputKey::Down,
        }
    }
}

/// Latest held/released state per key, written by the input source and
/// read by the session at the start of each tick.
///
/// Rapid events are not queued: the last write for a key wins.
#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    held: HashMap<InputKey, bool>,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: InputKey, pressed: bool) {
        self.held.insert(key, pressed);
    }

    /// Unknown keys read as released
    pub fn is_pressed(&self, key: InputKey) -> bool {
        self.held.get(&key).copied().unwrap_or(false)
    }

    pub fn release_all(&mut self) {
        self.held.clear();
    }
}

//! Keyboard state tracking
//!
//! Maps raw key identifiers (DOM `KeyboardEvent.key` values) to held
//! left/right flags. Both may be held at once; the simulation resolves the
//! conflict.

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
}

impl Key {
    /// Recognize a key identifier, including legacy pre-standard names
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "Left" => Some(Key::Left),
            "ArrowRight" | "Right" => Some(Key::Right),
            _ => None,
        }
    }
}

/// Held-key flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputTracker {
    pub left_pressed: bool,
    pub right_pressed: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_key_down(&mut self, key: &str) {
        self.set(key, true);
    }

    pub fn on_key_up(&mut self, key: &str) {
        self.set(key, false);
    }

    fn set(&mut self, key: &str, pressed: bool) {
        match Key::from_name(key) {
            Some(Key::Left) => self.left_pressed = pressed,
            Some(Key::Right) => self.right_pressed = pressed,
            None => {}
        }
    }

    /// Release everything (e.g. when the window loses focus)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Snapshot for the next simulation tick
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left: self.left_pressed,
            right: self.right_pressed,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_name("Left"), Some(Key::Left));
        assert_eq!(Key::from_name("ArrowRight"), Some(Key::Right));
        assert_eq!(Key::from_name("Right"), Some(Key::Right));
        assert_eq!(Key::from_name("a"), None);
        assert_eq!(Key::from_name("arrowleft"), None);
    }

    #[test]
    fn test_press_and_release() {
        let mut input = InputTracker::new();
        input.on_key_down("ArrowRight");
        assert!(input.right_pressed);
        assert!(!input.left_pressed);

        input.on_key_up("Right");
        assert!(!input.right_pressed);
    }

    #[test]
    fn test_both_held_independently() {
        let mut input = InputTracker::new();
        input.on_key_down("Left");
        input.on_key_down("ArrowRight");
        let tick = input.tick_input();
        assert!(tick.left && tick.right);

        input.on_key_up("ArrowLeft");
        assert!(!input.left_pressed);
        assert!(input.right_pressed);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut input = InputTracker::new();
        input.on_key_down(" ");
        input.on_key_down("Escape");
        assert_eq!(input, InputTracker::default());
    }

    #[test]
    fn test_clear_releases_all() {
        let mut input = InputTracker::new();
        input.on_key_down("Left");
        input.on_key_down("Right");
        input.clear();
        assert!(!input.left_pressed && !input.right_pressed);
    }
}

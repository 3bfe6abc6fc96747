//! Input commands and held-direction state
//!
//! Two mechanisms coexist: discrete key presses step the actor immediately
//! (the host's key-repeat supplies repetition), while pointer press-and-hold
//! sets a flag that the fixed-rate input ticker samples.

use serde::{Deserialize, Serialize};

/// Lateral movement command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

/// Raw input forwarded by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyPressed(Direction),
    KeyReleased(Direction),
    PointerPressed(Direction),
    PointerReleased(Direction),
}

/// Currently held continuous-input directions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
}

impl InputState {
    pub fn press(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.left = true,
            Direction::Right => self.right = true,
        }
    }

    pub fn release(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.left = false,
            Direction::Right => self.right = false,
        }
    }

    pub fn is_held(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release_are_independent() {
        let mut held = InputState::default();
        held.press(Direction::Left);
        held.press(Direction::Right);
        assert!(held.is_held(Direction::Left));
        assert!(held.is_held(Direction::Right));

        held.release(Direction::Left);
        assert!(!held.is_held(Direction::Left));
        assert!(held.is_held(Direction::Right));
    }

    #[test]
    fn test_release_without_press_is_harmless() {
        let mut held = InputState::default();
        held.release(Direction::Right);
        assert_eq!(held, InputState::default());
    }
}

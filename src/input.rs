//! Keyboard state and the per-tick intent derived from it.

use macroquad::input::{is_key_down, is_key_pressed, KeyCode};

/// What the player wants the character to do this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputIntent {
    /// Wins over `move_right` when both are set.
    pub move_left: bool,
    /// Walk right.
    pub move_right: bool,
    /// True for exactly one tick per press. Cleared by the body once used.
    pub jump_requested: bool,
}

/// Raw key levels for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    /// A or Left arrow.
    pub left: bool,
    /// D or Right arrow.
    pub right: bool,
    /// Held, not pressed: edges are derived by [`InputTracker`].
    pub jump: bool,
    /// `+` went down this frame.
    pub faster: bool,
    /// `-` went down this frame.
    pub slower: bool,
}

impl KeyState {
    /// Read the keyboard through macroquad.
    pub fn poll() -> Self {
        Self {
            left: is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
            jump: is_key_down(KeyCode::Space),
            faster: is_key_pressed(KeyCode::Equal) || is_key_pressed(KeyCode::KpAdd),
            slower: is_key_pressed(KeyCode::Minus) || is_key_pressed(KeyCode::KpSubtract),
        }
    }

    /// Change to the clock-speed multiplier requested this frame.
    pub fn clock_step(&self) -> f32 {
        match (self.faster, self.slower) {
            (true, false) => CLOCK_STEP,
            (false, true) => -CLOCK_STEP,
            _ => 0.0,
        }
    }
}

/// Clock-speed change per key press.
pub const CLOCK_STEP: f32 = 0.1;

/// Turns key levels into intents, edge-triggering the jump.
#[derive(Debug, Default)]
pub struct InputTracker {
    jump_held: bool,
}

impl InputTracker {
    /// A tracker that has seen no key yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Intent for this frame. A jump is requested only on the frame the key goes down.
    pub fn intent(&mut self, keys: &KeyState) -> InputIntent {
        let jump_requested = keys.jump && !self.jump_held;
        self.jump_held = keys.jump;
        InputIntent {
            move_left: keys.left,
            move_right: keys.right,
            jump_requested,
        }
    }
}

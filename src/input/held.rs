//! Held-button tracking for terminal environments.
//!
//! The game polls held state every frame; terminals deliver discrete key
//! events, and many never deliver key releases at all. This tracker turns
//! press/release events into held flags and expires stale holds with a
//! timeout, so a single tap does not read as held forever.

use crate::host::InputSource;
use crate::types::Button;

// In terminals without key-release events, a short timeout prevents a single
// tap from turning into a sustained "held" state.
const DEFAULT_RELEASE_TIMEOUT_MS: u32 = 150;

/// Held state for all game buttons, fed by key events.
#[derive(Debug, Clone)]
pub struct HeldButtons {
    held: [bool; Button::COUNT],
    /// Timestamp of the most recent press (terminal auto-repeat included).
    last_press_ms: u32,
    release_timeout_ms: u32,
}

impl HeldButtons {
    pub fn new() -> Self {
        Self {
            held: [false; Button::COUNT],
            last_press_ms: 0,
            release_timeout_ms: DEFAULT_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.release_timeout_ms = timeout_ms;
        self
    }

    pub fn release_timeout_ms(&self) -> u32 {
        self.release_timeout_ms
    }

    /// Record a press (or terminal auto-repeat, which refreshes the hold).
    pub fn press(&mut self, button: Button, now_ms: u32) {
        self.held[button.index()] = true;
        self.last_press_ms = now_ms;
    }

    /// Record an explicit release event.
    pub fn release(&mut self, button: Button) {
        self.held[button.index()] = false;
    }

    /// Expire stale holds. Called once per frame; terminals that do emit
    /// release events are unaffected because presses keep refreshing the
    /// window.
    pub fn tick(&mut self, now_ms: u32) {
        if now_ms.saturating_sub(self.last_press_ms) > self.release_timeout_ms {
            self.held = [false; Button::COUNT];
        }
    }

    /// Drop all held state.
    pub fn clear(&mut self) {
        self.held = [false; Button::COUNT];
    }
}

impl Default for HeldButtons {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for HeldButtons {
    fn is_held(&self, button: Button) -> bool {
        self.held[button.index()]
    }
}

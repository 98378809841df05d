//! Increment / decrement tap buttons
//!
//! Each button is a two-state machine (idle, pressed) driving a highlight
//! value. Pressing snaps the highlight fully on and fires the tap; releasing
//! lets it spring back down without dipping below zero.

use std::sync::Arc;

use tally_animation::{AnimatedValue, SchedulerHandle, SpringConfig};
use tally_core::{event_types, Impulse, SharedHaptics, StateTransitions};
use tracing::trace;

/// Invoked when the button fires (on press, not release)
pub type TapCallback = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonState {
    Idle,
    Pressed,
}

impl StateTransitions for ButtonState {
    fn on_event(&self, event: u32) -> Option<Self> {
        match (self, event) {
            (ButtonState::Idle, event_types::POINTER_DOWN) => Some(ButtonState::Pressed),
            (ButtonState::Pressed, event_types::POINTER_UP)
            | (ButtonState::Pressed, event_types::POINTER_CANCEL) => Some(ButtonState::Idle),
            _ => None,
        }
    }
}

/// A circular tap button with a press highlight
pub struct CounterButton {
    label: &'static str,
    state: ButtonState,
    highlight: AnimatedValue,
    haptics: Option<SharedHaptics>,
    on_press: Option<TapCallback>,
}

impl CounterButton {
    pub fn new(handle: SchedulerHandle, label: &'static str) -> Self {
        // Release must settle at exactly 0 with no undershoot flash
        let config = SpringConfig::soft().clamped();
        Self {
            label,
            state: ButtonState::Idle,
            highlight: AnimatedValue::new(handle, 0.0, config),
            haptics: None,
            on_press: None,
        }
    }

    pub fn with_haptics(mut self, haptics: SharedHaptics) -> Self {
        self.haptics = Some(haptics);
        self
    }

    pub fn on_press(mut self, callback: TapCallback) -> Self {
        self.on_press = Some(callback);
        self
    }

    /// Feed a pointer event; returns true if the button fired
    pub fn handle_event(&mut self, event: u32) -> bool {
        let Some(next) = self.state.on_event(event) else {
            return false;
        };
        trace!(button = self.label, from = ?self.state, to = ?next, "button transition");
        let fired = self.state == ButtonState::Idle && next == ButtonState::Pressed;
        self.state = next;

        if fired {
            self.highlight.set_immediate(1.0);
            if let Some(haptics) = &self.haptics {
                haptics.pulse(Impulse::Selection);
            }
            if let Some(callback) = &self.on_press {
                callback();
            }
        } else {
            self.highlight.set_target(0.0);
        }
        fired
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Current highlight intensity in [0, 1]
    pub fn highlight(&self) -> f32 {
        self.highlight.get()
    }
}

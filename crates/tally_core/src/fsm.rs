//! Interaction state machines
//!
//! Widget interaction states are small enums that transition on pointer
//! event ids. A transition returns the new state, or `None` when the event
//! does not apply in the current state — unknown events are simply ignored,
//! which is what makes gesture cancellation safe to route anywhere.

use std::hash::Hash;

/// Trait for widget interaction state enums
pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + Hash + Send + Sync + std::fmt::Debug + 'static
{
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: u32) -> Option<Self>;
}

/// A no-op state type for widgets without interaction states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NoState;

impl StateTransitions for NoState {
    fn on_event(&self, _event: u32) -> Option<Self> {
        None // Never transitions
    }
}

//! Input event types
//!
//! Platform-agnostic pointer events, reduced to the subset a single
//! gesture-driven widget needs. Event ids are plain `u32` so interaction
//! FSMs can match on them without allocation.

use crate::geometry::Point;

/// Event type identifier
pub type EventType = u32;

/// Pointer event ids
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_MOVE: EventType = 3;
    /// Gesture aborted by the platform (touch cancelled, window lost focus)
    /// or by the maximum-hold fail-safe. Routed through the same finalize
    /// path as a normal release.
    pub const POINTER_CANCEL: EventType = 4;
    /// Pointer moved while pressed; carries a translation from the press origin
    pub const DRAG: EventType = 5;
    /// Pointer released after dragging
    pub const DRAG_END: EventType = 6;
}

/// A pointer event with its position
#[derive(Clone, Copy, Debug)]
pub struct PointerEvent {
    pub event_type: EventType,
    pub position: Point,
}

impl PointerEvent {
    pub fn new(event_type: EventType, position: Point) -> Self {
        Self {
            event_type,
            position,
        }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(event_types::POINTER_DOWN, Point::new(x, y))
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(event_types::POINTER_MOVE, Point::new(x, y))
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(event_types::POINTER_UP, Point::new(x, y))
    }

    pub fn cancel(x: f32, y: f32) -> Self {
        Self::new(event_types::POINTER_CANCEL, Point::new(x, y))
    }
}

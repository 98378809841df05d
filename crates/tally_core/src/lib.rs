//! Tally Core Primitives
//!
//! Foundational types shared by the tally counter widgets:
//!
//! - **Geometry**: points, vectors, and the circular hit areas every
//!   affordance in this system uses
//! - **Input Events**: platform-agnostic pointer event ids and payloads
//! - **Interaction FSMs**: the `StateTransitions` trait for widget
//!   interaction states
//! - **Haptics**: a pluggable feedback driver with no-op and recording
//!   implementations

pub mod events;
pub mod fsm;
pub mod geometry;
pub mod haptics;

pub use events::{event_types, EventType, PointerEvent};
pub use fsm::{NoState, StateTransitions};
pub use geometry::{Circle, Point, Vec2};
pub use haptics::{HapticDriver, Impulse, NoopHaptics, RecordingHaptics, SharedHaptics};

//! Tally Widgets
//!
//! The interactive pieces of the tally counter:
//!
//! - [`TallyCounter`] - the circular counter. Owns the count, the drag axis
//!   lock, and the accelerated hold-to-count engine; exposes a pure
//!   per-frame snapshot for the renderer.
//! - [`CounterButton`] - the + / − tap affordances. Fire on press, spring
//!   their highlight away on release.
//! - [`Metrics`] - layout constants derived from the window width.
//!
//! Widgets are headless: they hold animated values registered with a
//! [`tally_animation::AnimationScheduler`] and leave drawing to the host.

pub mod counter_button;
pub mod indicators;
pub mod metrics;
pub mod tally_counter;

pub use counter_button::{ButtonState, CounterButton, TapCallback};
pub use indicators::Indicators;
pub use metrics::{Metrics, MetricsError};
pub use tally_counter::{Acceleration, CountCallback, CounterFrame, DragState, TallyCounter};

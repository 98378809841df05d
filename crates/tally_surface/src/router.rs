//! Press capture and drag synthesis
//!
//! The router owns which target captured the pointer. A press stays with its
//! target until release or cancel, even when the pointer wanders outside the
//! target's region, so a drag that leaves the circle keeps driving it.
//!
//! It also runs the maximum-hold fail-safe: a press held implausibly long
//! (a stuck touch, a missed release event) is force-cancelled so the widget
//! never wedges in a pressed state.

use tally_core::{Point, Vec2};
use tally_widgets::Metrics;
use tracing::{trace, warn};

/// What a pointer press landed on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressTarget {
    Minus,
    Plus,
    Circle,
}

impl PressTarget {
    /// Hold duration after which the press is force-cancelled
    fn max_hold_ms(self) -> f32 {
        match self {
            PressTarget::Circle => Metrics::CIRCLE_MAX_HOLD_MS,
            PressTarget::Minus | PressTarget::Plus => Metrics::BUTTON_MAX_HOLD_MS,
        }
    }
}

#[derive(Debug)]
struct ActivePress {
    target: PressTarget,
    origin: Point,
    held_ms: f32,
}

/// Routes pointer events to the target that captured the press
#[derive(Debug, Default)]
pub struct PointerRouter {
    pressed: Option<ActivePress>,
}

impl PointerRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture a press; returns false if another press already holds the pointer
    pub fn begin(&mut self, target: PressTarget, origin: Point) -> bool {
        if self.pressed.is_some() {
            return false;
        }
        trace!(target = ?target, "press captured");
        self.pressed = Some(ActivePress {
            target,
            origin,
            held_ms: 0.0,
        });
        true
    }

    pub fn pressed_target(&self) -> Option<PressTarget> {
        self.pressed.as_ref().map(|p| p.target)
    }

    /// Pointer translation from the press origin, if a press is active
    pub fn translation(&self, position: Point) -> Option<Vec2> {
        self.pressed
            .as_ref()
            .map(|p| position.offset_from(p.origin))
    }

    /// Drop the capture; returns the target that was released
    pub fn release(&mut self) -> Option<PressTarget> {
        self.pressed.take().map(|p| p.target)
    }

    /// Advance the hold timer. Returns the target whose press was dropped
    /// by the fail-safe, if any.
    pub fn tick(&mut self, dt_ms: f32) -> Option<PressTarget> {
        let press = self.pressed.as_mut()?;
        press.held_ms += dt_ms;
        if press.held_ms < press.target.max_hold_ms() {
            return None;
        }
        warn!(target = ?press.target, held_ms = press.held_ms, "press exceeded max hold, cancelling");
        self.release()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_is_exclusive() {
        let mut router = PointerRouter::new();

        assert!(router.begin(PressTarget::Circle, Point::new(10.0, 10.0)));
        assert!(!router.begin(PressTarget::Plus, Point::new(50.0, 10.0)));
        assert_eq!(router.pressed_target(), Some(PressTarget::Circle));

        assert_eq!(router.release(), Some(PressTarget::Circle));
        assert_eq!(router.release(), None);
    }

    #[test]
    fn test_translation_is_relative_to_origin() {
        let mut router = PointerRouter::new();
        assert_eq!(router.translation(Point::new(5.0, 5.0)), None);

        router.begin(PressTarget::Circle, Point::new(100.0, 200.0));
        let t = router.translation(Point::new(130.0, 190.0)).unwrap();
        assert_eq!(t, Vec2::new(30.0, -10.0));
    }

    #[test]
    fn test_button_hold_failsafe() {
        let mut router = PointerRouter::new();
        router.begin(PressTarget::Plus, Point::ZERO);

        assert_eq!(router.tick(Metrics::BUTTON_MAX_HOLD_MS - 1.0), None);
        assert_eq!(router.tick(1.0), Some(PressTarget::Plus));
        assert_eq!(router.pressed_target(), None);
    }

    #[test]
    fn test_circle_hold_outlasts_button_limit() {
        let mut router = PointerRouter::new();
        router.begin(PressTarget::Circle, Point::ZERO);

        assert_eq!(router.tick(Metrics::BUTTON_MAX_HOLD_MS + 1.0), None);
        assert_eq!(router.pressed_target(), Some(PressTarget::Circle));
        assert_eq!(
            router.tick(Metrics::CIRCLE_MAX_HOLD_MS),
            Some(PressTarget::Circle)
        );
    }

    #[test]
    fn test_tick_without_press_is_inert() {
        let mut router = PointerRouter::new();
        assert_eq!(router.tick(1_000_000.0), None);
    }
}

//! The counter surface
//!
//! Wires the counter, its two tap buttons, the pointer router, and the
//! animation scheduler into one host-facing object. A host feeds it raw
//! pointer events and a frame clock; it hands back a [`SurfaceFrame`]
//! snapshot to draw.

use tally_animation::AnimationScheduler;
use tally_core::{event_types, Circle, Point, PointerEvent, SharedHaptics};
use tally_widgets::{
    CountCallback, CounterButton, CounterFrame, Metrics, MetricsError, TallyCounter,
};
use tracing::debug;

use crate::router::{PointerRouter, PressTarget};

/// Static placement of the counter and its buttons within the window
#[derive(Clone, Copy, Debug)]
struct Layout {
    metrics: Metrics,
    /// Center of the counter pill (and of the circle at rest)
    pill_center: Point,
    /// Vertical center of the button row
    buttons_y: f32,
}

impl Layout {
    fn new(width: f32, height: f32, metrics: Metrics) -> Self {
        let pill_center = Point::new(width / 2.0, height * 0.45);
        Self {
            metrics,
            pill_center,
            buttons_y: pill_center.y + metrics.counter_height,
        }
    }

    /// The draggable circle at its current translation
    fn circle_region(&self, tx: f32, ty: f32) -> Circle {
        Circle::new(
            Point::new(self.pill_center.x + tx, self.pill_center.y + ty),
            self.metrics.circle_diameter / 2.0,
        )
    }

    fn minus_region(&self) -> Circle {
        Circle::new(
            Point::new(self.pill_center.x - self.metrics.button_offset, self.buttons_y),
            self.metrics.button_diameter / 2.0,
        )
    }

    fn plus_region(&self) -> Circle {
        Circle::new(
            Point::new(self.pill_center.x + self.metrics.button_offset, self.buttons_y),
            self.metrics.button_diameter / 2.0,
        )
    }
}

/// One frame of renderable state for the whole surface
#[derive(Clone, Debug)]
pub struct SurfaceFrame {
    pub counter: CounterFrame,
    /// Press highlight of the − button, in [0, 1]
    pub minus_highlight: f32,
    /// Press highlight of the + button, in [0, 1]
    pub plus_highlight: f32,
}

pub struct Surface {
    scheduler: AnimationScheduler,
    layout: Layout,
    counter: TallyCounter,
    minus: CounterButton,
    plus: CounterButton,
    router: PointerRouter,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Result<Self, MetricsError> {
        let metrics = Metrics::from_window_width(width)?;
        let layout = Layout::new(width, height, metrics);
        let scheduler = AnimationScheduler::new();
        let counter = TallyCounter::new(scheduler.handle(), metrics);
        let minus = CounterButton::new(scheduler.handle(), "-");
        let plus = CounterButton::new(scheduler.handle(), "+");
        Ok(Self {
            scheduler,
            layout,
            counter,
            minus,
            plus,
            router: PointerRouter::new(),
        })
    }

    pub fn with_haptics(mut self, haptics: SharedHaptics) -> Self {
        self.counter = self.counter.with_haptics(haptics.clone());
        self.minus = self.minus.with_haptics(haptics.clone());
        self.plus = self.plus.with_haptics(haptics);
        self
    }

    pub fn on_count(mut self, callback: CountCallback) -> Self {
        self.counter = self.counter.on_count(callback);
        self
    }

    pub fn count(&self) -> i32 {
        self.counter.count()
    }

    /// Feed one pointer event from the host
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event.event_type {
            event_types::POINTER_DOWN => self.pointer_down(event.position),
            event_types::POINTER_MOVE | event_types::DRAG => self.pointer_move(event.position),
            event_types::POINTER_UP | event_types::DRAG_END => self.pointer_up(),
            event_types::POINTER_CANCEL => self.pointer_cancel(),
            _ => {}
        }
    }

    fn pointer_down(&mut self, position: Point) {
        let Some(target) = self.hit_test(position) else {
            return;
        };
        if !self.router.begin(target, position) {
            return;
        }
        match target {
            PressTarget::Circle => {
                self.counter.press_begin();
                self.counter.gesture_begin();
            }
            PressTarget::Minus => {
                if self.minus.handle_event(event_types::POINTER_DOWN) {
                    self.counter.count_down();
                }
            }
            PressTarget::Plus => {
                if self.plus.handle_event(event_types::POINTER_DOWN) {
                    self.counter.count_up();
                }
            }
        }
    }

    fn pointer_move(&mut self, position: Point) {
        if self.router.pressed_target() != Some(PressTarget::Circle) {
            return;
        }
        if let Some(translation) = self.router.translation(position) {
            self.counter.gesture_update(translation);
        }
    }

    fn pointer_up(&mut self) {
        match self.router.release() {
            Some(PressTarget::Circle) => self.counter.gesture_end(),
            Some(PressTarget::Minus) => {
                self.minus.handle_event(event_types::POINTER_UP);
            }
            Some(PressTarget::Plus) => {
                self.plus.handle_event(event_types::POINTER_UP);
            }
            None => {}
        }
    }

    fn pointer_cancel(&mut self) {
        let target = self.router.release();
        self.cancel_press(target);
    }

    fn cancel_press(&mut self, target: Option<PressTarget>) {
        match target {
            Some(PressTarget::Circle) => self.counter.gesture_cancel(),
            Some(PressTarget::Minus) => {
                self.minus.handle_event(event_types::POINTER_CANCEL);
            }
            Some(PressTarget::Plus) => {
                self.plus.handle_event(event_types::POINTER_CANCEL);
            }
            None => {}
        }
    }

    /// Advance animations and the acceleration engine by `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        self.scheduler.advance(dt);
        self.counter.update();
        if let Some(target) = self.router.tick(dt * 1000.0) {
            debug!(target = ?target, "max-hold fail-safe tripped");
            self.cancel_press(Some(target));
        }
    }

    /// Snapshot everything the renderer needs for this frame
    pub fn frame(&self) -> SurfaceFrame {
        SurfaceFrame {
            counter: self.counter.frame(),
            minus_highlight: self.minus.highlight(),
            plus_highlight: self.plus.highlight(),
        }
    }

    fn hit_test(&self, position: Point) -> Option<PressTarget> {
        let counter = self.counter.frame();
        if self
            .layout
            .circle_region(counter.tx, counter.ty)
            .contains(position)
        {
            return Some(PressTarget::Circle);
        }
        if self.layout.minus_region().contains(position) {
            return Some(PressTarget::Minus);
        }
        if self.layout.plus_region().contains(position) {
            return Some(PressTarget::Plus);
        }
        None
    }

    /// Center of the circle at rest; handy for synthesizing events in hosts
    pub fn circle_center(&self) -> Point {
        self.layout.pill_center
    }

    pub fn minus_center(&self) -> Point {
        self.layout.minus_region().center
    }

    pub fn plus_center(&self) -> Point {
        self.layout.plus_region().center
    }
}

//! The tally counter widget
//!
//! Owns the count and the circle's translation, scale, and text-scale
//! animations. Gestures arrive as begin / update / end calls with the
//! pointer translation already measured from the gesture origin; the widget
//! decides the drag axis, counts at the horizontal extremes (with an
//! accelerating repeat while held there), and resets on a full downward
//! drag. All spring and ramp state lives in the shared scheduler, so a host
//! drives everything by calling [`TallyCounter::update`] once per frame
//! after advancing the scheduler.

use std::sync::Arc;

use tally_animation::{AnimatedValue, Easing, SchedulerHandle, SpringConfig, TimedValue};
use tally_core::{Impulse, SharedHaptics, Vec2};
use tracing::{debug, trace};

use crate::{Indicators, Metrics};

/// Invoked with the new count after every change
pub type CountCallback = Arc<dyn Fn(i32) + Send + Sync>;

/// Which axis a drag has committed to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragState {
    /// No active drag
    Idle,
    /// Pointer is down but hasn't moved far enough to pick an axis
    Undecided,
    /// Sliding left / right to count
    Horizontal,
    /// Pulling down to reset
    Vertical,
}

/// Repeat-counting while the circle is held at a horizontal extreme
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Acceleration {
    Off,
    Incrementing,
    Decrementing,
}

impl Acceleration {
    fn delta(self) -> f32 {
        match self {
            Acceleration::Off => 0.0,
            Acceleration::Incrementing => 1.0,
            Acceleration::Decrementing => -1.0,
        }
    }
}

/// Everything a renderer needs to draw one frame of the counter
#[derive(Clone, Debug, PartialEq)]
pub struct CounterFrame {
    /// Circle translation from the pill center
    pub tx: f32,
    pub ty: f32,
    /// Circle scale (1.0 at rest, up to 1.25 at the extremes)
    pub circle_scale: f32,
    /// Count text scale (bounces on each change)
    pub text_scale: f32,
    /// The count as displayed
    pub display: String,
    /// Affordance opacities
    pub indicators: Indicators,
}

pub struct TallyCounter {
    metrics: Metrics,
    haptics: Option<SharedHaptics>,
    on_count: Option<CountCallback>,

    /// The live count; integral except transiently during rounding
    count: f32,
    /// Count at gesture start, restored when a drag backs out
    baseline: f32,
    drag: DragState,
    accel: Acceleration,

    tx: AnimatedValue,
    ty: AnimatedValue,
    circle_scale: AnimatedValue,
    text_scale: AnimatedValue,
    /// Tick interval, decaying from initial to final while accelerating
    interval: TimedValue,
    /// One countdown per tick; its duration is resampled each cycle
    clock: TimedValue,
}

impl TallyCounter {
    pub fn new(handle: SchedulerHandle, metrics: Metrics) -> Self {
        Self {
            metrics,
            haptics: None,
            on_count: None,
            count: 0.0,
            baseline: 0.0,
            drag: DragState::Idle,
            accel: Acceleration::Off,
            tx: AnimatedValue::new(handle.clone(), 0.0, SpringConfig::gentle()),
            ty: AnimatedValue::new(handle.clone(), 0.0, SpringConfig::gentle()),
            circle_scale: AnimatedValue::new(handle.clone(), 1.0, SpringConfig::stiff()),
            text_scale: AnimatedValue::new(handle.clone(), 1.0, SpringConfig::stiff()),
            interval: TimedValue::new(
                handle.clone(),
                Metrics::INITIAL_TICK_INTERVAL_MS,
                Metrics::FINAL_TICK_INTERVAL_MS,
                Metrics::ACCELERATION_RAMP_MS,
                Easing::Linear,
            ),
            clock: TimedValue::new(
                handle,
                0.0,
                1.0,
                Metrics::INITIAL_TICK_INTERVAL_MS,
                Easing::Linear,
            ),
        }
    }

    pub fn with_haptics(mut self, haptics: SharedHaptics) -> Self {
        self.haptics = Some(haptics);
        self
    }

    pub fn on_count(mut self, callback: CountCallback) -> Self {
        self.on_count = Some(callback);
        self
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// The count as shown to the user
    pub fn count(&self) -> i32 {
        self.count.round() as i32
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn acceleration(&self) -> Acceleration {
        self.accel
    }

    // ========================================================================
    // Taps
    // ========================================================================

    pub fn count_up(&mut self) {
        self.tap(1.0);
    }

    pub fn count_down(&mut self) {
        self.tap(-1.0);
    }

    fn tap(&mut self, delta: f32) {
        self.count += delta;
        self.baseline = self.count;
        self.bounce_text(SpringConfig::stiff(), self.tap_peak());
        self.notify();
        debug!(count = self.count(), "tap");
    }

    /// Multi-digit counts get a slightly larger bounce so the change
    /// stays legible
    fn tap_peak(&self) -> f32 {
        if self.count().abs() >= 10 {
            1.08
        } else {
            1.07
        }
    }

    fn bounce_text(&mut self, config: SpringConfig, peak: f32) {
        self.text_scale.set_config(config);
        self.text_scale.set_target_sequence(&[peak, 1.0]);
    }

    // ========================================================================
    // Press feedback on the circle itself
    // ========================================================================

    pub fn press_begin(&mut self) {
        self.circle_scale.set_target(1.1);
    }

    pub fn press_end(&mut self) {
        self.circle_scale.set_target(1.0);
    }

    // ========================================================================
    // Drag gesture
    // ========================================================================

    pub fn gesture_begin(&mut self) {
        self.drag = DragState::Undecided;
        self.baseline = self.count;
    }

    /// Feed the pointer translation measured from the gesture origin
    pub fn gesture_update(&mut self, translation: Vec2) {
        if self.drag == DragState::Idle {
            return;
        }

        if self.drag == DragState::Undecided {
            if translation.x.abs() > self.metrics.axis_threshold {
                self.drag = DragState::Horizontal;
            } else if translation.y > self.metrics.axis_threshold {
                self.drag = DragState::Vertical;
            } else {
                return;
            }
            trace!(axis = ?self.drag, "drag axis locked");
        }

        match self.drag {
            DragState::Horizontal => self.horizontal_update(translation.x),
            DragState::Vertical => self.vertical_update(translation),
            _ => {}
        }
    }

    fn horizontal_update(&mut self, x: f32) {
        let max_h = self.metrics.max_horizontal;
        let tol = self.metrics.count_tolerance;
        self.tx.set_immediate(x.clamp(-max_h, max_h));
        self.ty.set_immediate(0.0);

        let tx = self.tx.get();
        if tx >= max_h - tol {
            if self.accel != Acceleration::Incrementing {
                self.enter_acceleration(Acceleration::Incrementing);
            }
        } else if tx <= -max_h + tol {
            if self.accel != Acceleration::Decrementing {
                self.enter_acceleration(Acceleration::Decrementing);
            }
        } else if self.count != self.baseline {
            // Backed out of the extreme band before release: the tentative
            // counts are abandoned and the circle shrinks to press size.
            self.count = self.baseline;
            self.clear_acceleration();
            self.circle_scale.set_target(1.1);
            self.notify();
            debug!(count = self.count(), "extreme band exited, count restored");
        } else {
            self.clear_acceleration();
        }
    }

    fn vertical_update(&mut self, translation: Vec2) {
        let wiggle = self.metrics.vertical_wiggle;
        let max_v = self.metrics.max_vertical;
        self.tx.set_immediate(translation.x.clamp(-wiggle, wiggle));
        self.ty.set_immediate(translation.y.clamp(0.0, max_v));

        if self.ty.get() >= max_v - self.metrics.count_tolerance {
            if self.count != 0.0 {
                self.count = 0.0;
                self.circle_scale.set_target(1.25);
                self.pulse(Impulse::Light);
                self.notify();
                debug!("count reset");
            }
        } else if self.count == 0.0 && self.baseline != 0.0 {
            // Pulled back up before release: the reset is undone.
            self.count = self.baseline;
            self.circle_scale.set_target(1.1);
            self.notify();
            debug!(count = self.count(), "reset undone, count restored");
        }
    }

    fn enter_acceleration(&mut self, mode: Acceleration) {
        self.accel = mode;
        self.count += mode.delta();
        self.circle_scale.set_target(1.25);
        self.interval.start();
        self.clock.restart_with_duration(self.interval.value());
        self.pulse(Impulse::Light);
        self.notify();
        debug!(mode = ?mode, count = self.count(), "acceleration engaged");
    }

    fn clear_acceleration(&mut self) {
        if self.accel != Acceleration::Off {
            self.accel = Acceleration::Off;
            self.interval.reset();
            self.clock.reset();
        }
    }

    pub fn gesture_end(&mut self) {
        self.finalize();
    }

    pub fn gesture_cancel(&mut self) {
        self.finalize();
    }

    fn finalize(&mut self) {
        let before = self.count;
        self.count = self.count.round();
        self.baseline = self.count;
        self.drag = DragState::Idle;
        self.clear_acceleration();
        self.tx.set_target(0.0);
        self.ty.set_target(0.0);
        self.circle_scale.set_target(1.0);
        if self.count != before {
            self.notify();
        }
        debug!(count = self.count(), "gesture finished");
    }

    // ========================================================================
    // Per-frame tick
    // ========================================================================

    /// Advance acceleration; call once per frame after the scheduler steps
    pub fn update(&mut self) {
        if self.accel == Acceleration::Off {
            return;
        }
        if self.clock.is_finished() {
            self.count += self.accel.delta();
            self.bounce_text(SpringConfig::snappy(), 1.1);
            self.pulse(Impulse::Light);
            self.notify();
            // The next cycle picks up the now-shorter interval.
            self.clock.restart_with_duration(self.interval.value());
            trace!(count = self.count(), interval_ms = self.interval.value(), "accelerated tick");
        }
    }

    /// Snapshot the animated state for rendering
    pub fn frame(&self) -> CounterFrame {
        let tx = self.tx.get();
        let ty = self.ty.get();
        CounterFrame {
            tx,
            ty,
            circle_scale: self.circle_scale.get(),
            text_scale: self.text_scale.get(),
            display: self.count().to_string(),
            indicators: Indicators::derive(tx, ty, &self.metrics),
        }
    }

    fn pulse(&self, impulse: Impulse) {
        if let Some(haptics) = &self.haptics {
            haptics.pulse(impulse);
        }
    }

    fn notify(&self) {
        if let Some(callback) = &self.on_count {
            callback(self.count());
        }
    }
}

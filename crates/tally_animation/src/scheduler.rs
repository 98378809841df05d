//! Animation scheduler
//!
//! Owns all live animations and steps them once per frame. Animations are
//! implicitly registered when created through the wrapper types:
//! - [`AnimatedValue`] - spring-driven values (offsets, scales, highlights)
//! - [`TimedValue`] - duration-driven ramps (the acceleration clock and
//!   interval decay)
//!
//! The host drives the scheduler: call [`AnimationScheduler::advance`] with
//! an explicit delta for deterministic stepping (tests, fixed-rate hosts) or
//! [`AnimationScheduler::tick`] to derive the delta from wall-clock time.
//! Gesture handling runs on the same thread, so a new gesture event can
//! retarget any animation between frames without coordination.

use crate::spring::{Spring, SpringConfig};
use crate::timing::{Easing, TimedAnimation};
use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex, Weak};
use std::time::Instant;

new_key_type! {
    /// Handle to a registered spring animation
    pub struct SpringId;
    /// Handle to a registered timed ramp
    pub struct RampId;
}

/// Internal state of the animation scheduler
struct SchedulerInner {
    springs: SlotMap<SpringId, Spring>,
    ramps: SlotMap<RampId, TimedAnimation>,
    last_frame: Instant,
}

/// The animation scheduler that steps all active animations
///
/// Held by the surface and shared with widgets via [`SchedulerHandle`].
pub struct AnimationScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                springs: SlotMap::with_key(),
                ramps: SlotMap::with_key(),
                last_frame: Instant::now(),
            })),
        }
    }

    /// Get a handle to this scheduler for passing to widgets
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Step all animations by an explicit delta (seconds)
    ///
    /// Returns true if any animations are still active.
    pub fn advance(&self, dt: f32) -> bool {
        let mut inner = self.inner.lock().unwrap();
        inner.last_frame = Instant::now();
        Self::step_all(&mut inner, dt)
    }

    /// Step all animations by the wall-clock time since the last frame
    ///
    /// Returns true if any animations are still active.
    pub fn tick(&self) -> bool {
        let mut inner = self.inner.lock().unwrap();
        let now = Instant::now();
        let dt = (now - inner.last_frame).as_secs_f32();
        inner.last_frame = now;
        Self::step_all(&mut inner, dt)
    }

    fn step_all(inner: &mut SchedulerInner, dt: f32) -> bool {
        let dt_ms = dt * 1000.0;

        // Stiff springs need frame-sized integration steps; hosts may hand
        // us much larger deltas after a stall.
        const MAX_SPRING_DT: f32 = 1.0 / 60.0;
        let substeps = (dt / MAX_SPRING_DT).ceil().max(1.0) as usize;
        let sub_dt = dt / substeps as f32;
        for _ in 0..substeps {
            for (_, spring) in inner.springs.iter_mut() {
                spring.step(sub_dt);
            }
        }
        for (_, ramp) in inner.ramps.iter_mut() {
            ramp.tick(dt_ms);
        }

        // Animations stay registered until their wrapper drops, so a
        // settled spring can be retargeted and restarted at any time.
        inner.springs.iter().any(|(_, s)| !s.is_settled())
            || inner.ramps.iter().any(|(_, r)| r.is_playing())
    }

    /// Check if any animations are still active
    pub fn has_active_animations(&self) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.springs.iter().any(|(_, s)| !s.is_settled())
            || inner.ramps.iter().any(|(_, r)| r.is_playing())
    }

    /// Number of registered springs
    pub fn spring_count(&self) -> usize {
        self.inner.lock().unwrap().springs.len()
    }

    /// Number of registered ramps
    pub fn ramp_count(&self) -> usize {
        self.inner.lock().unwrap().ramps.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Weak handle to the scheduler
///
/// Widgets hold handles; animations created through a handle whose scheduler
/// has been dropped become inert rather than panicking.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    pub fn register_spring(&self, spring: Spring) -> Option<SpringId> {
        self.inner
            .upgrade()
            .map(|inner| inner.lock().unwrap().springs.insert(spring))
    }

    pub fn with_spring_mut<F, R>(&self, id: SpringId, f: F) -> Option<R>
    where
        F: FnOnce(&mut Spring) -> R,
    {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().springs.get_mut(id).map(f))
    }

    pub fn get_spring_value(&self, id: SpringId) -> Option<f32> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().springs.get(id).map(|s| s.value()))
    }

    pub fn is_spring_settled(&self, id: SpringId) -> bool {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().springs.get(id).map(|s| s.is_settled()))
            .unwrap_or(true)
    }

    pub fn remove_spring(&self, id: SpringId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().springs.remove(id);
        }
    }

    pub fn register_ramp(&self, ramp: TimedAnimation) -> Option<RampId> {
        self.inner
            .upgrade()
            .map(|inner| inner.lock().unwrap().ramps.insert(ramp))
    }

    pub fn with_ramp_mut<F, R>(&self, id: RampId, f: F) -> Option<R>
    where
        F: FnOnce(&mut TimedAnimation) -> R,
    {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().ramps.get_mut(id).map(f))
    }

    pub fn get_ramp_value(&self, id: RampId) -> Option<f32> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().ramps.get(id).map(|r| r.value()))
    }

    pub fn remove_ramp(&self, id: RampId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().ramps.remove(id);
        }
    }

    /// Whether the scheduler behind this handle is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

// ============================================================================
// Animated Value (spring-driven)
// ============================================================================

/// A spring-animated value
///
/// Changing the target starts (or supersedes) a spring animation toward it;
/// reads return the interpolated in-flight value. The spring registers with
/// the scheduler on first retarget and is removed when the value drops.
#[derive(Clone)]
pub struct AnimatedValue {
    handle: SchedulerHandle,
    spring_id: Option<SpringId>,
    config: SpringConfig,
    /// The last known value when no spring is registered
    current: f32,
    /// The final target we're animating towards
    target: f32,
}

impl AnimatedValue {
    pub fn new(handle: SchedulerHandle, initial: f32, config: SpringConfig) -> Self {
        Self {
            handle,
            spring_id: None,
            config,
            current: initial,
            target: initial,
        }
    }

    /// Swap the spring parameters for this and future animations
    ///
    /// Interactions may retarget the same value with different stiffness
    /// (a tap bounce vs an accelerated-tick bounce), so the config is
    /// mutable.
    pub fn set_config(&mut self, config: SpringConfig) {
        self.config = config;
        if let Some(id) = self.spring_id {
            self.handle.with_spring_mut(id, |s| s.set_config(config));
        }
    }

    /// Set the target value - animates if different from the current value
    pub fn set_target(&mut self, target: f32) {
        self.target = target;

        if let Some(id) = self.spring_id {
            self.handle.with_spring_mut(id, |s| s.set_target(target));
        } else if (target - self.current).abs() > f32::EPSILON {
            self.register(|spring| spring.set_target(target));
        }
    }

    /// Animate through a sequence of targets (a bounce pulse is
    /// `set_target_sequence(&[peak, rest])`)
    pub fn set_target_sequence(&mut self, targets: &[f32]) {
        let Some(last) = targets.last().copied() else {
            return;
        };
        self.target = last;

        if let Some(id) = self.spring_id {
            self.handle
                .with_spring_mut(id, |s| s.set_target_sequence(targets));
        } else {
            let targets = targets.to_vec();
            self.register(move |spring| spring.set_target_sequence(&targets));
        }
    }

    fn register<F: FnOnce(&mut Spring)>(&mut self, init: F) {
        let mut spring = Spring::new(self.config, self.current);
        init(&mut spring);
        self.spring_id = self.handle.register_spring(spring);
    }

    /// Get the current animated value
    pub fn get(&self) -> f32 {
        if let Some(id) = self.spring_id {
            self.handle.get_spring_value(id).unwrap_or(self.target)
        } else {
            self.current
        }
    }

    /// Set the value immediately, discarding any in-flight animation
    pub fn set_immediate(&mut self, value: f32) {
        if let Some(id) = self.spring_id.take() {
            self.handle.remove_spring(id);
        }
        self.current = value;
        self.target = value;
    }

    /// Check if the value is still moving toward its target
    pub fn is_animating(&self) -> bool {
        match self.spring_id {
            Some(id) => !self.handle.is_spring_settled(id),
            None => false,
        }
    }

    pub fn target(&self) -> f32 {
        self.target
    }
}

impl Drop for AnimatedValue {
    fn drop(&mut self) {
        if let Some(id) = self.spring_id {
            self.handle.remove_spring(id);
        }
    }
}

// ============================================================================
// Timed Value (ramp-driven)
// ============================================================================

/// A duration-animated value
///
/// Wraps a [`TimedAnimation`] registered with the scheduler. Unlike
/// [`AnimatedValue`], the ramp is registered up front: the counter polls it
/// every frame (clock completion, interval sampling) whether or not it is
/// currently playing.
pub struct TimedValue {
    handle: SchedulerHandle,
    ramp_id: Option<RampId>,
    /// Start value, reported when the scheduler is gone
    from: f32,
}

impl TimedValue {
    pub fn new(handle: SchedulerHandle, from: f32, to: f32, duration_ms: f32, easing: Easing) -> Self {
        let ramp_id = handle.register_ramp(TimedAnimation::new(from, to, duration_ms, easing));
        Self {
            handle,
            ramp_id,
            from,
        }
    }

    /// Start (or restart) the ramp from the beginning
    pub fn start(&mut self) {
        if let Some(id) = self.ramp_id {
            self.handle.with_ramp_mut(id, |r| r.start());
        }
    }

    /// Restart from the beginning with a new duration
    pub fn restart_with_duration(&mut self, duration_ms: f32) {
        if let Some(id) = self.ramp_id {
            self.handle
                .with_ramp_mut(id, |r| r.restart_with_duration(duration_ms));
        }
    }

    /// Stop and rewind to the start value
    pub fn reset(&mut self) {
        if let Some(id) = self.ramp_id {
            self.handle.with_ramp_mut(id, |r| r.reset());
        }
    }

    /// Current eased value
    pub fn value(&self) -> f32 {
        match self.ramp_id {
            Some(id) => self.handle.get_ramp_value(id).unwrap_or(self.from),
            None => self.from,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.ramp_id
            .and_then(|id| self.handle.with_ramp_mut(id, |r| r.is_playing()))
            .unwrap_or(false)
    }

    /// Whether the ramp has run to completion
    pub fn is_finished(&self) -> bool {
        self.ramp_id
            .and_then(|id| self.handle.with_ramp_mut(id, |r| r.is_finished()))
            .unwrap_or(false)
    }
}

impl Drop for TimedValue {
    fn drop(&mut self) {
        if let Some(id) = self.ramp_id {
            self.handle.remove_ramp(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animated_value_reaches_target() {
        let scheduler = AnimationScheduler::new();
        let mut value = AnimatedValue::new(scheduler.handle(), 0.0, SpringConfig::stiff());

        value.set_target(50.0);
        assert!(value.is_animating());

        for _ in 0..600 {
            scheduler.advance(1.0 / 120.0);
        }

        assert!(!value.is_animating());
        assert!((value.get() - 50.0).abs() < 0.01);
    }

    #[test]
    fn test_set_immediate_discards_animation() {
        let scheduler = AnimationScheduler::new();
        let mut value = AnimatedValue::new(scheduler.handle(), 0.0, SpringConfig::stiff());

        value.set_target(50.0);
        value.set_immediate(10.0);

        assert!(!value.is_animating());
        assert_eq!(value.get(), 10.0);
        assert_eq!(scheduler.spring_count(), 0);
    }

    #[test]
    fn test_drop_removes_spring() {
        let scheduler = AnimationScheduler::new();
        {
            let mut value = AnimatedValue::new(scheduler.handle(), 0.0, SpringConfig::stiff());
            value.set_target(1.0);
            assert_eq!(scheduler.spring_count(), 1);
        }
        assert_eq!(scheduler.spring_count(), 0);
    }

    #[test]
    fn test_timed_value_completes() {
        let scheduler = AnimationScheduler::new();
        let mut clock = TimedValue::new(scheduler.handle(), 0.0, 1.0, 500.0, Easing::Linear);

        clock.start();
        assert!(clock.is_playing());

        scheduler.advance(0.25);
        assert!((clock.value() - 0.5).abs() < 1e-3);

        scheduler.advance(0.25);
        assert!(clock.is_finished());
        assert!(!scheduler.has_active_animations());
    }

    #[test]
    fn test_dead_scheduler_is_inert() {
        let handle = {
            let scheduler = AnimationScheduler::new();
            scheduler.handle()
        };
        assert!(!handle.is_alive());

        let mut value = AnimatedValue::new(handle.clone(), 3.0, SpringConfig::stiff());
        value.set_target(10.0);
        assert!(!value.is_animating());
        assert_eq!(value.get(), 3.0);

        let clock = TimedValue::new(handle, 0.0, 1.0, 100.0, Easing::Linear);
        assert_eq!(clock.value(), 0.0);
        assert!(!clock.is_finished());
    }
}

//! Timed animations
//!
//! Duration-based from→to ramps with easing. The counter uses two of these:
//! the acceleration clock (0→1 per tick cycle) and the tick-interval decay
//! (initial→final interval over the ramp window).

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// A duration-based animation between two values
#[derive(Clone, Debug)]
pub struct TimedAnimation {
    from: f32,
    to: f32,
    duration_ms: f32,
    easing: Easing,
    elapsed_ms: f32,
    playing: bool,
}

impl TimedAnimation {
    pub fn new(from: f32, to: f32, duration_ms: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms.max(f32::EPSILON),
            easing,
            elapsed_ms: 0.0,
            playing: false,
        }
    }

    /// Start (or restart) from the beginning
    pub fn start(&mut self) {
        self.elapsed_ms = 0.0;
        self.playing = true;
    }

    /// Restart from the beginning with a new duration
    pub fn restart_with_duration(&mut self, duration_ms: f32) {
        self.duration_ms = duration_ms.max(f32::EPSILON);
        self.start();
    }

    /// Stop and rewind to the start value
    pub fn reset(&mut self) {
        self.elapsed_ms = 0.0;
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether the animation has run to completion
    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    /// Progress in [0, 1]
    pub fn progress(&self) -> f32 {
        (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Current eased value
    pub fn value(&self) -> f32 {
        self.from + (self.to - self.from) * self.easing.apply(self.progress())
    }

    /// Advance by delta time (in milliseconds)
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }

        self.elapsed_ms += dt_ms;

        if self.elapsed_ms >= self.duration_ms {
            self.elapsed_ms = self.duration_ms;
            self.playing = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_ramp() {
        let mut ramp = TimedAnimation::new(1500.0, 100.0, 1800.0, Easing::Linear);
        ramp.start();

        assert!((ramp.value() - 1500.0).abs() < 1e-3);

        ramp.tick(900.0);
        assert!((ramp.value() - 800.0).abs() < 1e-3);

        ramp.tick(900.0);
        assert!(ramp.is_finished());
        assert!(!ramp.is_playing());
        assert!((ramp.value() - 100.0).abs() < 1e-3);

        // Holds the end value after completion
        ramp.tick(500.0);
        assert!((ramp.value() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_restart_with_new_duration() {
        let mut clock = TimedAnimation::new(0.0, 1.0, 1000.0, Easing::Linear);
        clock.start();
        clock.tick(1000.0);
        assert!(clock.is_finished());

        clock.restart_with_duration(200.0);
        assert!(!clock.is_finished());
        clock.tick(100.0);
        assert!((clock.value() - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_reset_rewinds_to_start() {
        let mut clock = TimedAnimation::new(0.0, 1.0, 1000.0, Easing::Linear);
        clock.start();
        clock.tick(600.0);
        clock.reset();

        assert!(!clock.is_playing());
        assert!((clock.value() - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_easing_monotonic_endpoints() {
        for easing in [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
            assert!((easing.apply(0.0)).abs() < 1e-6);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6);
        }
    }
}

//! Spring physics animation
//!
//! RK4-integrated spring physics for the widget's offsets and scale bounces.
//! Supports preset configurations, chained target sequences, and overshoot
//! clamping for presses that must not wobble past their rest value.

use smallvec::SmallVec;

/// Configuration for a spring animation
#[derive(Clone, Copy, Debug)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Stop dead at the target instead of oscillating past it
    pub overshoot_clamping: bool,
    /// Distance from target below which the spring may settle.
    /// The animated quantities here range from normalized scales (~0.07
    /// amplitude) to pixel offsets, so the threshold is per-config rather
    /// than a fixed pixel value.
    pub rest_delta: f32,
    /// Velocity magnitude below which the spring may settle
    pub rest_velocity: f32,
}

impl SpringConfig {
    /// Create a spring configuration with default rest thresholds
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            overshoot_clamping: false,
            rest_delta: 0.001,
            rest_velocity: 0.01,
        }
    }

    /// A gentle spring for offsets returning to rest
    pub fn gentle() -> Self {
        Self::new(120.0, 14.0, 1.0)
    }

    /// A stiff, snappy spring (count bounces, press scale)
    pub fn stiff() -> Self {
        Self::new(600.0, 30.0, 1.0)
    }

    /// A very stiff spring for the accelerated-tick text bounce
    pub fn snappy() -> Self {
        Self::new(800.0, 34.0, 1.0)
    }

    /// A soft spring for button highlight fade-out
    pub fn soft() -> Self {
        Self::new(60.0, 14.0, 1.0)
    }

    pub fn clamped(mut self) -> Self {
        self.overshoot_clamping = true;
        self
    }

    /// Calculate critical damping for this spring's stiffness and mass
    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    /// Check if the spring is underdamped (will oscillate)
    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::stiff()
    }
}

/// A spring-based animator
#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
    /// Targets to chase after the current one settles (bounce sequences)
    pending: SmallVec<[f32; 2]>,
    /// True if the value was below the target when it was issued,
    /// used by overshoot clamping
    approaching_from_below: bool,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
            pending: SmallVec::new(),
            approaching_from_below: false,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Swap the spring parameters, keeping position and velocity
    pub fn set_config(&mut self, config: SpringConfig) {
        self.config = config;
    }

    /// Retarget the spring, discarding any pending sequence.
    /// Velocity carries over, so an in-flight animation is superseded
    /// smoothly.
    pub fn set_target(&mut self, target: f32) {
        self.pending.clear();
        self.target = target;
        self.approaching_from_below = self.value < target;
    }

    /// Animate through a sequence of targets, advancing as each settles.
    /// An empty slice is a no-op.
    pub fn set_target_sequence(&mut self, targets: &[f32]) {
        let Some((first, rest)) = targets.split_first() else {
            return;
        };
        self.set_target(*first);
        self.pending.extend(rest.iter().copied());
    }

    /// Check if the spring has settled at its final target
    pub fn is_settled(&self) -> bool {
        self.pending.is_empty() && self.at_rest()
    }

    fn at_rest(&self) -> bool {
        (self.value - self.target).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_velocity
    }

    /// Step the spring simulation using RK4 integration
    pub fn step(&mut self, dt: f32) {
        if self.at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
            // Advance a bounce sequence once the current target is reached
            if let Some(next) = self.pending.first().copied() {
                self.pending.remove(0);
                self.target = next;
                self.approaching_from_below = self.value < next;
            }
            return;
        }

        // RK4 integration for accurate spring physics
        let k1_v = self.acceleration(self.value, self.velocity);
        let k1_x = self.velocity;

        let k2_v = self.acceleration(
            self.value + k1_x * dt * 0.5,
            self.velocity + k1_v * dt * 0.5,
        );
        let k2_x = self.velocity + k1_v * dt * 0.5;

        let k3_v = self.acceleration(
            self.value + k2_x * dt * 0.5,
            self.velocity + k2_v * dt * 0.5,
        );
        let k3_x = self.velocity + k2_v * dt * 0.5;

        let k4_v = self.acceleration(self.value + k3_x * dt, self.velocity + k3_v * dt);
        let k4_x = self.velocity + k3_v * dt;

        self.velocity += (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) * dt / 6.0;
        self.value += (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x) * dt / 6.0;

        if self.config.overshoot_clamping {
            let overshot = if self.approaching_from_below {
                self.value > self.target
            } else {
                self.value < self.target
            };
            if overshot {
                self.value = self.target;
                self.velocity = 0.0;
            }
        }
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let spring_force = -self.config.stiffness * (x - self.target);
        let damping_force = -self.config.damping * v;
        (spring_force + damping_force) / self.config.mass
    }
}

//! Tally Animation System
//!
//! Spring physics and timed ramps for the counter widgets.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Target Sequences**: chained spring targets for bounce pulses
//! - **Overshoot Clamping**: springs that stop dead at their target
//! - **Timed Ramps**: duration-based from→to animations with easing
//! - **Interruptible**: re-issuing a target supersedes the animation in flight
//!
//! All live animations are owned by an [`AnimationScheduler`] and stepped
//! once per frame by the host. The wrapper types [`AnimatedValue`] and
//! [`TimedValue`] register implicitly on first use and deregister on drop.

pub mod scheduler;
pub mod spring;
pub mod timing;

pub use scheduler::{
    AnimatedValue, AnimationScheduler, RampId, SchedulerHandle, SpringId, TimedValue,
};
pub use spring::{Spring, SpringConfig};
pub use timing::{Easing, TimedAnimation};

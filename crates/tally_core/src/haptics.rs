//! Haptic feedback abstraction
//!
//! Widgets request feedback through a driver trait so the same interaction
//! code runs against a platform bridge in production and a recording driver
//! in tests. The default driver does nothing, which is also the correct
//! behavior on hosts without a vibration motor.

use std::sync::{Arc, Mutex};

/// The kinds of feedback the counter widgets request
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Impulse {
    /// Light impact, fired on each count adjustment during a drag
    Light,
    /// Selection tick, fired when a tap button engages
    Selection,
}

/// Driver for haptic feedback
///
/// Platform integrations register a real implementation; tests use
/// [`RecordingHaptics`].
pub trait HapticDriver: Send + Sync {
    fn pulse(&self, impulse: Impulse);
}

/// Shared driver handle as stored by widgets
pub type SharedHaptics = Arc<dyn HapticDriver>;

/// Driver that ignores all feedback requests
#[derive(Debug, Default)]
pub struct NoopHaptics;

impl HapticDriver for NoopHaptics {
    fn pulse(&self, _impulse: Impulse) {}
}

/// Driver that records every pulse, for asserting feedback in tests
#[derive(Debug, Default)]
pub struct RecordingHaptics {
    pulses: Mutex<Vec<Impulse>>,
}

impl RecordingHaptics {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// All pulses recorded so far, in order
    pub fn pulses(&self) -> Vec<Impulse> {
        self.pulses.lock().unwrap().clone()
    }

    /// Number of pulses of a given kind
    pub fn count_of(&self, impulse: Impulse) -> usize {
        self.pulses
            .lock()
            .unwrap()
            .iter()
            .filter(|p| **p == impulse)
            .count()
    }

    pub fn clear(&self) {
        self.pulses.lock().unwrap().clear();
    }
}

impl HapticDriver for RecordingHaptics {
    fn pulse(&self, impulse: Impulse) {
        tracing::trace!(?impulse, "haptic pulse");
        self.pulses.lock().unwrap().push(impulse);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_driver_keeps_order() {
        let haptics = RecordingHaptics::new();
        haptics.pulse(Impulse::Selection);
        haptics.pulse(Impulse::Light);
        haptics.pulse(Impulse::Light);

        assert_eq!(
            haptics.pulses(),
            vec![Impulse::Selection, Impulse::Light, Impulse::Light]
        );
        assert_eq!(haptics.count_of(Impulse::Light), 2);
    }

    #[test]
    fn test_noop_driver_is_silent() {
        // Only checks it can be called through the trait object
        let haptics: SharedHaptics = Arc::new(NoopHaptics);
        haptics.pulse(Impulse::Light);
    }
}
